// Help overlay rendering
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::raw(action),
    ])
}

// Render the help tab
pub fn render_help_tab<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Controls",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key_line("Tab / Shift+Tab", "Switch between tabs"),
        key_line("1 / 2 / 3", "Jump to Controls, Logs, or Help"),
        key_line("Left / Right", "Move focus between the controls"),
        key_line("Space / Enter", "Activate the focused control"),
        key_line("Mouse click", "Activate the control under the cursor"),
        key_line("Up / Down, j / k", "Scroll the logs"),
        key_line("f", "Cycle the log level filter"),
        key_line("?", "Toggle this help overlay"),
        key_line("q / Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "The toggle is a controlled component: the app owns its",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "state and re-supplies it after every change event.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(" Help ", Style::default().fg(Color::Yellow))),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(help_widget, area);
}

// Render a help overlay
pub fn render_help_overlay<B: Backend>(f: &mut Frame<B>) {
    let size = f.size();

    // Create a slightly smaller centered modal
    let width = size.width.min(60);
    let height = size.height.min(20);
    let x = (size.width - width) / 2;
    let y = (size.height - height) / 2;

    let help_area = Rect {
        x,
        y,
        width,
        height,
    };

    // Create a clear background
    let clear = Block::default().style(Style::default().bg(Color::Black));
    f.render_widget(clear, size);

    // Render the help content
    render_help_tab(f, help_area);
}
