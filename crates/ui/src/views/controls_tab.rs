// Controls tab rendering
use crate::app::{App, POWER_TOGGLE_ID};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

// Render the controls tab with the two demo widgets
pub fn render_controls_tab<B: Backend>(f: &mut Frame<B>, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Header with instructions
                Constraint::Min(4),    // Counter button region
                Constraint::Length(1), // Toggle line
            ]
            .as_ref(),
        )
        .margin(1)
        .split(area);

    // Render header with instructions
    let header_text = vec![
        Line::from(vec![Span::styled(
            "Demo Controls",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Cyan)),
            Span::raw(": Move focus   "),
            Span::styled("Space/Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": Activate   "),
            Span::styled("Mouse", Style::default().fg(Color::Cyan)),
            Span::raw(": Click a control"),
        ]),
    ];

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    f.render_widget(header, chunks[0]);

    // Counter button: a focus-marker strip, then the flat clickable
    // surface carved out of the remaining region
    let counter_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(4)].as_ref())
        .split(chunks[1]);

    render_focus_marker(f, counter_chunks[0], app.focused_control == 0);

    let surface = app.counter.surface(counter_chunks[1]);
    app.counter.register(&mut app.locator, surface);
    f.render_widget(app.counter.render(), surface);

    // Toggle line
    let toggle_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(4)].as_ref())
        .split(chunks[2]);

    render_focus_marker(f, toggle_chunks[0], app.focused_control == 1);

    let toggle = app.power_toggle();
    toggle.register(&mut app.locator, POWER_TOGGLE_ID, toggle_chunks[1]);
    f.render_widget(toggle.render(), toggle_chunks[1]);
}

fn render_focus_marker<B: Backend>(f: &mut Frame<B>, area: Rect, focused: bool) {
    if focused {
        let marker = Paragraph::new(Line::from(Span::styled(
            "»",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(marker, area);
    }
}
