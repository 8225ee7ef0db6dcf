// Status bar rendering
use crate::app::App;
use crate::models::Tab;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// Render the status bar
pub fn render_status_bar<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    // If we have a status message, show it instead of the normal status bar
    if let Some(message) = &app.status_message {
        let is_success = message.starts_with("✅");

        let status_message = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(if is_success { Color::Green } else { Color::Red })
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center);

        f.render_widget(status_message, area);
        return;
    }

    // Normal status bar
    let mut status_items = vec![];

    // Toggle position
    status_items.push(Span::styled(
        format!(
            " {} ",
            if app.toggle_on {
                app.toggle_on_label.to_uppercase()
            } else {
                app.toggle_off_label.to_uppercase()
            }
        ),
        Style::default()
            .bg(if app.toggle_on {
                Color::Green
            } else {
                Color::DarkGray
            })
            .fg(Color::White),
    ));

    // Click count
    status_items.push(Span::raw(" "));
    status_items.push(Span::styled(
        format!(" Clicks: {} ", app.counter.click_count()),
        Style::default().bg(Color::Blue).fg(Color::White),
    ));

    // Add context-specific help based on current tab
    status_items.push(Span::raw(" "));
    let help_text = match Tab::from_index(app.selected_tab) {
        Tab::Controls => match app.focused_control_name() {
            "counter" => "[Space/Enter] Click the counter   [←/→] Move focus",
            _ => "[Space/Enter] Flip the toggle   [←/→] Move focus",
        },
        Tab::Logs => "[↑/↓] Scroll logs   [f] Filter",
        Tab::Help => "[?] Toggle help overlay",
    };
    status_items.push(Span::styled(
        format!(" {} ", help_text),
        Style::default().fg(Color::White),
    ));

    // Show keybindings for common actions
    status_items.push(Span::raw(" "));
    status_items.push(Span::styled(
        " [Tab] Switch tabs ",
        Style::default().fg(Color::White),
    ));
    status_items.push(Span::styled(
        " [?] Help ",
        Style::default().fg(Color::White),
    ));
    status_items.push(Span::styled(
        " [q] Quit ",
        Style::default().fg(Color::White),
    ));

    let status_bar = Paragraph::new(Line::from(status_items))
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}
