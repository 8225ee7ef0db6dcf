// Logs tab rendering
use crate::app::App;
use crate::models::LogFilterLevel;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

// Render the logs tab
pub fn render_logs_tab<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Header with instructions
                Constraint::Min(3),    // Logs content
            ]
            .as_ref(),
        )
        .margin(1)
        .split(area);

    // Render header with instructions
    let header_text = vec![
        Line::from(vec![Span::styled(
            "Session and System Logs",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("j/k", Style::default().fg(Color::Cyan)),
            Span::raw(": Scroll   "),
            Span::styled("f", Style::default().fg(Color::Cyan)),
            Span::raw(": Filter   "),
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": Switch tabs"),
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

    // Session lines first, then the shared store's
    let filtered: Vec<String> = app
        .logs
        .iter()
        .cloned()
        .chain(logging::get_logs())
        .filter(|l| app.log_filter_level.matches(l))
        .collect();

    let visible_height = chunks[1].height.saturating_sub(2) as usize;
    let scroll = app.log_scroll.min(filtered.len().saturating_sub(1));

    let lines: Vec<Line> = filtered
        .iter()
        .skip(scroll)
        .take(visible_height.max(1))
        .map(|l| Line::from(colored_log_span(l)))
        .collect();

    let title = format!(
        " Logs ({}) [{}] ",
        filtered.len(),
        app.log_filter_level.label()
    );

    let logs_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(title, Style::default().fg(Color::Yellow))),
    );

    f.render_widget(logs_widget, chunks[1]);
}

// Color a log line by its level glyph
fn colored_log_span(log: &str) -> Span<'_> {
    let style = if LogFilterLevel::Error.matches(log) {
        Style::default().fg(Color::Red)
    } else if LogFilterLevel::Warning.matches(log) {
        Style::default().fg(Color::Yellow)
    } else if LogFilterLevel::Debug.matches(log) {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(log, style)
}
