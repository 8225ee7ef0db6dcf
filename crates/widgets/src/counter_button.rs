// Counter button component
use crate::locate::{contains, Locator};
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// A self-contained click counter for the TUI.
///
/// Owns its count exclusively; the count starts at zero, only ever
/// grows by one per activation, and dies with the component. Callers
/// interact with it solely through its stable query id.
pub struct CounterButton {
    click_count: u64,
    style: Option<Style>,
    attrs: Vec<(String, String)>,
}

impl Default for CounterButton {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterButton {
    /// Stable query identifier for locating the clickable surface.
    pub const QUERY_ID: &'static str = "clickCounter";

    /// Create a new counter button with a zero count.
    pub fn new() -> Self {
        CounterButton {
            click_count: 0,
            style: None,
            attrs: Vec::new(),
        }
    }

    /// Override the surface style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Attach a pass-through attribute, forwarded to the surface's
    /// locator entry unmodified.
    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn click_count(&self) -> u64 {
        self.click_count
    }

    /// Register a click. Cannot fail.
    pub fn handle_click(&mut self) {
        self.click_count += 1;
    }

    /// The displayed text for the current count.
    pub fn label(&self) -> String {
        format!("Clicks: {}", self.click_count)
    }

    /// Carve the clickable surface out of its container: a quarter of
    /// the width by a quarter of the height, anchored top-left.
    pub fn surface(&self, container: Rect) -> Rect {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
            .split(container);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
            .split(rows[0]);
        columns[0]
    }

    /// Record the surface in the locator under the stable query id.
    pub fn register(&self, locator: &mut Locator, area: Rect) {
        locator.record(Self::QUERY_ID, area, &self.attrs);
    }

    /// Route an input event. A left press inside the surface area
    /// counts as a click; anything else is ignored.
    pub fn handle_event(&mut self, event: &Event, area: Rect) -> bool {
        if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && contains(area, mouse.column, mouse.row)
            {
                self.handle_click();
                return true;
            }
        }
        false
    }

    /// Render the button surface: flat, white, emphasized type.
    pub fn render(&self) -> Paragraph {
        let base = Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD);
        let style = match self.style {
            Some(over) => base.patch(over),
            None => base,
        };

        Paragraph::new(Line::from(vec![Span::styled(self.label(), style)]))
            .alignment(Alignment::Center)
    }
}
