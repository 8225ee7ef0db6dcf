// Toggle switch component
use crate::event::ChangeEvent;
use crate::locate::{contains, Locator};
use crate::theme::Theme;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use models::ValidationResult;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// A controlled on/off switch for the TUI.
///
/// The checked state is owned by the caller: the component renders it
/// and forwards toggle interactions through `on_change`, but never
/// flips it itself. The caller applies the change and re-supplies
/// `checked` on the next frame.
///
/// Both state labels are always rendered; emphasis, not presence,
/// tracks the checked state.
pub struct Toggle<'a> {
    checked: bool,
    on: String,
    off: String,
    aria_label: Option<String>,
    theme: Theme,
    attrs: Vec<(String, String)>,
    on_change: Option<Box<dyn FnMut(ChangeEvent) + 'a>>,
}

impl Default for Toggle<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Toggle<'a> {
    pub fn new() -> Self {
        Toggle {
            checked: false,
            on: "on".to_string(),
            off: "off".to_string(),
            aria_label: None,
            theme: Theme::default(),
            attrs: Vec::new(),
            on_change: None,
        }
    }

    /// Set the displayed state. Visual only; interactions never change
    /// it behind the caller's back.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Label shown for the checked state. Defaults to "on".
    pub fn on(mut self, on: impl Into<String>) -> Self {
        self.on = on.into();
        self
    }

    /// Label shown for the unchecked state. Defaults to "off".
    pub fn off(mut self, off: impl Into<String>) -> Self {
        self.off = off.into();
        self
    }

    /// Accessible name for the switch. Required; omitting it draws a
    /// validation warning but never blocks rendering.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Attach a pass-through attribute, forwarded to the switch's
    /// locator entry unmodified.
    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }

    /// Handler invoked with the change event on each toggle
    /// interaction.
    pub fn on_change(mut self, handler: impl FnMut(ChangeEvent) + 'a) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// The state the underlying input reports.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn aria_label_value(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    /// Check this toggle's props against the schema.
    pub fn validate(&self, result: &mut ValidationResult) {
        validators::validate_toggle_props(self.aria_label.as_deref(), &self.on, &self.off, result);
    }

    // Development-build prop check, once per distinct violation.
    fn validate_dev(&self) {
        if cfg!(debug_assertions) {
            let mut result = ValidationResult::new();
            self.validate(&mut result);
            for issue in &result.issues {
                logging::warn_issue_once(issue);
            }
        }
    }

    /// Register the switch in the locator under `id`, carrying the
    /// pass-through attributes plus the accessible name.
    pub fn register(&self, locator: &mut Locator, id: &str, area: Rect) {
        let mut attrs = self.attrs.clone();
        if let Some(label) = &self.aria_label {
            attrs.push(("aria-label".to_string(), label.clone()));
        }
        locator.record(id, area, &attrs);
    }

    /// Fire a change interaction: notify the handler exactly once with
    /// the would-be state and the verbatim input event. The displayed
    /// state is not touched.
    pub fn fire_change(&mut self, input: Event) -> ChangeEvent {
        let change = ChangeEvent {
            checked: !self.checked,
            input,
        };
        if let Some(handler) = self.on_change.as_mut() {
            handler(change.clone());
        }
        change
    }

    /// Route an input event. A left press inside the switch area is a
    /// toggle interaction; anything else is ignored.
    pub fn handle_event(&mut self, event: &Event, area: Rect) -> Option<ChangeEvent> {
        if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && contains(area, mouse.column, mouse.row)
            {
                return Some(self.fire_change(event.clone()));
            }
        }
        None
    }

    /// Styles for the (on, off) labels, derived purely from the
    /// checked state: the active label is emphasized, the inactive one
    /// dimmed.
    pub fn label_styles(checked: bool, theme: &Theme) -> (Style, Style) {
        let text = theme.text_style();
        let emphasized = text.add_modifier(Modifier::BOLD);
        let dimmed = text.add_modifier(Modifier::DIM);
        if checked {
            (emphasized, dimmed)
        } else {
            (dimmed, emphasized)
        }
    }

    /// Render the switch: the slider track with the thumb on the side
    /// matching the checked state, then both labels.
    pub fn render(&self) -> Paragraph {
        self.validate_dev();

        let track = if self.checked { "──●" } else { "●──" };
        let (on_style, off_style) = Self::label_styles(self.checked, &self.theme);

        let line = Line::from(vec![
            Span::styled(format!("[{}]", track), self.theme.slider_style()),
            Span::raw(" "),
            Span::styled(self.on.clone(), on_style),
            Span::raw(" "),
            Span::styled(self.off.clone(), off_style),
        ]);

        Paragraph::new(line).style(self.theme.switch_style())
    }
}
