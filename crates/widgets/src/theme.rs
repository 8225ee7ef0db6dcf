use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};

/// Caller-supplied styling hooks for the toggle's three rendered
/// parts: the outer switch line, the slider track, and the labels.
/// Every hook is optional; an empty theme keeps the stock appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub switch: Option<Style>,
    pub slider: Option<Style>,
    pub text: Option<Style>,
}

impl Theme {
    /// Style for the outer switch line.
    pub fn switch_style(&self) -> Style {
        patch(Style::default(), self.switch)
    }

    /// Style for the slider track and thumb.
    pub fn slider_style(&self) -> Style {
        patch(Style::default().fg(Color::Cyan), self.slider)
    }

    /// Base style for the two state labels, before emphasis.
    pub fn text_style(&self) -> Style {
        patch(Style::default().fg(Color::White), self.text)
    }
}

fn patch(base: Style, hook: Option<Style>) -> Style {
    match hook {
        Some(style) => base.patch(style),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    #[test]
    fn empty_theme_keeps_stock_styles() {
        let theme = Theme::default();
        assert_eq!(theme.slider_style().fg, Some(Color::Cyan));
        assert_eq!(theme.text_style().fg, Some(Color::White));
        assert_eq!(theme.switch_style(), Style::default());
    }

    #[test]
    fn hooks_patch_over_the_stock_styles() {
        let theme = Theme {
            slider: Some(Style::default().fg(Color::Magenta)),
            text: Some(Style::default().add_modifier(Modifier::ITALIC)),
            ..Theme::default()
        };
        assert_eq!(theme.slider_style().fg, Some(Color::Magenta));
        // Patching adds the modifier while keeping the stock color
        let text = theme.text_style();
        assert_eq!(text.fg, Some(Color::White));
        assert!(text.add_modifier.contains(Modifier::ITALIC));
    }
}
