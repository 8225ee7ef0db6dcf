// Query-identifier registry for interactive surfaces
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("no surface registered under query id '{0}'")]
    UnknownId(String),
}

/// One registered surface: its query id, the screen area it occupied
/// when last rendered, and the attributes its caller passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceEntry {
    pub id: String,
    pub area: Rect,
    pub attrs: Vec<(String, String)>,
}

/// Per-frame registry of interactive surfaces, keyed by query id.
///
/// Views record each surface as they render it; harnesses and the mouse
/// router look surfaces up by id instead of by visual layout.
#[derive(Debug, Default)]
pub struct Locator {
    entries: Vec<SurfaceEntry>,
}

impl Locator {
    pub fn new() -> Self {
        Locator::default()
    }

    /// Drop all entries. Called at the top of each frame.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Register a surface. Re-recording an id replaces the old entry.
    pub fn record(&mut self, id: &str, area: Rect, attrs: &[(String, String)]) {
        self.entries.retain(|e| e.id != id);
        self.entries.push(SurfaceEntry {
            id: id.to_string(),
            area,
            attrs: attrs.to_vec(),
        });
    }

    pub fn area(&self, id: &str) -> Option<Rect> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.area)
    }

    pub fn attr(&self, id: &str, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .and_then(|e| e.attrs.iter().find(|(k, _)| k == key))
            .map(|(_, v)| v.as_str())
    }

    /// Id of the surface at the given screen coordinates, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| contains(e.area, column, row))
            .map(|e| e.id.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synthesize a left-press at the center of the surface registered
    /// under `id`, for routing back through the widget's event handler.
    pub fn click(&self, id: &str) -> Result<Event, LocateError> {
        let area = self
            .area(id)
            .ok_or_else(|| LocateError::UnknownId(id.to_string()))?;
        Ok(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x + area.width / 2,
            row: area.y + area.height / 2,
            modifiers: KeyModifiers::NONE,
        }))
    }
}

/// Hit test a point against a rectangle.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn recorded_surface_is_found_by_id_and_position() {
        let mut locator = Locator::new();
        locator.record(
            "clickCounter",
            rect(2, 1, 10, 3),
            &[("title".to_string(), "counter".to_string())],
        );

        assert_eq!(locator.area("clickCounter"), Some(rect(2, 1, 10, 3)));
        assert_eq!(locator.attr("clickCounter", "title"), Some("counter"));
        assert_eq!(locator.hit(5, 2), Some("clickCounter"));
        assert_eq!(locator.hit(20, 20), None);
    }

    #[test]
    fn re_recording_replaces_the_old_area() {
        let mut locator = Locator::new();
        locator.record("powerToggle", rect(0, 0, 4, 1), &[]);
        locator.record("powerToggle", rect(0, 5, 4, 1), &[]);

        assert_eq!(locator.area("powerToggle"), Some(rect(0, 5, 4, 1)));
        assert_eq!(locator.ids().count(), 1);
    }

    #[test]
    fn click_targets_the_surface_center() {
        let mut locator = Locator::new();
        locator.record("clickCounter", rect(4, 2, 10, 4), &[]);

        match locator.click("clickCounter") {
            Ok(Event::Mouse(mouse)) => {
                assert_eq!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
                assert_eq!((mouse.column, mouse.row), (9, 4));
            }
            other => panic!("expected a mouse event, got {:?}", other),
        }
    }

    #[test]
    fn click_on_unknown_id_is_an_error() {
        let locator = Locator::new();
        assert_eq!(
            locator.click("missing"),
            Err(LocateError::UnknownId("missing".to_string()))
        );
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut locator = Locator::new();
        locator.record("clickCounter", rect(0, 0, 1, 1), &[]);
        locator.clear();
        assert!(locator.is_empty());
    }
}
