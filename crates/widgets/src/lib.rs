// Widget components for knobs
//
// This crate is organized into several modules:
// - counter_button: the self-contained click counter control
// - toggle: the controlled on/off switch
// - theme: caller-supplied styling hooks
// - event: the change event forwarded to toggle callers
// - locate: the query-identifier registry for surfaces

mod counter_button;
mod event;
mod locate;
mod theme;
mod toggle;

// Re-export components for easier access
pub use counter_button::CounterButton;
pub use event::ChangeEvent;
pub use locate::{contains, LocateError, Locator, SurfaceEntry};
pub use theme::Theme;
pub use toggle::Toggle;

#[cfg(test)]
mod toggle_test;
