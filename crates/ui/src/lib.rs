// Modular UI crate for knobs
//
// This crate is organized into several modules:
// - app: Contains the main App state and TUI entry point
// - models: Contains the data structures for the UI
// - views: Contains UI rendering code

// Re-export public modules
pub mod app;
pub mod models;
pub mod views;

// Re-export main entry points
pub use app::run_knobs_tui;
pub use app::{App, SessionSummary, TuiOptions, POWER_TOGGLE_ID};
