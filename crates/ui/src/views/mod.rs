// UI Views module
mod controls_tab;
mod help_overlay;
mod logs_tab;
mod status_bar;
mod title_bar;

use crate::app::App;
use crate::models::Tab;
use ratatui::{backend::Backend, Frame};

// Main render function for the UI
pub fn render_ui<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    // Surfaces are re-registered by whichever view draws them
    app.locator.clear();

    // Check if help should be shown as an overlay
    if app.show_help {
        help_overlay::render_help_overlay(f);
        return;
    }

    let size = f.size();

    // Create main layout
    let main_chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints(
            [
                ratatui::layout::Constraint::Length(3), // Title bar and tabs
                ratatui::layout::Constraint::Min(5),    // Main content
                ratatui::layout::Constraint::Length(2), // Status bar
            ]
            .as_ref(),
        )
        .split(size);

    // Render title bar with tabs
    title_bar::render_title_bar(f, app, main_chunks[0]);

    // Render main content based on selected tab
    match Tab::from_index(app.selected_tab) {
        Tab::Controls => controls_tab::render_controls_tab(f, app, main_chunks[1]),
        Tab::Logs => logs_tab::render_logs_tab(f, app, main_chunks[1]),
        Tab::Help => help_overlay::render_help_tab(f, main_chunks[1]),
    }

    // Render status bar
    status_bar::render_status_bar(f, app, main_chunks[2]);
}
