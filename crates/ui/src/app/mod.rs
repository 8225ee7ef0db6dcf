// App module for UI state and main TUI entry point
mod state;

use crate::views::render_ui;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

pub use state::{App, POWER_TOGGLE_ID};

/// Initial state for the demo session.
pub struct TuiOptions {
    pub checked: bool,
    pub on: String,
    pub off: String,
}

/// Where the session ended up when the user quit.
pub struct SessionSummary {
    pub clicks: u64,
    pub toggle_on: bool,
    pub toggle_position: String,
}

// Main entry point for the TUI interface
pub fn run_knobs_tui(options: TuiOptions) -> io::Result<SessionSummary> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize app state
    let mut app = App::new(options.checked, options.on, options.off);
    logging::info("Starting knobs demo");

    // Run the event loop
    let result = run_tui_event_loop(&mut terminal, &mut app);

    // Clean up terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    let toggle_position = if app.toggle_on {
        app.toggle_on_label.clone()
    } else {
        app.toggle_off_label.clone()
    };
    Ok(SessionSummary {
        clicks: app.counter.click_count(),
        toggle_on: app.toggle_on,
        toggle_position,
    })
}

// Helper function to run the main event loop
fn run_tui_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    // Max time to wait for events - keep this short to ensure UI responsiveness
    let event_poll_timeout = Duration::from_millis(50);

    let tick_rate = app.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        // Redraw on every loop iteration to keep the UI responsive
        terminal.draw(|f| {
            render_ui(f, app);
        })?;

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        // Handle input events with a short timeout
        if event::poll(event_poll_timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key.code) {
                        break Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
}
