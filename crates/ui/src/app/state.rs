// App state for the UI
use crate::models::{LogFilterLevel, Tab};
use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};
use widgets::{ChangeEvent, CounterButton, Locator, Toggle};

/// Query id the demo registers its toggle under.
pub const POWER_TOGGLE_ID: &str = "powerToggle";

const CONTROL_COUNT: usize = 2;

/// Application state.
///
/// The app is the toggle's caller: it owns `toggle_on`, applies each
/// change event the toggle forwards, and re-supplies the value when it
/// builds the widget for the next frame. The counter owns its own
/// count and is simply held here.
pub struct App {
    pub counter: CounterButton,
    pub toggle_on: bool,
    pub toggle_on_label: String,
    pub toggle_off_label: String,
    pub toggle_aria_label: String,
    pub locator: Locator,
    pub selected_tab: usize,
    pub focused_control: usize, // 0 = counter, 1 = toggle
    pub show_help: bool,
    pub logs: Vec<String>, // Session log lines, shown before the store's
    pub log_scroll: usize,
    pub log_filter_level: LogFilterLevel,
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
    pub tick_rate: Duration,
}

impl App {
    pub fn new(checked: bool, on: String, off: String) -> App {
        App {
            counter: CounterButton::new(),
            toggle_on: checked,
            toggle_on_label: on,
            toggle_off_label: off,
            toggle_aria_label: "Demo power switch".to_string(),
            locator: Locator::new(),
            selected_tab: Tab::Controls.index(),
            focused_control: 0,
            show_help: false,
            logs: Vec::new(),
            log_scroll: 0,
            log_filter_level: LogFilterLevel::All,
            status_message: None,
            status_message_time: None,
            tick_rate: Duration::from_millis(250),
        }
    }

    /// Build the toggle for this frame from the state the app owns.
    pub fn power_toggle(&self) -> Toggle<'static> {
        Toggle::new()
            .checked(self.toggle_on)
            .on(self.toggle_on_label.clone())
            .off(self.toggle_off_label.clone())
            .aria_label(self.toggle_aria_label.clone())
            .on_change(|change| {
                logging::debug(&format!(
                    "Toggle interaction, requested state: {}",
                    if change.checked { "on" } else { "off" }
                ));
            })
    }

    /// Apply a change event the toggle forwarded. This is the only
    /// place the toggle state is written.
    pub fn apply_toggle_change(&mut self, change: ChangeEvent) {
        self.toggle_on = change.checked;
        let position = if self.toggle_on {
            self.toggle_on_label.clone()
        } else {
            self.toggle_off_label.clone()
        };
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        self.logs
            .push(format!("[{}] Toggle switched to '{}'", timestamp, position));
        logging::info(&format!("Toggle switched to '{}'", position));
        self.set_status_message(format!("✅ Toggle is now '{}'", position));
    }

    pub fn click_counter(&mut self) {
        self.counter.handle_click();
        logging::debug(&format!(
            "Counter clicked, count is now {}",
            self.counter.click_count()
        ));
    }

    /// Activate whichever control has keyboard focus, forwarding the
    /// key event that caused it.
    pub fn activate_focused(&mut self, input: Event) {
        match self.focused_control {
            0 => self.click_counter(),
            _ => {
                let mut toggle = self.power_toggle();
                let change = toggle.fire_change(input);
                self.apply_toggle_change(change);
            }
        }
    }

    pub fn next_control(&mut self) {
        self.focused_control = (self.focused_control + 1) % CONTROL_COUNT;
    }

    pub fn previous_control(&mut self) {
        self.focused_control = (self.focused_control + CONTROL_COUNT - 1) % CONTROL_COUNT;
    }

    pub fn focused_control_name(&self) -> &str {
        match self.focused_control {
            0 => "counter",
            _ => "toggle",
        }
    }

    // Change the tab
    pub fn switch_tab(&mut self, tab: usize) {
        self.selected_tab = tab % Tab::COUNT;
    }

    pub fn scroll_logs_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    pub fn scroll_logs_down(&mut self) {
        let total = self.visible_log_count();
        if self.log_scroll + 1 < total {
            self.log_scroll += 1;
        }
    }

    /// Number of log lines that pass the current filter.
    pub fn visible_log_count(&self) -> usize {
        self.logs
            .iter()
            .cloned()
            .chain(logging::get_logs())
            .filter(|l| self.log_filter_level.matches(l))
            .count()
    }

    pub fn toggle_log_filter(&mut self) {
        self.log_filter_level = self.log_filter_level.next();
        self.log_scroll = 0;
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    // Called on each tick to expire stale status messages
    pub fn tick(&mut self) {
        if let Some(set_at) = self.status_message_time {
            if set_at.elapsed() > Duration::from_secs(5) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    return true;
                }
            }
            KeyCode::Tab => self.switch_tab(self.selected_tab + 1),
            KeyCode::BackTab => self.switch_tab(self.selected_tab + Tab::COUNT - 1),
            KeyCode::Char('1') => self.switch_tab(Tab::Controls.index()),
            KeyCode::Char('2') | KeyCode::Char('l') => self.switch_tab(Tab::Logs.index()),
            KeyCode::Char('3') | KeyCode::Char('h') => self.switch_tab(Tab::Help.index()),
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_tab == Tab::Logs.index() {
                    self.scroll_logs_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_tab == Tab::Logs.index() {
                    self.scroll_logs_down();
                }
            }
            KeyCode::Left => {
                if self.selected_tab == Tab::Controls.index() {
                    self.previous_control();
                }
            }
            KeyCode::Right => {
                if self.selected_tab == Tab::Controls.index() {
                    self.next_control();
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.selected_tab == Tab::Controls.index() {
                    let input = Event::Key(KeyEvent::new(key, KeyModifiers::NONE));
                    self.activate_focused(input);
                }
            }
            KeyCode::Char('f') => {
                if self.selected_tab == Tab::Logs.index() {
                    self.toggle_log_filter();
                }
            }
            _ => {}
        }
        false
    }

    /// Route a mouse event through the locator to whichever surface it
    /// landed on.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let hit = self.locator.hit(mouse.column, mouse.row).map(str::to_string);
        let event = Event::Mouse(mouse);

        match hit.as_deref() {
            Some(CounterButton::QUERY_ID) => {
                if let Some(area) = self.locator.area(CounterButton::QUERY_ID) {
                    if self.counter.handle_event(&event, area) {
                        self.focused_control = 0;
                        logging::debug(&format!(
                            "Counter clicked, count is now {}",
                            self.counter.click_count()
                        ));
                    }
                }
            }
            Some(POWER_TOGGLE_ID) => {
                if let Some(area) = self.locator.area(POWER_TOGGLE_ID) {
                    let mut toggle = self.power_toggle();
                    if let Some(change) = toggle.handle_event(&event, area) {
                        self.focused_control = 1;
                        self.apply_toggle_change(change);
                    }
                }
            }
            _ => {}
        }
    }
}
