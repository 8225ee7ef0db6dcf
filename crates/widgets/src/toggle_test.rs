use crate::{Theme, Toggle};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use models::ValidationResult;
use ratatui::{
    backend::TestBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    Terminal,
};
use std::cell::Cell;
use std::rc::Rc;

fn left_press(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn draw(toggle: &Toggle) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
    terminal
        .draw(|f| f.render_widget(toggle.render(), f.size()))
        .unwrap();
    terminal
}

fn row_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer.get(x, 0).symbol.clone())
        .collect()
}

#[test]
fn defaults_are_unchecked_with_stock_labels() {
    let toggle = Toggle::new().aria_label("power switch");
    assert!(!toggle.is_checked());

    let terminal = draw(&toggle);
    let text = row_text(&terminal);
    assert!(text.contains("on"));
    assert!(text.contains("off"));
}

#[test]
fn checked_state_is_reported_and_moves_the_thumb() {
    let unchecked = Toggle::new().aria_label("power switch");
    assert!(!unchecked.is_checked());
    assert!(row_text(&draw(&unchecked)).contains("[●──]"));

    let checked = Toggle::new().aria_label("power switch").checked(true);
    assert!(checked.is_checked());
    assert!(row_text(&draw(&checked)).contains("[──●]"));
}

#[test]
fn both_labels_render_with_exactly_one_emphasized() {
    // Row 0 reads "[●──] on off": the on label starts at column 6,
    // the off label at column 9.
    let unchecked = Toggle::new().aria_label("power switch");
    let terminal = draw(&unchecked);
    let buffer = terminal.backend().buffer();
    assert!(buffer.get(6, 0).modifier.contains(Modifier::DIM));
    assert!(buffer.get(9, 0).modifier.contains(Modifier::BOLD));

    let checked = Toggle::new().aria_label("power switch").checked(true);
    let terminal = draw(&checked);
    let buffer = terminal.backend().buffer();
    assert!(buffer.get(6, 0).modifier.contains(Modifier::BOLD));
    assert!(buffer.get(9, 0).modifier.contains(Modifier::DIM));
}

#[test]
fn custom_labels_replace_the_defaults() {
    let toggle = Toggle::new()
        .aria_label("power switch")
        .on("enabled")
        .off("disabled");
    let text = row_text(&draw(&toggle));
    assert!(text.contains("enabled"));
    assert!(text.contains("disabled"));
}

#[test]
fn one_interaction_fires_on_change_exactly_once() {
    let fired = Rc::new(Cell::new(0u32));
    let seen = Rc::new(Cell::new(false));
    let fired_inner = Rc::clone(&fired);
    let seen_inner = Rc::clone(&seen);

    let mut toggle = Toggle::new()
        .aria_label("power switch")
        .on_change(move |change| {
            fired_inner.set(fired_inner.get() + 1);
            seen_inner.set(change.checked);
        });

    let area = Rect {
        x: 0,
        y: 0,
        width: 12,
        height: 1,
    };
    let change = toggle.handle_event(&left_press(3, 0), area).unwrap();

    assert_eq!(fired.get(), 1);
    // The handler saw the would-be state; the component kept its own
    assert!(seen.get());
    assert!(change.checked);
    assert!(!toggle.is_checked());
}

#[test]
fn presses_outside_the_switch_do_not_fire() {
    let fired = Rc::new(Cell::new(0u32));
    let fired_inner = Rc::clone(&fired);

    let mut toggle = Toggle::new()
        .aria_label("power switch")
        .on_change(move |_| fired_inner.set(fired_inner.get() + 1));

    let area = Rect {
        x: 0,
        y: 0,
        width: 12,
        height: 1,
    };
    assert!(toggle.handle_event(&left_press(20, 5), area).is_none());
    assert_eq!(fired.get(), 0);
}

#[test]
fn fire_change_forwards_the_input_event_verbatim() {
    let mut toggle = Toggle::new().aria_label("power switch").checked(true);
    let input = Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));

    let change = toggle.fire_change(input.clone());
    assert_eq!(change.input, input);
    // Checked, so the would-be state after the interaction is false
    assert!(!change.checked);
    assert!(toggle.is_checked());
}

#[test]
fn validation_passes_with_an_accessible_name() {
    let toggle = Toggle::new().aria_label("power switch");
    let mut result = ValidationResult::new();
    toggle.validate(&mut result);
    assert!(result.is_valid);
}

#[test]
fn missing_aria_label_is_flagged_but_still_renders() {
    let toggle = Toggle::new();
    let mut result = ValidationResult::new();
    toggle.validate(&mut result);
    assert!(!result.is_valid);
    assert_eq!(result.issues[0].prop, "aria-label");

    // Rendering is unaffected by the violation
    let text = row_text(&draw(&toggle));
    assert!(text.contains("on"));
    assert!(text.contains("off"));
}

#[test]
fn render_warns_once_per_missing_prop() {
    let toggle = Toggle::new();
    let _ = draw(&toggle);
    let _ = draw(&toggle);

    let warnings = logging::get_logs()
        .iter()
        .filter(|l| l.contains("Toggle: prop 'aria-label'"))
        .count();
    assert_eq!(warnings, 1);
}

#[test]
fn theme_hooks_restyle_the_track() {
    let theme = Theme {
        slider: Some(Style::default().fg(Color::Magenta)),
        ..Theme::default()
    };
    let toggle = Toggle::new().aria_label("power switch").theme(theme);
    let terminal = draw(&toggle);
    let buffer = terminal.backend().buffer();
    // Column 0 is the opening bracket of the track
    assert_eq!(buffer.get(0, 0).fg, Color::Magenta);
}

#[test]
fn pass_through_attributes_and_aria_label_reach_the_locator() {
    use crate::Locator;

    let toggle = Toggle::new().aria_label("power switch").attr("id", "main");
    let mut locator = Locator::new();
    let area = Rect {
        x: 0,
        y: 2,
        width: 12,
        height: 1,
    };
    toggle.register(&mut locator, "powerToggle", area);

    assert_eq!(locator.area("powerToggle"), Some(area));
    assert_eq!(locator.attr("powerToggle", "id"), Some("main"));
    assert_eq!(locator.attr("powerToggle", "aria-label"), Some("power switch"));
}
