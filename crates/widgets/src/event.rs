use crossterm::event::Event;

/// Change notification forwarded to a toggle's caller.
///
/// Carries the state the underlying input would report after the
/// interaction, plus the input event that caused it, verbatim. The
/// component itself never applies `checked`; the caller decides.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// The would-be checked state after this interaction
    pub checked: bool,
    /// The native input event, unmodified
    pub input: Event,
}
