//! Application input events.
//!
//! This module defines [`AppEvent`], the non-pointer inputs that drive the
//! [`crate::App`] state machine. Pointer input takes the separate
//! [`crate::App::handle_pointer`] path because it needs a timestamp and a
//! hit-test surface; everything else is timeless.

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Text field content changed; re-evaluated in full on every keystroke.
    TextChanged(String),

    /// External reset signal (focus lost, went to background, network
    /// detected). Restores the initial all-clear state synchronously.
    Reset,

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
