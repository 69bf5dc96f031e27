//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.
//!
//! Everything is synchronous: all work happens inside discrete event
//! callbacks on a single thread and nothing here suspends, so the loop is a
//! plain blocking poll.

use std::time::Instant;

use crate::{App, AppAction};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations translate backend-native input into [`crate::AppEvent`]
/// and [`crate::PointerEvent`] calls on the [`App`], returning whatever
/// actions those produce. This keeps ordering exactly as the input backend
/// delivers events.
///
/// # Implementations
///
/// - **TUI**: crossterm events and ratatui rendering
/// - **Simulation**: scripted event sequences with virtual timestamps
pub trait Driver {
    /// Platform-specific error type.
    type Error: std::error::Error + 'static;

    /// Block until the next input event (or a tick timeout), feed it to the
    /// app, and return the resulting actions.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error>;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Current wall-clock instant, measured at event-handling time.
    fn now(&self) -> Instant {
        Instant::now()
    }
}
