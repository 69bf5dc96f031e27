//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: input/decode state machine
//! - [`Driver`]: platform-specific I/O

use crate::{App, AppAction, Driver};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and app.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop.
    ///
    /// Renders once, then polls the driver for events and executes the
    /// actions they produce until one of them is [`AppAction::Quit`].
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let actions = self.driver.poll_event(&mut self.app)?;
            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(()),
                }
            }
        }
    }
}
