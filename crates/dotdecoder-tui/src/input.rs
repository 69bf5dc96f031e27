//! Input state and key handling for the TUI.
//!
//! This module owns the text input buffer and cursor and handles
//! character-level key events, re-submitting the whole buffer to the App on
//! every edit (matching per-keystroke evaluation is cheap and pure).

use dotdecoder_app::{App, AppAction, AppEvent};

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key (accept the matched word).
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Escape key (clear, then quit).
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Input state for the TUI.
///
/// Manages the text input buffer and cursor position.
/// Handles all character-level key events.
#[derive(Debug, Default)]
pub struct InputState {
    /// Text buffer for user input.
    buffer: String,
    /// Cursor position within the buffer (byte offset).
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the buffer, e.g. after a gesture mirrored a word into the
    /// text field.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_owned();
            self.cursor = self.buffer.len();
        }
    }

    /// Handle a key input event.
    ///
    /// Edits feed the whole buffer back through
    /// [`AppEvent::TextChanged`]; Esc clears a non-empty session and quits
    /// an already-clear one.
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                if c.is_ascii_alphabetic() {
                    self.buffer.insert(self.cursor, c.to_ascii_lowercase());
                    self.cursor = self.cursor.saturating_add(1);
                    self.submit(app)
                } else {
                    // Dictionary words are lowercase ASCII; everything else
                    // could never resolve.
                    vec![]
                }
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    self.buffer.remove(self.cursor);
                    self.submit(app)
                } else {
                    vec![]
                }
            },
            KeyInput::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                    self.submit(app)
                } else {
                    vec![]
                }
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.buffer.len();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.accept_match(app),
            KeyInput::Esc => {
                if self.buffer.is_empty() && app.bits().is_zero() {
                    app.quit()
                } else {
                    self.buffer.clear();
                    self.cursor = 0;
                    app.handle(AppEvent::Reset)
                }
            },
        }
    }

    /// Clear the buffer without touching the App (used with external reset).
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Enter accepts the auto-completed word into the buffer.
    fn accept_match(&mut self, app: &mut App) -> Vec<AppAction> {
        if let Some(word) = app.decode().word.clone() {
            self.buffer = word;
            self.cursor = self.buffer.len();
            self.submit(app)
        } else {
            vec![]
        }
    }

    fn submit(&mut self, app: &mut App) -> Vec<AppAction> {
        app.handle(AppEvent::TextChanged(self.buffer.clone()))
    }
}
