//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard, mouse, and focus events and ratatui for rendering. Mouse
//! press/drag/release map onto the application's pointer events, and focus
//! loss fires the external reset signal.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dotdecoder_app::{App, AppAction, AppEvent, Driver, HitTest, PointerEvent};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use thiserror::Error;

use crate::{InputState, KeyInput, ui, ui::ScreenLayout};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). Owns the input
/// state for text editing and the last computed screen layout, which doubles
/// as the mouse hit-test surface.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_state: InputState,
    layout: ScreenLayout,
    tick_rate: Duration,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    pub fn new(tick_rate: Duration) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;
        stdout().execute(EnableFocusChange)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            input_state: InputState::new(),
            layout: ScreenLayout::default(),
            tick_rate,
        })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    /// Translate a mouse event into the pointer stream.
    ///
    /// Press and drag resolve against the last rendered layout; presses on
    /// dead space start nothing, matching the original surface where only
    /// the dot controls carry handlers.
    fn handle_mouse(&mut self, mouse: MouseEvent, app: &mut App) -> Vec<AppAction> {
        let x = f64::from(mouse.column);
        let y = f64::from(mouse.row);
        let now = self.now();

        let pointer = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.layout.control_at(x, y) {
                    Some(index) => PointerEvent::MouseDown { index },
                    None => return vec![],
                }
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                match self.layout.control_at(x, y) {
                    Some(index) => PointerEvent::MouseEnter { index },
                    None => return vec![],
                }
            },
            MouseEventKind::Up(MouseButton::Left) => PointerEvent::PointerUp,
            _ => return vec![],
        };

        let actions = app.handle_pointer(pointer, now, &self.layout);
        if !actions.is_empty() {
            // A toggle may have mirrored a word into the text field.
            self.input_state.set_text(app.input_text());
        }
        actions
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, TerminalError> {
        if !event::poll(self.tick_rate)? {
            return Ok(app.handle(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match Self::convert_key(key_event.code) {
                    Some(key_input) => Ok(self.input_state.handle_key(key_input, app)),
                    None => Ok(vec![]),
                }
            },
            Event::Mouse(mouse) => Ok(self.handle_mouse(mouse, app)),
            Event::Resize(cols, rows) => Ok(app.handle(AppEvent::Resize(cols, rows))),
            Event::FocusLost => {
                // Security policy from the original surface: going to
                // background clears everything.
                tracing::info!("focus lost, clearing state");
                self.input_state.clear();
                Ok(app.handle(AppEvent::Reset))
            },
            _ => Ok(vec![]),
        }
    }

    fn render(&mut self, app: &App) -> Result<(), TerminalError> {
        let size = self.terminal.size()?;
        self.layout = ScreenLayout::compute(Rect::new(0, 0, size.width, size.height));

        let layout = self.layout;
        let input_state = &self.input_state;
        self.terminal.draw(|frame| {
            ui::render(frame, app, input_state, &layout);
        })?;
        Ok(())
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(DisableFocusChange);
        let _ = stdout().execute(DisableMouseCapture);
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
