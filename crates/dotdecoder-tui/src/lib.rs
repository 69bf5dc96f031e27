//! Terminal UI for DotDecoder
//!
//! Renders the 12-dot selection row, the decoded word-number/word panel,
//! and the text input, translating crossterm mouse and key events into the
//! application's pointer and text inputs. Terminal focus loss triggers the
//! external reset signal, mirroring the original surface's policy of
//! clearing state whenever the application goes to background.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod input;
mod terminal;
pub mod ui;

pub use input::{InputState, KeyInput};
pub use terminal::{TerminalDriver, TerminalError};
