//! Application layer for DotDecoder
//!
//! Pure state machines and a generic runtime for the gesture-driven input
//! surface, enabling deterministic simulation testing with the same code
//! that runs in production.
//!
//! # Components
//!
//! - [`GestureController`]: fuses mouse and touch events into single-bit
//!   toggles, suppressing synthetic duplicates
//! - [`App`]: owns the bit vector and text input, re-derives the decode
//!   result after every mutation
//! - [`HitTest`]: injected "resolve control under point" capability
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod gesture;
mod pointer;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use gesture::{GestureConfig, GestureController};
pub use pointer::{HitTest, PointerEvent};
pub use runtime::Runtime;
