//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets, plus the screen layout whose dot-cell rectangles double
//! as the hit-test surface for mouse input.

mod dots;
mod status;
mod text_field;
mod word_panel;

use dotdecoder_app::{App, HitTest};
use dotdecoder_core::BitVector;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
};

use crate::InputState;

/// Screen regions for one frame.
///
/// Recomputed from the terminal size before every draw; the driver keeps
/// the last computed layout so mouse coordinates can be resolved against
/// exactly what is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Bordered dot-row block.
    pub dots: Rect,
    /// One clickable cell per bit, MSB (bit 0) leftmost.
    pub cells: [Rect; BitVector::LEN],
    /// Word-number/word result panel.
    pub word_panel: Rect,
    /// Text input field.
    pub text_field: Rect,
    /// One-line help/status bar.
    pub status: Rect,
}

impl ScreenLayout {
    const DOTS_HEIGHT: u16 = 5;
    const PANEL_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    /// Compute the layout for a terminal of the given size.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::DOTS_HEIGHT),
                Constraint::Length(Self::PANEL_HEIGHT),
                Constraint::Length(Self::INPUT_HEIGHT),
                Constraint::Length(Self::STATUS_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        let [dots, word_panel, text_field, status, _rest] = chunks.as_ref() else {
            return Self::default();
        };

        Self {
            dots: *dots,
            cells: Self::split_cells(dots.inner(Margin::new(1, 1))),
            word_panel: *word_panel,
            text_field: *text_field,
            status: *status,
        }
    }

    /// Split the dot row interior into one equal-width cell per bit.
    fn split_cells(inner: Rect) -> [Rect; BitVector::LEN] {
        let constraints =
            [Constraint::Ratio(1, BitVector::LEN as u32); BitVector::LEN];
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        <[Rect; BitVector::LEN]>::try_from(chunks.as_ref()).unwrap_or_default()
    }
}

impl HitTest for ScreenLayout {
    fn control_at(&self, x: f64, y: f64) -> Option<usize> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let position = Position::new(x as u16, y as u16);
        self.cells.iter().position(|cell| cell.contains(position))
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, layout: &ScreenLayout) {
    dots::render(frame, app, layout);
    word_panel::render(frame, app, input, layout.word_panel);
    text_field::render(frame, app, input, layout.text_field);
    status::render(frame, layout.status);
}
