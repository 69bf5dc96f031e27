//! Dot row
//!
//! One clickable dot per bit, MSB leftmost, matching the physical
//! punch-card layout the decoder mirrors.

use dotdecoder_app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::ScreenLayout;

const DOT_ON: &str = "●";
const DOT_OFF: &str = "○";

/// Render the dot row and its border.
pub fn render(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let block = Block::default().borders(Borders::ALL).title(" swipe to select ");
    frame.render_widget(block, layout.dots);

    let bits = app.bits().bits();
    for (cell, on) in layout.cells.iter().zip(bits) {
        render_dot(frame, *cell, on);
    }
}

fn render_dot(frame: &mut Frame, cell: Rect, on: bool) {
    if cell.height == 0 || cell.width == 0 {
        return;
    }

    let style = if on {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Center the glyph vertically in the cell.
    let line = Rect::new(cell.x, cell.y + cell.height / 2, cell.width, 1);
    let dot = Paragraph::new(if on { DOT_ON } else { DOT_OFF })
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(dot, line);
}
