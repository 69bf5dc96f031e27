//! Status line
//!
//! One-line key hint bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

const HELP: &str = " type a word / drag the dots | enter: accept match | esc: clear, then quit";

/// Render the status bar.
pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
