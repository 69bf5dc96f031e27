//! Word number and match panel
//!
//! Shows `#<word number>` and the matched word, or placeholders while the
//! selection is empty or invalid. When the typed text is a prefix of the
//! match, the full word doubles as the auto-complete hint.

use dotdecoder_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::InputState;

/// Render the result panel.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, area: Rect) {
    let decode = app.decode();

    let line = match (&decode.word, decode.word_number) {
        (Some(word), Some(number)) => {
            let mut spans = vec![
                Span::styled(
                    format!("#{number}"),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(word.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ];
            if input.buffer() != word {
                spans.push(Span::styled(
                    "  (auto-completed)",
                    Style::default().fg(Color::Blue),
                ));
            }
            Line::from(spans)
        },
        _ => Line::from(vec![
            Span::styled("#-", Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(placeholder(app, input), Style::default().fg(Color::DarkGray)),
        ]),
    };

    let border_style = if decode.is_valid {
        Style::default().fg(Color::Blue)
    } else {
        Style::default()
    };
    let block =
        Block::default().borders(Borders::ALL).border_style(border_style).title(" result ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Placeholder text for the invalid states.
fn placeholder(app: &App, input: &InputState) -> &'static str {
    if app.decode().value > 0 {
        // Well-formed pattern above the dictionary range (2049..=4095).
        "no word for this pattern"
    } else if input.buffer().is_empty() {
        "nothing selected"
    } else {
        "no match"
    }
}
