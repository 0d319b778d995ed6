//! Closing screen shown once the swap is done.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::{ACCENT_COLOR, MUTED_COLOR, SUCCESS_COLOR};

use super::render_card;

const GRATITUDE: &str = "On behalf of the entire Galaxy team, we extend our deepest \
     gratitude for your early support in acquiring our tokens. Your confidence and \
     commitment in our product are invaluable to us. We look forward to achieving \
     great things together.";

pub(super) fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Dear Investors!",
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(GRATITUDE),
        Line::raw(""),
        Line::from(Span::styled("Warm regards", Style::default().fg(MUTED_COLOR))),
        Line::from(Span::styled(
            "The Galaxy Team",
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    render_card(frame, area, "Thank you", lines);
}
