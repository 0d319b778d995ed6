//! UI helper functions for creating styled blocks and lines.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{
    ACCENT_COLOR, BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, MUTED_COLOR,
};

/// Frames of the loading spinner, advanced by the animation tick.
const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

// ============================================================================
// Block Helpers
// ============================================================================

/// Creates the bordered card every flow screen is drawn in.
#[must_use]
pub fn create_card_block(title: &str) -> Block<'_> {
    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" ● {title} ")
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_alignment(Alignment::Center)
        .title_style(FOCUSED_TITLE_STYLE)
        .border_set(border::DOUBLE)
        .border_style(FOCUSED_BORDER_STYLE)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

/// Creates the plain rounded block used by the header.
#[must_use]
pub fn create_bar_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Line Helpers
// ============================================================================

/// Builds a line of `key:description` hints with highlighted keys.
#[must_use]
pub fn key_hints<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (index, (key, description)) in hints.iter().enumerate() {
        let separator = if index + 1 == hints.len() { "" } else { "  " };
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(":{description}{separator}"),
            Style::default().fg(MUTED_COLOR),
        ));
    }
    Line::from(spans)
}

/// Spinner frame for the given animation tick.
#[must_use]
pub fn spinner(animation_tick: u64) -> &'static str {
    let index = (animation_tick % SPINNER_FRAMES.len() as u64) as usize;
    SPINNER_FRAMES[index]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_key_hints_text() {
        let line = key_hints(&[("Enter", "Approve"), ("q", "Quit")]);
        insta::assert_snapshot!(line_text(&line), @"Enter:Approve  q:Quit");
    }

    #[test]
    fn test_key_hints_empty() {
        assert!(key_hints(&[]).spans.is_empty());
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), spinner(8));
        assert_ne!(spinner(0), spinner(1));
    }
}
