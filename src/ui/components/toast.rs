//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner. Wallet messages can be
//! long, so the text wraps and the toast grows to fit it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Widest a toast gets before wrapping.
const MAX_TOAST_WIDTH: u16 = 56;

/// Rows taken by the border.
const TOAST_BORDER_ROWS: u16 = 2;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Extra padding added to message length for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner.
///
/// Messages starting with `[+]` are green, `[x]` red, anything else white.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);
    if toast_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block();
    frame.render_widget(toast_block.clone(), toast_area);

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(determine_text_color(message)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(toast_text, toast_block.inner(toast_area));
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Rows needed to show `message` in `text_width` columns.
fn wrapped_rows(message: &str, text_width: u16) -> u16 {
    let text_width = usize::from(text_width.max(1));
    let chars = message.chars().count().max(1);
    chars.div_ceil(text_width) as u16
}

/// Position and size of the toast, clamped to `area`.
#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let toast_width = (message_len + TOAST_WIDTH_PADDING)
        .clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH)
        .min(area.width.saturating_sub(TOAST_PADDING_RIGHT));

    // One spare row so word wrapping never hides the last word.
    let rows = wrapped_rows(message, toast_width.saturating_sub(TOAST_WIDTH_PADDING));
    let rows = if rows > 1 { rows + 1 } else { rows };
    let toast_height = (rows + TOAST_BORDER_ROWS).min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

#[must_use]
fn create_toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black))
}

#[must_use]
fn determine_text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================
