//! Flow screens.
//!
//! One card per [`FlowStage`]; the card is centered in the main area and
//! sized to its text.

mod approve;
mod connect;
mod gratitude;
mod swap;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::constants::CARD_WIDTH;
use crate::flow::FlowStage;
use crate::state::App;
use crate::theme::{ACTION_STYLE, DISABLED_ACTION_STYLE, ERROR_COLOR};

use super::helpers::{create_card_block, spinner};
use super::layout::card_area;

/// Title shared by the connect, approve and swap cards.
pub const FLOW_TITLE: &str = "Galaxy Early Investors";

// ============================================================================
// Public API
// ============================================================================

/// Renders the card of the current stage into `area`.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match app.flow.flow().stage() {
        FlowStage::Disconnected => connect::render(app, frame, area),
        FlowStage::Unapproved => approve::render(app, frame, area),
        FlowStage::Approved => swap::render(app, frame, area),
        FlowStage::Completed => gratitude::render(frame, area),
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Draws `lines` inside a titled card sized to fit them.
fn render_card(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let text_width = area.width.min(CARD_WIDTH).saturating_sub(4);
    let height = wrapped_height(&lines, text_width) + 2;
    let card = card_area(area, height);
    if card.width < 4 || card.height < 3 {
        return;
    }

    let block = create_card_block(title);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let body = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}

/// Rows `lines` take once wrapped at `width` columns. Word wrapping can
/// need one row more than the character count suggests.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| match line.width() {
            columns if columns <= width => 1,
            columns => columns.div_ceil(width) + 1,
        })
        .sum::<usize>()
        .try_into()
        .unwrap_or(u16::MAX)
}

/// The primary action of a card, drawn as a button.
///
/// While `loading` the label is replaced by a spinner and `busy_label`.
fn action_line(
    label: &str,
    busy_label: &str,
    enabled: bool,
    loading: bool,
    animation_tick: u64,
) -> Line<'static> {
    let (text, style) = if loading {
        (
            format!("  {} {busy_label}  ", spinner(animation_tick)),
            DISABLED_ACTION_STYLE,
        )
    } else if enabled {
        (format!("  {label}  "), ACTION_STYLE)
    } else {
        (format!("  {label}  "), DISABLED_ACTION_STYLE)
    };
    Line::from(Span::styled(text, style))
}

/// The flow's last error, if any.
fn error_line(message: &str) -> Option<Line<'static>> {
    (!message.is_empty()).then(|| {
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(ERROR_COLOR),
        ))
    })
}

// ============================================================================
// Tests
// ============================================================================
