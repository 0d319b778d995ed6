//! Quit confirmation popup rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
};

use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

/// Question shown by the popup.
pub const QUIT_QUESTION: &str = "Close galaxy-swap?";
/// Extra line while a wallet call is still running.
const IN_FLIGHT_NOTE: &str = "A wallet request is still running.";

// ============================================================================
// Public API
// ============================================================================

/// Renders the quit confirmation popup.
pub fn render(frame: &mut Frame, area: Rect, call_in_flight: bool) {
    let popup_area = centered_popup_area(area, 50, 8);
    if popup_area.height < 5 || popup_area.width < 4 {
        return;
    }

    let popup_block = create_popup_block("Confirm Quit");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    let question_area = Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new(QUIT_QUESTION).alignment(Alignment::Center),
        question_area,
    );

    if call_in_flight {
        let note_area = Rect::new(inner_area.x, inner_area.y + 2, inner_area.width, 1);
        frame.render_widget(
            Paragraph::new(IN_FLIGHT_NOTE)
                .style(Style::default().fg(crate::theme::WARNING_COLOR))
                .alignment(Alignment::Center),
            note_area,
        );
    }

    let separator = "─".repeat(popup_area.width.saturating_sub(2) as usize);
    let separator_area = Rect::new(
        popup_area.x + 1,
        popup_area.y + popup_area.height - 3,
        popup_area.width - 2,
        1,
    );
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height - 2,
        popup_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(key_hints(&[("y", "Yes"), ("n/Esc", "No")])).alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal_80x24};

    #[test]
    fn test_confirm_popup_renders() {
        let mut terminal = test_terminal_80x24();
        terminal
            .draw(|frame| render(frame, frame.area(), false))
            .expect("draw should succeed");

        let text = buffer_text(&terminal);
        assert!(text.contains(QUIT_QUESTION));
        assert!(text.contains("y:Yes"));
        assert!(!text.contains(IN_FLIGHT_NOTE));
    }

    #[test]
    fn test_confirm_popup_warns_about_running_request() {
        let mut terminal = test_terminal_80x24();
        terminal
            .draw(|frame| render(frame, frame.area(), true))
            .expect("draw should succeed");

        assert!(buffer_text(&terminal).contains(IN_FLIGHT_NOTE));
    }
}
