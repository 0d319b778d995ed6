//! Message popup rendering.
//!
//! Persistent notices (such as the missing-wallet message) stay here until
//! dismissed.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders a message popup sized to its text.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let popup_width = 40.max(longest_line + 6).min(area.width * 8 / 10);
    let text_width = popup_width.saturating_sub(4).max(1);
    let message_rows: u16 = message
        .lines()
        .map(|line| (line.chars().count() as u16).div_ceil(text_width).max(1))
        .sum::<u16>()
        .max(1);
    let popup_height = 6.max(message_rows + 5);

    let popup_area = centered_popup_area(area, popup_width, popup_height);
    if popup_area.height < 4 || popup_area.width < 4 {
        return;
    }

    let popup_block = create_popup_block("Message");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    let message_area = Rect::new(
        inner_area.x + 1,
        inner_area.y,
        inner_area.width.saturating_sub(2),
        inner_area.height.saturating_sub(2),
    );

    let prompt = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, message_area);

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
    let help = Paragraph::new(key_hints(&[("Esc", "Close"), ("d", "Download Plug")]))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::controller::WALLET_MISSING_MESSAGE;
    use crate::test_utils::{buffer_text, test_terminal_80x24};

    #[test]
    fn test_message_popup_shows_text_and_keys() {
        let mut terminal = test_terminal_80x24();
        terminal
            .draw(|frame| render(frame, frame.area(), WALLET_MISSING_MESSAGE))
            .expect("draw should succeed");

        let text = buffer_text(&terminal);
        assert!(text.contains("Message"));
        assert!(text.contains("Plug Wallet is not available."));
        assert!(text.contains("Esc:Close"));
    }

    #[test]
    fn test_message_popup_edge_cases() {
        let mut terminal = test_terminal_80x24();
        let long = "long ".repeat(60);
        for message in ["", "Line 1\nLine 2\nLine 3", long.as_str()] {
            terminal
                .draw(|frame| render(frame, frame.area(), message))
                .expect("draw should succeed");
        }

        let mut tiny = ratatui::Terminal::new(ratatui::backend::TestBackend::new(20, 6))
            .expect("terminal");
        tiny.draw(|frame| render(frame, frame.area(), "hello"))
            .expect("draw should succeed");
    }
}
