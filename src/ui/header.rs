//! Header rendering.
//!
//! Logo on the left, current flow stage in the middle, wallet status on the
//! right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::flow::FlowStage;
use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_bar_block;

const LOGO_WIDTH: u16 = 15;
const STATUS_WIDTH: u16 = 23;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_bar_block();
    frame.render_widget(header_block.clone(), area);

    if area.height <= 2 {
        return;
    }
    let inner = header_block.inner(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LOGO_WIDTH),
            Constraint::Min(0),
            Constraint::Length(STATUS_WIDTH),
        ])
        .split(Rect::new(inner.x, inner.y, inner.width, 1));

    let logo = Paragraph::new(create_logo(app.animation_tick)).alignment(Alignment::Center);
    frame.render_widget(logo, columns[0]);

    let stage = app.flow.flow().stage();
    let stage_label = Paragraph::new(Line::from(vec![
        Span::styled("Stage: ", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            stage.label(),
            Style::default()
                .fg(stage_color(stage))
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(stage_label, columns[1]);

    let (text, color) = wallet_status(app);
    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, columns[2]);
}

/// The logo with a slow breathing glow on the name.
fn create_logo(animation_tick: u64) -> Line<'static> {
    let time = animation_tick as f32 * 0.15;
    let glow = ((time * 0.8).sin() + 1.0) / 2.0;

    let blue = (160.0 + glow * 95.0) as u8;
    let name_color = Color::Rgb((90.0 * glow) as u8, (120.0 + glow * 80.0) as u8, blue);

    Line::from(vec![
        Span::styled("[", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            "galaxy",
            Style::default().fg(name_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "-swap",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(MUTED_COLOR)),
    ])
}

fn stage_color(stage: FlowStage) -> Color {
    match stage {
        FlowStage::Disconnected => WARNING_COLOR,
        FlowStage::Unapproved | FlowStage::Approved => PRIMARY_COLOR,
        FlowStage::Completed => SUCCESS_COLOR,
    }
}

fn wallet_status(app: &App) -> (&'static str, Color) {
    if !app.flow.has_wallet() {
        ("Wallet: not installed", ERROR_COLOR)
    } else if app.flow.flow().connected() {
        ("Wallet: connected", SUCCESS_COLOR)
    } else {
        ("Wallet: ready", WARNING_COLOR)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal, walletless_app};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[test]
    fn test_create_logo() {
        for tick in [0, 17, 100] {
            let logo = create_logo(tick);
            let text: String = logo.spans.iter().map(|s| s.content.as_ref()).collect();
            assert_eq!(text, "[galaxy-swap]");
        }
    }

    #[rstest]
    fn test_header_shows_stage_and_wallet(mut test_terminal: Terminal<TestBackend>) {
        let app = walletless_app();
        test_terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 120, 3), &app))
            .expect("draw should succeed");

        let text = buffer_text(&test_terminal);
        assert!(text.contains("[galaxy-swap]"));
        assert!(text.contains("Stage: Not connected"));
        assert!(text.contains("Wallet: not installed"));
    }

    #[test]
    fn test_header_too_short_only_draws_border() {
        let app = walletless_app();
        let mut terminal = Terminal::new(TestBackend::new(80, 2)).expect("terminal");
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .expect("draw should succeed");

        assert!(!buffer_text(&terminal).contains("galaxy"));
    }
}
