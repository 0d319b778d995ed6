//! Help popup listing the keybindings of every screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::constants::{MAX_SPEND_ICP, MIN_SPEND_ICP, SPEND_PAGE_STEP};
use crate::theme::ACCENT_COLOR;
use crate::ui::layout::centered_popup_area;

/// Keybinding sections with descriptions.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("q", "Quit (asks first)"),
            ("Ctrl+C", "Quit immediately"),
            ("?", "Toggle help"),
            ("o", "Open terms and conditions"),
        ],
    ),
    (
        "Connect",
        &[
            ("Enter / c", "Connect Plug wallet"),
            ("d", "Open the Plug download page"),
        ],
    ),
    (
        "Approve",
        &[
            ("Enter / a", "Approve spend"),
            ("↑ / k", "Amount +1"),
            ("↓ / j", "Amount -1"),
            ("PgUp / PgDn", "Amount +10 / -10"),
            ("0-9", "Type amount"),
            ("Backspace", "Delete digit"),
            ("i", "Edit invite code"),
            ("t", "Import token into wallet"),
        ],
    ),
    (
        "Swap",
        &[
            ("Enter / s", "Perform swap"),
            ("b / Esc", "Go back"),
            ("y", "Copy token canister ID"),
            ("t", "Import token into wallet"),
        ],
    ),
];

// ============================================================================
// Public API
// ============================================================================

/// Renders the help popup.
pub fn render(frame: &mut Frame, area: Rect) {
    let width = (area.width * 7 / 10).max(50).min(area.width);
    let height = (area.height * 8 / 10).max(20).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help (? to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_COLOR));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);
    let paragraph = Paragraph::new(help_lines(inner.width)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn help_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(format!(
            "Spend between {MIN_SPEND_ICP} and {MAX_SPEND_ICP} ICP; PgUp/PgDn step by {SPEND_PAGE_STEP}."
        )),
        Line::raw(""),
    ];

    for (section_title, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            *section_title,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw("─".repeat(width.saturating_sub(2) as usize)));

        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<14}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::raw(""));
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================
