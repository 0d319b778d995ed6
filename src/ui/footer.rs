//! Footer rendering.
//!
//! Shows the keys that do something in the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;

use super::helpers::key_hints;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Key hints for `context`.
#[must_use]
pub fn hints_for(context: InputContext) -> &'static [(&'static str, &'static str)] {
    match context {
        InputContext::Connect => &[
            ("Enter", "Connect"),
            ("d", "Get Plug"),
            ("o", "Terms"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        InputContext::Approve => &[
            ("Enter", "Approve"),
            ("↑↓", "Amount"),
            ("i", "Invite"),
            ("t", "Import token"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        InputContext::InviteEdit => &[("Enter", "Save"), ("Esc", "Cancel")],
        InputContext::Swap => &[
            ("Enter", "Swap"),
            ("b", "Back"),
            ("y", "Copy token ID"),
            ("t", "Import token"),
            ("q", "Quit"),
        ],
        InputContext::Gratitude => &[
            ("t", "Import token"),
            ("y", "Copy token ID"),
            ("q", "Quit"),
        ],
        InputContext::MessagePopup => &[("Esc", "Close"), ("d", "Get Plug")],
        InputContext::HelpPopup => &[("?", "Close help")],
        InputContext::ConfirmQuit => &[("y", "Quit"), ("n", "Stay")],
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(key_hints(hints_for(app.get_input_context())))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
