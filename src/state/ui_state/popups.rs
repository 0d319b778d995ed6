//! Popup state types.

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Message popup that stays until dismissed.
    Message(String),
    /// Quit confirmation popup.
    ConfirmQuit,
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The message text, if this is a message popup.
    #[must_use]
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(text) => Some(text),
            _ => None,
        }
    }
}

// ============================================================================
// Invite Editor
// ============================================================================

/// Buffer of the invite code editor.
///
/// Edits stay in the buffer until submitted, so Esc restores the previous
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InviteEditor {
    buffer: String,
}

impl InviteEditor {
    /// Starts editing from `current`.
    #[must_use]
    pub fn new(current: &str) -> Self {
        Self {
            buffer: current.to_string(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Appends a printable character, up to `max_len` characters.
    pub fn push_char(&mut self, c: char, max_len: usize) {
        if !c.is_control() && self.buffer.chars().count() < max_len {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Consumes the editor and returns the edited text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.buffer
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_state_variants() {
        assert!(!PopupState::None.is_active());
        assert!(PopupState::ConfirmQuit.is_active());

        let popup = PopupState::Message("Install the wallet".to_string());
        assert!(popup.is_active());
        assert_eq!(popup.as_message(), Some("Install the wallet"));
        assert_eq!(PopupState::ConfirmQuit.as_message(), None);
    }

    #[test]
    fn test_invite_editor_input() {
        let mut editor = InviteEditor::new("GAL");
        editor.push_char('A', 5);
        editor.push_char('X', 5);
        editor.push_char('Y', 5);
        assert_eq!(editor.text(), "GALAX");

        editor.backspace();
        assert_eq!(editor.text(), "GALA");

        editor.push_char('\n', 5);
        assert_eq!(editor.into_text(), "GALA");
    }
}
