//! UI state management.
//!
//! Presentation concerns only: popups, toasts, the help overlay and the
//! invite code editor. Everything about the swap itself lives in
//! [`crate::flow`].

mod popups;

pub use popups::{InviteEditor, PopupState};

// ============================================================================
// UI State
// ============================================================================

/// UI state: popups, toasts and editors.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.show_toast("[+] Token ID copied!", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    // === Popup State ===
    /// Current popup/modal state.
    pub popup_state: PopupState,

    // === Toast Notifications ===
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,

    // === Help Popup ===
    /// Whether the help popup is visible.
    pub show_help: bool,

    // === Invite Code ===
    /// Open invite code editor, if any.
    pub invite_editor: Option<InviteEditor>,
}

impl UiState {
    /// Creates a new `UiState` with no popups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    /// Returns `true` if the popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Opens the quit confirmation popup.
    pub fn open_confirm_quit(&mut self) {
        self.popup_state = PopupState::ConfirmQuit;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ========================================================================
    // Invite Editor
    // ========================================================================

    /// Opens the invite editor pre-filled with `current`.
    pub fn open_invite_editor(&mut self, current: &str) {
        self.invite_editor = Some(InviteEditor::new(current));
    }

    /// Closes the editor and returns its text.
    pub fn close_invite_editor(&mut self) -> Option<String> {
        self.invite_editor.take().map(InviteEditor::into_text)
    }

    #[must_use]
    pub fn is_editing_invite(&self) -> bool {
        self.invite_editor.is_some()
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    /// Text of the current toast.
    #[must_use]
    pub fn toast_text(&self) -> Option<&str> {
        self.toast.as_ref().map(|(text, _)| text.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_state_toast_lifecycle() {
        let mut ui = UiState::new();
        assert!(ui.toast.is_none());

        ui.show_toast("Hello", 2);
        assert_eq!(ui.toast_text(), Some("Hello"));

        assert!(!ui.tick_toast()); // 2 -> 1
        assert!(ui.tick_toast()); // 1 -> removed
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_popup_management() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.show_message("Plug Wallet is not available");
        assert!(ui.has_active_popup());

        ui.dismiss_popup();
        assert!(!ui.has_active_popup());

        ui.open_confirm_quit();
        assert_eq!(ui.popup_state, PopupState::ConfirmQuit);
    }

    #[test]
    fn test_invite_editor_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.is_editing_invite());

        ui.open_invite_editor("GALAXY");
        assert!(ui.is_editing_invite());

        if let Some(editor) = ui.invite_editor.as_mut() {
            editor.backspace();
        }
        assert_eq!(ui.close_invite_editor().as_deref(), Some("GALAX"));
        assert!(!ui.is_editing_invite());
        assert_eq!(ui.close_invite_editor(), None);
    }

    #[test]
    fn test_toggle_help() {
        let mut ui = UiState::new();
        ui.toggle_help();
        assert!(ui.show_help);
        ui.toggle_help();
        assert!(!ui.show_help);
    }
}
