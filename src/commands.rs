//! Command pattern for key event handling.
//!
//! Keys are first mapped to an [`AppCommand`] for the current
//! [`InputContext`]; the app then executes the command. Mapping is a pure
//! function so every binding can be tested without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! match map_key(key_event, &context) {
//!     AppCommand::ApproveSpend => app.start_approve(),
//!     // ...
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Connect-wallet screen.
    Connect,
    /// Approve screen with the amount input.
    Approve,
    /// Invite code editor on the approve screen.
    InviteEdit,
    /// Swap screen after approval.
    Swap,
    /// Thank-you screen after the swap.
    Gratitude,
    /// A message popup is open.
    MessagePopup,
    /// The help popup is open.
    HelpPopup,
    /// The quit confirmation is open.
    ConfirmQuit,
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything a key can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Ask for quit confirmation.
    RequestQuit,
    /// Quit without asking.
    ConfirmQuit,
    /// Toggle the help popup.
    ToggleHelp,
    /// Close the current popup or editor.
    Dismiss,

    // === Flow ===
    ConnectWallet,
    ApproveSpend,
    PerformSwap,
    GoBack,
    ImportToken,

    // === Amount Input ===
    IncreaseAmount,
    DecreaseAmount,
    PageUpAmount,
    PageDownAmount,
    TypeDigit(char),
    DeleteDigit,

    // === Invite Code ===
    EditInvite,
    TypeChar(char),
    Backspace,
    SubmitInvite,

    // === Links and Clipboard ===
    OpenWalletDownload,
    OpenTerms,
    CopyTokenId,

    // === No Operation ===
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command. Ctrl+C always quits.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::ConfirmQuit;
        }

        match context {
            InputContext::Connect => Self::map_connect_keys(key),
            InputContext::Approve => Self::map_approve_keys(key),
            InputContext::InviteEdit => Self::map_invite_keys(key),
            InputContext::Swap => Self::map_swap_keys(key),
            InputContext::Gratitude => Self::map_gratitude_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
            InputContext::HelpPopup => Self::map_help_keys(key),
            InputContext::ConfirmQuit => Self::map_confirm_quit_keys(key),
        }
    }

    /// Keys shared by every screen.
    fn map_global_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::RequestQuit,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Char('o') => AppCommand::OpenTerms,
            _ => AppCommand::Noop,
        }
    }

    fn map_connect_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Char('c') => AppCommand::ConnectWallet,
            KeyCode::Char('d') => AppCommand::OpenWalletDownload,
            _ => Self::map_global_keys(key),
        }
    }

    fn map_approve_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') => AppCommand::ApproveSpend,
            KeyCode::Up | KeyCode::Char('+' | 'k') => AppCommand::IncreaseAmount,
            KeyCode::Down | KeyCode::Char('-' | 'j') => AppCommand::DecreaseAmount,
            KeyCode::PageUp => AppCommand::PageUpAmount,
            KeyCode::PageDown => AppCommand::PageDownAmount,
            KeyCode::Char(c) if c.is_ascii_digit() => AppCommand::TypeDigit(c),
            KeyCode::Backspace => AppCommand::DeleteDigit,
            KeyCode::Char('i') => AppCommand::EditInvite,
            KeyCode::Char('t') => AppCommand::ImportToken,
            _ => Self::map_global_keys(key),
        }
    }

    fn map_invite_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitInvite,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_swap_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => AppCommand::PerformSwap,
            KeyCode::Esc | KeyCode::Char('b') => AppCommand::GoBack,
            KeyCode::Char('t') => AppCommand::ImportToken,
            KeyCode::Char('y') => AppCommand::CopyTokenId,
            _ => Self::map_global_keys(key),
        }
    }

    fn map_gratitude_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('t') => AppCommand::ImportToken,
            KeyCode::Char('y') => AppCommand::CopyTokenId,
            _ => Self::map_global_keys(key),
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('d') => AppCommand::OpenWalletDownload,
            KeyCode::Char('q') => AppCommand::RequestQuit,
            _ => AppCommand::Noop,
        }
    }

    fn map_help_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => AppCommand::ToggleHelp,
            _ => AppCommand::Noop,
        }
    }

    fn map_confirm_quit_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y' | 'q') => AppCommand::ConfirmQuit,
            KeyCode::Esc | KeyCode::Char('n') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }
}

/// Shorthand for [`KeyMapper::map_key`].
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    KeyMapper::map_key(key, context)
}

// ============================================================================
// Tests
// ============================================================================
