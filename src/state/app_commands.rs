//! Command execution and input handling.
//!
//! Keys are mapped to commands for the current context, then executed here.
//! Wallet calls are prepared synchronously and spawned; guard violations
//! show up as toasts.

use crossterm::event::KeyEvent;

use super::{App, PopupState};
use crate::commands::{AppCommand, InputContext, map_key};
use crate::constants::{
    MAX_INVITE_CODE_LEN, TERMS_URL, TOAST_TICKS_LONG, TOAST_TICKS_SHORT, WALLET_DOWNLOAD_URL,
};
use crate::domain::FlowError;
use crate::flow::{FlowStage, PendingCall, SwapFlow};
use crate::state::platform::ClipboardManager;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which keybindings are active.
    ///
    /// Help has the highest priority, then popups, then the invite editor,
    /// then the screen of the current flow stage.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }

        match &self.ui.popup_state {
            PopupState::ConfirmQuit => InputContext::ConfirmQuit,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None => {
                if self.ui.is_editing_invite() {
                    return InputContext::InviteEdit;
                }
                match self.flow.flow().stage() {
                    FlowStage::Disconnected => InputContext::Connect,
                    FlowStage::Unapproved => InputContext::Approve,
                    FlowStage::Approved => InputContext::Swap,
                    FlowStage::Completed => InputContext::Gratitude,
                }
            }
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::RequestQuit => self.ui.open_confirm_quit(),
            AppCommand::ConfirmQuit => self.exit = true,
            AppCommand::ToggleHelp => self.ui.toggle_help(),
            AppCommand::Dismiss => self.handle_dismiss(),

            // === Flow ===
            AppCommand::ConnectWallet => {
                let call = self.flow.prepare_connect();
                self.start_call(call);
            }
            AppCommand::ApproveSpend => {
                let call = self.flow.prepare_approve();
                self.start_call(call);
            }
            AppCommand::PerformSwap => {
                let call = self.flow.prepare_swap();
                self.start_call(call);
            }
            AppCommand::ImportToken => {
                let call = self.flow.prepare_import_token();
                self.start_call(call);
            }
            AppCommand::GoBack => {
                if let Err(e) = self.flow.go_back() {
                    self.report_flow_error(&e);
                }
            }

            // === Amount Input ===
            AppCommand::IncreaseAmount => self.edit_amount(|flow| flow.step_spend_amount(1)),
            AppCommand::DecreaseAmount => self.edit_amount(|flow| flow.step_spend_amount(-1)),
            AppCommand::PageUpAmount => self.edit_amount(SwapFlow::page_up),
            AppCommand::PageDownAmount => self.edit_amount(SwapFlow::page_down),
            AppCommand::TypeDigit(digit) => self.edit_amount(|flow| flow.push_amount_digit(digit)),
            AppCommand::DeleteDigit => self.edit_amount(SwapFlow::pop_amount_digit),

            // === Invite Code ===
            AppCommand::EditInvite => {
                let current = self.flow.flow().invite_code().to_string();
                self.ui.open_invite_editor(&current);
            }
            AppCommand::TypeChar(c) => {
                if let Some(editor) = self.ui.invite_editor.as_mut() {
                    editor.push_char(c, MAX_INVITE_CODE_LEN);
                }
            }
            AppCommand::Backspace => {
                if let Some(editor) = self.ui.invite_editor.as_mut() {
                    editor.backspace();
                }
            }
            AppCommand::SubmitInvite => {
                if let Some(code) = self.ui.close_invite_editor() {
                    self.flow.flow_mut().set_invite_code(&code);
                    tracing::debug!("invite code set to {:?}", self.flow.flow().invite_code());
                }
            }

            // === Links and Clipboard ===
            AppCommand::OpenWalletDownload => {
                self.ui.dismiss_popup();
                self.open_link(WALLET_DOWNLOAD_URL);
            }
            AppCommand::OpenTerms => self.open_link(TERMS_URL),
            AppCommand::CopyTokenId => self.copy_token_id(),

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn handle_dismiss(&mut self) {
        if self.ui.is_editing_invite() {
            // Discard the edit.
            let _ = self.ui.close_invite_editor();
        } else if self.ui.has_active_popup() {
            self.ui.dismiss_popup();
        }
    }

    /// Spawns a prepared call, or reports why it was refused.
    fn start_call(&mut self, call: Result<PendingCall, FlowError>) {
        match call {
            Ok(call) => self.spawn_call(call),
            // The controller already queued the install notice.
            Err(FlowError::WalletUnavailable) => {
                self.show_notices();
                if !self.ui.has_active_popup() {
                    self.report_flow_error(&FlowError::WalletUnavailable);
                }
            }
            Err(e) => self.report_flow_error(&e),
        }
    }

    fn report_flow_error(&mut self, error: &FlowError) {
        tracing::debug!("command refused: {error}");
        self.ui.show_toast(format!("[x] {error}"), TOAST_TICKS_LONG);
    }

    /// Applies an amount edit unless a call is in flight.
    fn edit_amount(&mut self, edit: impl FnOnce(&mut SwapFlow)) {
        if self.flow.flow().loading() {
            return;
        }
        edit(self.flow.flow_mut());
    }

    fn open_link(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => {
                self.ui
                    .show_toast("[+] Opened in browser", TOAST_TICKS_SHORT);
            }
            Err(e) => {
                tracing::warn!("failed to open {url}: {e}");
                self.ui
                    .show_toast(format!("[x] Failed to open browser: {e}"), TOAST_TICKS_LONG);
            }
        }
    }

    fn copy_token_id(&mut self) {
        let token_id = self.flow.settings().token.canister_id.to_string();
        match ClipboardManager::new().copy_text(&token_id) {
            Ok(()) => self.ui.show_toast("[+] Token ID copied!", TOAST_TICKS_SHORT),
            Err(e) => self.ui.show_toast(format!("[x] {e}"), TOAST_TICKS_SHORT),
        }
    }
}
