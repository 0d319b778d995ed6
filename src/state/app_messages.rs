//! Message processing.
//!
//! Outcomes of wallet calls are applied to the flow, then every notice the
//! flow queued is shown: transient ones as toasts, persistent ones as a
//! message popup.

use super::{App, AppMessage};
use crate::constants::{TOAST_TICKS_LONG, TOAST_TICKS_SHORT};
use crate::flow::{Notice, NoticeLevel};

impl App {
    /// Drains the message channel without blocking.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
        self.show_notices();
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Flow(outcome) => self.flow.apply(outcome),
        }
    }

    /// Moves queued flow notices onto the screen.
    pub(crate) fn show_notices(&mut self) {
        while let Some(notice) = self.flow.flow_mut().pop_notice() {
            self.show_notice(notice);
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        if notice.persistent {
            self.ui.show_message(notice.text);
            return;
        }
        match notice.level {
            NoticeLevel::Success => {
                self.ui
                    .show_toast(format!("[+] {}", notice.text), TOAST_TICKS_SHORT);
            }
            NoticeLevel::Error => {
                self.ui
                    .show_toast(format!("[x] {}", notice.text), TOAST_TICKS_LONG);
            }
        }
    }

    /// Waits for the next background message and processes it.
    #[cfg(test)]
    pub(crate) async fn settle(&mut self) {
        if let Some(message) = self.message_rx.recv().await {
            self.handle_message(message);
        }
        self.show_notices();
    }
}
