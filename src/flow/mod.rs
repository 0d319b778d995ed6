//! The swap flow: stages, user inputs and the controller that drives them.
//!
//! # Module Organization
//!
//! - [`SwapFlow`] - plain state: stage, spend amount, invite code, notices
//! - [`calls`] - [`PendingCall`] requests and their [`CallOutcome`]s
//! - [`controller`] - [`FlowController`], guards and transitions
//!
//! ```text
//!   Disconnected --Connected--> Unapproved --Approved--> Approved --Swapped--> Completed
//!                                    ^                       |
//!                                    +-------WentBack--------+
//! ```

use std::collections::VecDeque;

use crate::constants::{
    DEFAULT_INVITE_CODE, MAX_AMOUNT_DIGITS, MAX_INVITE_CODE_LEN, SPEND_PAGE_STEP,
};
use crate::domain::SpendAmount;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod calls;
pub mod controller;

// ============================================================================
// Re-exports
// ============================================================================

pub use calls::{CallOutcome, PendingCall};
pub use controller::{FlowController, FlowSettings};

// ============================================================================
// Stages
// ============================================================================

/// Where the user is in the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowStage {
    /// No wallet session yet.
    #[default]
    Disconnected,
    /// Wallet connected, spend not approved.
    Unapproved,
    /// Ledger allowance granted, swap not done.
    Approved,
    /// Swap executed.
    Completed,
}

/// Something that moves the flow between stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// The wallet reported a session.
    Connected,
    /// The ledger accepted the approval.
    Approved,
    /// The backend executed the swap.
    Swapped,
    /// The user went back from the swap screen.
    WentBack,
}

impl FlowStage {
    /// The transition table. `None` means the event is not valid here.
    #[must_use]
    pub const fn transition(self, event: FlowEvent) -> Option<Self> {
        match (self, event) {
            (Self::Disconnected, FlowEvent::Connected) => Some(Self::Unapproved),
            (Self::Unapproved, FlowEvent::Approved) => Some(Self::Approved),
            (Self::Approved, FlowEvent::Swapped) => Some(Self::Completed),
            (Self::Approved, FlowEvent::WentBack) => Some(Self::Unapproved),
            _ => None,
        }
    }

    /// Whether a wallet session exists.
    #[must_use]
    pub const fn connected(self) -> bool {
        !matches!(self, Self::Disconnected)
    }

    /// Whether the spend has been approved.
    #[cfg(test)]
    #[must_use]
    pub const fn approved(self) -> bool {
        matches!(self, Self::Approved | Self::Completed)
    }

    /// Whether the swap has completed.
    #[cfg(test)]
    #[must_use]
    pub const fn swap_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Short label used in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Not connected",
            Self::Unapproved => "Connected",
            Self::Approved => "Approved",
            Self::Completed => "Completed",
        }
    }
}

// ============================================================================
// Notices
// ============================================================================

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-visible message produced by the flow.
///
/// Transient notices become toasts; persistent ones stay on screen until
/// dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub persistent: bool,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
            persistent: false,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
            persistent: false,
        }
    }

    /// Error notice that must be dismissed by the user.
    #[must_use]
    pub fn persistent(text: impl Into<String>) -> Self {
        Self {
            persistent: true,
            ..Self::error(text)
        }
    }
}

// ============================================================================
// Flow State
// ============================================================================

/// State of one swap session.
///
/// The spend amount is kept as the raw number the user typed so it can
/// leave the accepted range while editing; approval is disabled until it is
/// back inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapFlow {
    stage: FlowStage,
    spend_amount: u64,
    invite_code: String,
    loading: bool,
    error_message: String,
    notices: VecDeque<Notice>,
}

impl Default for SwapFlow {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_SPEND_ICP, DEFAULT_INVITE_CODE)
    }
}

impl SwapFlow {
    /// Creates a disconnected flow with the given initial inputs.
    #[must_use]
    pub fn new(spend_amount: u64, invite_code: &str) -> Self {
        let mut flow = Self {
            stage: FlowStage::Disconnected,
            spend_amount,
            invite_code: String::new(),
            loading: false,
            error_message: String::new(),
            notices: VecDeque::new(),
        };
        flow.set_invite_code(invite_code);
        flow
    }

    #[must_use]
    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    #[must_use]
    pub fn connected(&self) -> bool {
        self.stage.connected()
    }

    #[cfg(test)]
    #[must_use]
    pub fn approved(&self) -> bool {
        self.stage.approved()
    }

    #[cfg(test)]
    #[must_use]
    pub fn swap_completed(&self) -> bool {
        self.stage.swap_completed()
    }

    /// Whether a flow call is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Last user-visible error, empty when there is none.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Raw spend amount in whole ICP.
    #[must_use]
    pub fn spend_amount(&self) -> u64 {
        self.spend_amount
    }

    #[must_use]
    pub fn invite_code(&self) -> &str {
        &self.invite_code
    }

    /// Invite code as sent to the backend; an empty code is sent as none.
    #[must_use]
    pub fn invite_for_call(&self) -> Option<String> {
        let code = self.invite_code.trim();
        (!code.is_empty()).then(|| code.to_string())
    }

    /// Whether the approve action is enabled.
    #[must_use]
    pub fn can_approve(&self) -> bool {
        self.stage == FlowStage::Unapproved
            && !self.loading
            && SpendAmount::is_valid(self.spend_amount)
    }

    /// Whether the swap action is enabled.
    #[must_use]
    pub fn can_swap(&self) -> bool {
        self.stage == FlowStage::Approved && !self.loading
    }

    // ------------------------------------------------------------------------
    // Input editing
    // ------------------------------------------------------------------------

    #[cfg(test)]
    pub fn set_spend_amount(&mut self, icp: u64) {
        self.spend_amount = icp;
    }

    /// Adds `delta` to the amount, clamping the result into range.
    pub fn step_spend_amount(&mut self, delta: i64) {
        let stepped = self.spend_amount.saturating_add_signed(delta);
        self.spend_amount = SpendAmount::clamped(stepped).icp();
    }

    /// Moves the amount one page up.
    pub fn page_up(&mut self) {
        self.step_spend_amount(SPEND_PAGE_STEP as i64);
    }

    /// Moves the amount one page down.
    pub fn page_down(&mut self) {
        self.step_spend_amount(-(SPEND_PAGE_STEP as i64));
    }

    /// Appends a typed digit; ignored once the input is full.
    pub fn push_amount_digit(&mut self, digit: char) {
        let Some(value) = digit.to_digit(10) else {
            return;
        };
        if self.spend_amount.to_string().len() >= MAX_AMOUNT_DIGITS {
            return;
        }
        self.spend_amount = self.spend_amount * 10 + u64::from(value);
    }

    /// Removes the last typed digit.
    pub fn pop_amount_digit(&mut self) {
        self.spend_amount /= 10;
    }

    /// Replaces the invite code, trimming it to the accepted length.
    pub fn set_invite_code(&mut self, code: &str) {
        self.invite_code = code.chars().take(MAX_INVITE_CODE_LEN).collect();
    }

    // ------------------------------------------------------------------------
    // Notices
    // ------------------------------------------------------------------------

    /// Takes the oldest pending notice.
    pub fn pop_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    /// Notices not yet shown.
    #[cfg(test)]
    #[must_use]
    pub fn pending_notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    // ------------------------------------------------------------------------
    // Controller internals
    // ------------------------------------------------------------------------

    pub(crate) fn fire(&mut self, event: FlowEvent) -> bool {
        match self.stage.transition(event) {
            Some(next) => {
                tracing::info!("flow {:?} --{:?}--> {:?}", self.stage, event, next);
                self.stage = next;
                true
            }
            None => {
                tracing::debug!("flow ignores {:?} in {:?}", event, self.stage);
                false
            }
        }
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_error_message(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
    }

    pub(crate) fn clear_error_message(&mut self) {
        self.error_message.clear();
    }

    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }
}

// ============================================================================
// Tests
// ============================================================================
