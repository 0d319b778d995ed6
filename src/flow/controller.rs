//! Guards, requests and transitions of the swap flow.
//!
//! Every operation is a pair: `prepare_*` checks the guard, marks the flow
//! as loading and returns a [`PendingCall`]; [`FlowController::apply`]
//! consumes the [`CallOutcome`], clears the loading flag and moves the flow.
//! A guard violation returns a [`FlowError`] and leaves the state as it was.
//!
//! The TUI spawns the call so it can keep drawing while the wallet works.

use std::sync::Arc;

use super::calls::{CallOutcome, PendingCall};
use super::{FlowEvent, FlowStage, Notice, SwapFlow};
use crate::client::WalletGateway;
use crate::domain::ledger::nat_json;
use crate::domain::{
    ApproveArgs, ApproveError, ApproveResult, CanisterId, FlowError, GatewayError, PublicKey,
    SpendAmount, SwapReceipt, TokenImport, format_e8s,
};

// ============================================================================
// Messages
// ============================================================================

pub const CONNECTED_MESSAGE: &str = "Your Plug wallet has been successfully connected";
pub const CONNECT_FAILED_MESSAGE: &str = "Could not connect your Plug wallet";
pub const WALLET_MISSING_MESSAGE: &str =
    "Plug Wallet is not available. Please install Plug Wallet extension";
pub const APPROVAL_FAILED_MESSAGE: &str =
    "An unexpected error occurred during transaction approval.";
pub const SWAP_FAILED_MESSAGE: &str = "The swap could not be completed";

/// Message shown when the ledger reports insufficient funds.
///
/// The balance is shown exactly as the ledger reported it.
#[must_use]
pub fn insufficient_funds_message(balance: impl std::fmt::Display) -> String {
    format!("Insufficient Funds: Your current balance is {balance} ICP.")
}

// ============================================================================
// Settings
// ============================================================================

/// Canisters and options the controller needs; fixed for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    /// ICP ledger the approval goes to.
    pub ledger: CanisterId,
    /// Swap backend, also the spender of the approval.
    pub backend: CanisterId,
    /// Token registered by the import action.
    pub token: TokenImport,
    /// Show swap failures to the user instead of only logging them.
    pub surface_swap_failures: bool,
}

impl FlowSettings {
    /// Canisters the wallet session must be allowed to call.
    #[must_use]
    pub fn whitelist(&self) -> Vec<CanisterId> {
        vec![self.ledger.clone(), self.backend.clone()]
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Owns the flow state and the wallet capability.
#[derive(Debug)]
pub struct FlowController {
    flow: SwapFlow,
    settings: FlowSettings,
    gateway: Option<Arc<dyn WalletGateway>>,
}

impl FlowController {
    /// Creates a controller. `gateway == None` means no wallet is installed.
    #[must_use]
    pub fn new(
        flow: SwapFlow,
        settings: FlowSettings,
        gateway: Option<Arc<dyn WalletGateway>>,
    ) -> Self {
        Self {
            flow,
            settings,
            gateway,
        }
    }

    #[must_use]
    pub fn flow(&self) -> &SwapFlow {
        &self.flow
    }

    /// Mutable access for input editing.
    pub fn flow_mut(&mut self) -> &mut SwapFlow {
        &mut self.flow
    }

    #[must_use]
    pub fn settings(&self) -> &FlowSettings {
        &self.settings
    }

    /// Whether a wallet gateway is installed.
    #[must_use]
    pub fn has_wallet(&self) -> bool {
        self.gateway.is_some()
    }

    // ------------------------------------------------------------------------
    // Guards
    // ------------------------------------------------------------------------

    /// Checks that the flow is idle and in `required`.
    fn require(&self, required: FlowStage) -> Result<(), FlowError> {
        let current = self.flow.stage();
        if current != required {
            return Err(match (required, current) {
                (FlowStage::Disconnected, _) => FlowError::AlreadyConnected,
                (_, FlowStage::Disconnected) => FlowError::NotConnected,
                (_, FlowStage::Completed) => FlowError::Completed,
                (FlowStage::Approved, FlowStage::Unapproved) => FlowError::NotApproved,
                _ => FlowError::AlreadyApproved,
            });
        }
        if self.flow.loading() {
            return Err(FlowError::Busy);
        }
        Ok(())
    }

    fn gateway(&self) -> Result<Arc<dyn WalletGateway>, FlowError> {
        self.gateway.clone().ok_or(FlowError::WalletUnavailable)
    }

    // ------------------------------------------------------------------------
    // Prepare
    // ------------------------------------------------------------------------

    /// Startup probe for an existing session. Only valid while disconnected.
    ///
    /// # Errors
    ///
    /// [`FlowError::AlreadyConnected`], [`FlowError::Busy`] or
    /// [`FlowError::WalletUnavailable`].
    pub fn prepare_check_connection(&mut self) -> Result<PendingCall, FlowError> {
        self.require(FlowStage::Disconnected)?;
        let gateway = self.gateway()?;
        self.flow.set_loading(true);
        Ok(PendingCall::CheckConnection { gateway })
    }

    /// Requests a wallet session. Only valid while disconnected.
    ///
    /// Without a wallet this queues the persistent "install the wallet"
    /// notice and returns [`FlowError::WalletUnavailable`].
    ///
    /// # Errors
    ///
    /// [`FlowError::AlreadyConnected`], [`FlowError::Busy`] or
    /// [`FlowError::WalletUnavailable`].
    pub fn prepare_connect(&mut self) -> Result<PendingCall, FlowError> {
        self.require(FlowStage::Disconnected)?;
        let Ok(gateway) = self.gateway() else {
            tracing::info!("connect requested without a wallet");
            self.flow.push_notice(Notice::persistent(WALLET_MISSING_MESSAGE));
            return Err(FlowError::WalletUnavailable);
        };

        self.flow.set_loading(true);
        Ok(PendingCall::Connect {
            gateway,
            whitelist: self.settings.whitelist(),
        })
    }

    /// Builds the ledger approval for the chosen amount.
    ///
    /// # Errors
    ///
    /// Stage guards, [`FlowError::Busy`] and
    /// [`FlowError::AmountOutOfRange`].
    pub fn prepare_approve(&mut self) -> Result<PendingCall, FlowError> {
        self.require(FlowStage::Unapproved)?;
        let amount = SpendAmount::new(self.flow.spend_amount())?;
        let gateway = self.gateway()?;

        let args = ApproveArgs::for_spender(self.settings.backend.clone(), amount.approval_e8s());
        tracing::debug!(
            "approving {} ICP for {}",
            format_e8s(amount.approval_e8s()),
            self.settings.backend
        );

        self.flow.set_loading(true);
        self.flow.clear_error_message();
        Ok(PendingCall::Approve {
            gateway,
            ledger: self.settings.ledger.clone(),
            args,
        })
    }

    /// Builds the swap call for the approved amount.
    ///
    /// # Errors
    ///
    /// Stage guards, [`FlowError::Busy`] and
    /// [`FlowError::AmountOutOfRange`].
    pub fn prepare_swap(&mut self) -> Result<PendingCall, FlowError> {
        self.require(FlowStage::Approved)?;
        let amount = SpendAmount::new(self.flow.spend_amount())?;
        let gateway = self.gateway()?;

        self.flow.set_loading(true);
        self.flow.clear_error_message();
        Ok(PendingCall::Swap {
            gateway,
            backend: self.settings.backend.clone(),
            amount_e8s: amount.swap_e8s(),
            invite_code: self.flow.invite_for_call(),
        })
    }

    /// Builds the token import request. Does not depend on or change the
    /// flow state.
    ///
    /// # Errors
    ///
    /// [`FlowError::WalletUnavailable`] when no wallet is installed.
    pub fn prepare_import_token(&self) -> Result<PendingCall, FlowError> {
        Ok(PendingCall::ImportToken {
            gateway: self.gateway()?,
            token: self.settings.token.clone(),
        })
    }

    /// Leaves the swap screen for the approve screen.
    ///
    /// # Errors
    ///
    /// Stage guards and [`FlowError::Busy`].
    pub fn go_back(&mut self) -> Result<(), FlowError> {
        self.require(FlowStage::Approved)?;
        self.flow.fire(FlowEvent::WentBack);
        self.flow.set_loading(false);
        self.flow.clear_error_message();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Apply
    // ------------------------------------------------------------------------

    /// Consumes the outcome of a call prepared by this controller.
    pub fn apply(&mut self, outcome: CallOutcome) {
        match outcome {
            CallOutcome::ConnectionChecked(result) => {
                self.flow.set_loading(false);
                self.apply_connection_check(result);
            }
            CallOutcome::Connected(result) => {
                self.flow.set_loading(false);
                self.apply_connect(result);
            }
            CallOutcome::Approved(result) => {
                self.apply_approve(result);
                self.flow.set_loading(false);
            }
            CallOutcome::Swapped(result) => {
                self.apply_swap(result);
                self.flow.set_loading(false);
            }
            CallOutcome::TokenImported(result) => self.apply_import(result),
        }
    }

    fn apply_connection_check(&mut self, result: Result<bool, GatewayError>) {
        match result {
            Ok(true) => {
                tracing::info!("wallet session already established");
                self.flow.fire(FlowEvent::Connected);
            }
            Ok(false) => tracing::debug!("no wallet session yet"),
            Err(e) => tracing::warn!("session check failed: {e}"),
        }
    }

    fn apply_connect(&mut self, result: Result<PublicKey, GatewayError>) {
        match result {
            Ok(key) => {
                tracing::info!("wallet connected, public key {}", key.abbreviated());
                self.flow.fire(FlowEvent::Connected);
                self.flow.push_notice(Notice::success(CONNECTED_MESSAGE));
            }
            Err(e) if e.is_unavailable() => {
                tracing::warn!("wallet not available: {e}");
                self.flow.push_notice(Notice::persistent(WALLET_MISSING_MESSAGE));
            }
            Err(e) => {
                tracing::error!("wallet connection error: {e}");
                self.flow.push_notice(Notice::error(format!("{CONNECT_FAILED_MESSAGE}: {e}")));
            }
        }
    }

    fn apply_approve(&mut self, result: Result<ApproveResult, GatewayError>) {
        match result {
            Ok(Err(ApproveError::InsufficientFunds { balance })) => {
                let message = insufficient_funds_message(nat_json::digits(&balance));
                tracing::warn!("approval refused: {message}");
                self.flow.set_error_message(message.clone());
                self.flow.push_notice(Notice::error(message));
            }
            Ok(reply) => {
                match &reply {
                    Ok(block) => {
                        tracing::info!("approval recorded in block {}", nat_json::digits(block));
                    }
                    Err(e) => tracing::warn!("ledger answered approval with {e}"),
                }
                self.flow.fire(FlowEvent::Approved);
            }
            Err(e) => {
                tracing::error!("error during transaction approval: {e}");
                self.flow.set_error_message(APPROVAL_FAILED_MESSAGE);
            }
        }
    }

    fn apply_swap(&mut self, result: Result<SwapReceipt, GatewayError>) {
        let failure = match result {
            Ok(receipt) => match receipt.backend_error() {
                None => {
                    tracing::info!("swap executed: {}", receipt.reply);
                    self.flow.fire(FlowEvent::Swapped);
                    return;
                }
                Some(reason) => reason,
            },
            Err(e) => e.to_string(),
        };

        tracing::error!("error performing swap: {failure}");
        if self.settings.surface_swap_failures {
            let message = format!("{SWAP_FAILED_MESSAGE}: {failure}");
            self.flow.set_error_message(message.clone());
            self.flow.push_notice(Notice::error(message));
        }
    }

    fn apply_import(&mut self, result: Result<(), GatewayError>) {
        match result {
            Ok(()) => {
                tracing::info!("token {} imported", self.settings.token.symbol);
                self.flow.push_notice(Notice::success(format!(
                    "{} added to your wallet",
                    self.settings.token.symbol
                )));
            }
            Err(e) => tracing::warn!("failed to import token: {e}"),
        }
    }
}

/// Sequential wrappers that chain `prepare_*`, the call and `apply`.
#[cfg(test)]
impl FlowController {
    async fn drive(&mut self, call: PendingCall) {
        tracing::debug!("running {}", call.name());
        let outcome = call.run().await;
        self.apply(outcome);
    }

    pub async fn check_connection(&mut self) -> Result<(), FlowError> {
        let call = self.prepare_check_connection()?;
        self.drive(call).await;
        Ok(())
    }

    pub async fn connect(&mut self) -> Result<(), FlowError> {
        let call = self.prepare_connect()?;
        self.drive(call).await;
        Ok(())
    }

    pub async fn approve_spend(&mut self) -> Result<(), FlowError> {
        let call = self.prepare_approve()?;
        self.drive(call).await;
        Ok(())
    }

    pub async fn perform_swap(&mut self) -> Result<(), FlowError> {
        let call = self.prepare_swap()?;
        self.drive(call).await;
        Ok(())
    }

    pub async fn import_token(&mut self) -> Result<(), FlowError> {
        let call = self.prepare_import_token()?;
        self.drive(call).await;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ledger::Nat;
    use crate::flow::NoticeLevel;
    use crate::test_utils::{MockCall, MockFailure, MockGateway, SettingsMother};
    use serde_json::json;

    fn controller(gateway: &MockGateway) -> FlowController {
        FlowController::new(
            SwapFlow::default(),
            SettingsMother::mainnet(),
            Some(gateway.shared()),
        )
    }

    fn controller_at(gateway: &MockGateway, amount: u64, invite: &str) -> FlowController {
        FlowController::new(
            SwapFlow::new(amount, invite),
            SettingsMother::mainnet(),
            Some(gateway.shared()),
        )
    }

    fn drain(controller: &mut FlowController) -> Vec<Notice> {
        std::iter::from_fn(|| controller.flow_mut().pop_notice()).collect()
    }

    // ------------------------------------------------------------------------
    // Connect
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_connect_success_whitelists_ledger_and_backend() {
        let gateway = MockGateway::new();
        let mut controller = controller(&gateway);

        controller.connect().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Unapproved);
        assert!(!controller.flow().loading());
        assert_eq!(
            gateway.calls(),
            vec![MockCall::Connect(SettingsMother::mainnet().whitelist())]
        );
        let notices = drain(&mut controller);
        assert_eq!(notices, vec![Notice::success(CONNECTED_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_connect_rejected_stays_disconnected() {
        let gateway = MockGateway::new().failing_connect(MockFailure::Rejected);
        let mut controller = controller(&gateway);

        controller.connect().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Disconnected);
        assert!(!controller.flow().connected());
        assert!(!controller.flow().loading());
        let notices = drain(&mut controller);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert!(!notices[0].persistent);
        assert!(notices[0].text.starts_with(CONNECT_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_connect_without_wallet_is_persistent_notice() {
        let mut controller =
            FlowController::new(SwapFlow::default(), SettingsMother::mainnet(), None);

        assert_eq!(controller.connect().await, Err(FlowError::WalletUnavailable));

        assert_eq!(controller.flow().stage(), FlowStage::Disconnected);
        assert!(!controller.flow().loading());
        assert_eq!(
            drain(&mut controller),
            vec![Notice::persistent(WALLET_MISSING_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn test_unreachable_bridge_counts_as_missing_wallet() {
        let gateway = MockGateway::new().failing_connect(MockFailure::Unavailable);
        let mut controller = controller(&gateway);

        controller.connect().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Disconnected);
        assert_eq!(
            drain(&mut controller),
            vec![Notice::persistent(WALLET_MISSING_MESSAGE)]
        );
    }

    #[test]
    fn test_connect_while_loading_is_busy() {
        let gateway = MockGateway::new();
        let mut controller = controller(&gateway);

        let _call = controller.prepare_connect().unwrap();
        assert!(controller.flow().loading());
        assert_eq!(controller.prepare_connect().err(), Some(FlowError::Busy));
    }

    #[tokio::test]
    async fn test_connect_when_connected_is_refused() {
        let gateway = MockGateway::new();
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();
        drain(&mut controller);

        assert_eq!(controller.connect().await, Err(FlowError::AlreadyConnected));
        assert_eq!(controller.flow().stage(), FlowStage::Unapproved);
        assert!(!controller.flow().loading());
        assert_eq!(gateway.calls().len(), 1);
        assert!(drain(&mut controller).is_empty());
    }

    // ------------------------------------------------------------------------
    // Startup check
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_check_connection_restores_session() {
        let gateway = MockGateway::new().with_session(true);
        let mut controller = controller(&gateway);

        controller.check_connection().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Unapproved);
        assert!(drain(&mut controller).is_empty());
    }

    #[tokio::test]
    async fn test_check_connection_failure_leaves_disconnected() {
        let gateway = MockGateway::new().failing_session(MockFailure::Unavailable);
        let mut controller = controller(&gateway);

        controller.check_connection().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Disconnected);
        assert!(!controller.flow().loading());
        assert!(drain(&mut controller).is_empty());
    }

    // ------------------------------------------------------------------------
    // Approve
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_approve_before_connect_is_refused() {
        let gateway = MockGateway::new();
        let mut controller = controller(&gateway);

        assert_eq!(controller.approve_spend().await, Err(FlowError::NotConnected));
        assert!(gateway.calls().is_empty());
        assert!(!controller.flow().loading());
    }

    #[tokio::test]
    async fn test_approve_out_of_range_is_refused_without_call() {
        let gateway = MockGateway::new();
        let mut controller = controller_at(&gateway, 251, "GALAXY");
        controller.connect().await.unwrap();

        assert!(!controller.flow().can_approve());
        assert_eq!(
            controller.approve_spend().await,
            Err(FlowError::AmountOutOfRange { amount: 251 })
        );
        assert_eq!(controller.flow().stage(), FlowStage::Unapproved);
        assert!(!controller.flow().loading());
        assert_eq!(gateway.approve_calls().len(), 0);
    }

    #[tokio::test]
    async fn test_approve_sends_amount_plus_fee_buffer() {
        let gateway = MockGateway::new();
        let mut controller = controller_at(&gateway, 50, "GALAXY");
        controller.connect().await.unwrap();

        controller.approve_spend().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Approved);
        let approvals = gateway.approve_calls();
        assert_eq!(approvals.len(), 1);
        let args = &approvals[0];
        assert_eq!(args.amount, Nat::from(5_000_010_000u64));
        assert_eq!(args.spender.owner, SettingsMother::mainnet().backend);
        assert!(args.spender.subaccount.is_none());
        assert!(args.fee.is_none() && args.memo.is_none() && args.expires_at.is_none());
    }

    #[tokio::test]
    async fn test_approve_amount_for_every_valid_spend() {
        for icp in crate::constants::MIN_SPEND_ICP..=crate::constants::MAX_SPEND_ICP {
            let gateway = MockGateway::new();
            let mut controller = controller_at(&gateway, icp, "GALAXY");
            controller.connect().await.unwrap();
            controller.approve_spend().await.unwrap();

            let approvals = gateway.approve_calls();
            assert_eq!(approvals[0].amount, Nat::from(icp * 100_000_000 + 10_000));
        }
    }

    #[tokio::test]
    async fn test_insufficient_funds_stays_unapproved_with_exact_balance() {
        let gateway = MockGateway::new().with_approve(Err(ApproveError::InsufficientFunds {
            balance: Nat::from(123_456_789u64),
        }));
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();
        drain(&mut controller);

        controller.approve_spend().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Unapproved);
        assert!(!controller.flow().loading());
        insta::assert_snapshot!(
            controller.flow().error_message(),
            @"Insufficient Funds: Your current balance is 123456789 ICP."
        );
        let notices = drain(&mut controller);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].text, controller.flow().error_message());
    }

    #[tokio::test]
    async fn test_other_ledger_errors_still_approve() {
        let gateway = MockGateway::new().with_approve(Err(ApproveError::TemporarilyUnavailable));
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();

        controller.approve_spend().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Approved);
        assert!(controller.flow().error_message().is_empty());
    }

    #[tokio::test]
    async fn test_approve_transport_failure_sets_generic_message() {
        let gateway = MockGateway::new().failing_approve(MockFailure::Call);
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();

        controller.approve_spend().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Unapproved);
        assert!(!controller.flow().loading());
        assert_eq!(controller.flow().error_message(), APPROVAL_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_approve_clears_previous_error() {
        let gateway = MockGateway::new().failing_approve(MockFailure::Call);
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();
        controller.approve_spend().await.unwrap();
        assert!(!controller.flow().error_message().is_empty());

        let _call = controller.prepare_approve().unwrap();
        assert!(controller.flow().error_message().is_empty());
        assert!(controller.flow().loading());
        assert_eq!(controller.prepare_approve().err(), Some(FlowError::Busy));
    }

    // ------------------------------------------------------------------------
    // Swap
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_happy_path_scenario() {
        let gateway = MockGateway::new();
        let mut controller = controller_at(&gateway, 50, "GALAXY");

        controller.connect().await.unwrap();
        assert_eq!(controller.flow().stage(), FlowStage::Unapproved);

        controller.approve_spend().await.unwrap();
        assert_eq!(controller.flow().stage(), FlowStage::Approved);

        controller.perform_swap().await.unwrap();
        assert_eq!(controller.flow().stage(), FlowStage::Completed);
        assert!(controller.flow().swap_completed());
        assert!(!controller.flow().loading());

        assert_eq!(
            gateway.calls().last(),
            Some(&MockCall::Swap {
                amount_e8s: 5_000_000_000,
                invite_code: Some("GALAXY".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_swap_before_approval_is_refused() {
        let gateway = MockGateway::new();
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();

        assert_eq!(controller.perform_swap().await, Err(FlowError::NotApproved));
    }

    #[tokio::test]
    async fn test_empty_invite_is_sent_as_none() {
        let gateway = MockGateway::new();
        let mut controller = controller_at(&gateway, 10, "");
        controller.connect().await.unwrap();
        controller.approve_spend().await.unwrap();
        controller.perform_swap().await.unwrap();

        assert_eq!(
            gateway.calls().last(),
            Some(&MockCall::Swap {
                amount_e8s: 1_000_000_000,
                invite_code: None,
            })
        );
    }

    #[tokio::test]
    async fn test_swap_failure_is_surfaced_and_stays_approved() {
        let gateway = MockGateway::new().failing_swap(MockFailure::Call);
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();
        controller.approve_spend().await.unwrap();
        drain(&mut controller);

        controller.perform_swap().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Approved);
        assert!(!controller.flow().loading());
        assert!(controller.flow().error_message().starts_with(SWAP_FAILED_MESSAGE));
        assert_eq!(drain(&mut controller).len(), 1);
    }

    #[tokio::test]
    async fn test_swap_failure_can_be_log_only() {
        let gateway = MockGateway::new().failing_swap(MockFailure::Call);
        let settings = FlowSettings {
            surface_swap_failures: false,
            ..SettingsMother::mainnet()
        };
        let mut controller =
            FlowController::new(SwapFlow::default(), settings, Some(gateway.shared()));
        controller.connect().await.unwrap();
        controller.approve_spend().await.unwrap();
        drain(&mut controller);

        controller.perform_swap().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Approved);
        assert!(controller.flow().error_message().is_empty());
        assert!(drain(&mut controller).is_empty());
    }

    #[tokio::test]
    async fn test_backend_err_reply_is_a_failure() {
        let gateway =
            MockGateway::new().with_swap_reply(json!({ "Err": "Swap round is closed" }));
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();
        controller.approve_spend().await.unwrap();

        controller.perform_swap().await.unwrap();

        assert_eq!(controller.flow().stage(), FlowStage::Approved);
        assert_eq!(
            controller.flow().error_message(),
            "The swap could not be completed: Swap round is closed"
        );
    }

    // ------------------------------------------------------------------------
    // Go back
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_go_back_keeps_connection_amount_and_invite() {
        let gateway = MockGateway::new();
        let mut controller = controller_at(&gateway, 77, "FRIEND");
        controller.connect().await.unwrap();
        controller.approve_spend().await.unwrap();

        controller.go_back().unwrap();

        let flow = controller.flow();
        assert_eq!(flow.stage(), FlowStage::Unapproved);
        assert!(flow.connected());
        assert!(!flow.approved());
        assert!(!flow.loading());
        assert_eq!(flow.spend_amount(), 77);
        assert_eq!(flow.invite_code(), "FRIEND");
    }

    #[tokio::test]
    async fn test_go_back_is_refused_while_swapping() {
        let gateway = MockGateway::new();
        let mut controller = controller(&gateway);
        controller.connect().await.unwrap();
        controller.approve_spend().await.unwrap();

        let _call = controller.prepare_swap().unwrap();
        assert_eq!(controller.go_back(), Err(FlowError::Busy));
        assert_eq!(controller.flow().stage(), FlowStage::Approved);
    }

    #[tokio::test]
    async fn test_go_back_outside_approved_is_refused() {
        let gateway = MockGateway::new();
        let mut controller = controller(&gateway);
        assert_eq!(controller.go_back(), Err(FlowError::NotConnected));

        controller.connect().await.unwrap();
        assert_eq!(controller.go_back(), Err(FlowError::NotApproved));

        controller.approve_spend().await.unwrap();
        controller.perform_swap().await.unwrap();
        assert_eq!(controller.go_back(), Err(FlowError::Completed));
    }

    // ------------------------------------------------------------------------
    // Import token
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_import_token_never_touches_flow_state() {
        for gateway in [
            MockGateway::new(),
            MockGateway::new().failing_import(MockFailure::Rejected),
        ] {
            let mut controller = controller_at(&gateway, 42, "GALAXY");
            controller.connect().await.unwrap();
            let before = (
                controller.flow().stage(),
                controller.flow().loading(),
                controller.flow().error_message().to_string(),
                controller.flow().spend_amount(),
                controller.flow().invite_code().to_string(),
            );

            for _ in 0..3 {
                controller.import_token().await.unwrap();
            }

            let after = (
                controller.flow().stage(),
                controller.flow().loading(),
                controller.flow().error_message().to_string(),
                controller.flow().spend_amount(),
                controller.flow().invite_code().to_string(),
            );
            assert_eq!(before, after);
            assert_eq!(
                gateway
                    .calls()
                    .iter()
                    .filter(|c| matches!(c, MockCall::ImportToken(_)))
                    .count(),
                3
            );
        }
    }

    #[tokio::test]
    async fn test_import_token_sends_configured_token() {
        let gateway = MockGateway::new();
        let mut controller = controller(&gateway);

        controller.import_token().await.unwrap();

        assert_eq!(
            gateway.calls(),
            vec![MockCall::ImportToken(SettingsMother::mainnet().token)]
        );
        assert_eq!(
            drain(&mut controller),
            vec![Notice::success("WBR23 added to your wallet")]
        );
    }
}
