//! Gateway requests prepared by the controller and their explicit outcomes.
//!
//! A [`PendingCall`] owns everything it needs, so it can be moved into a
//! spawned task. Running it never touches flow state; the resulting
//! [`CallOutcome`] is handed back to [`FlowController::apply`].
//!
//! [`FlowController::apply`]: super::FlowController::apply

use std::sync::Arc;

use crate::client::WalletGateway;
use crate::domain::{
    ApproveArgs, ApproveResult, CanisterId, GatewayError, PublicKey, SwapReceipt, TokenImport,
};

/// A gateway request ready to run.
#[derive(Debug)]
pub enum PendingCall {
    /// Ask whether a session already exists.
    CheckConnection { gateway: Arc<dyn WalletGateway> },
    /// Request a session whitelisting the given canisters.
    Connect {
        gateway: Arc<dyn WalletGateway>,
        whitelist: Vec<CanisterId>,
    },
    /// `icrc2_approve` on the ledger.
    Approve {
        gateway: Arc<dyn WalletGateway>,
        ledger: CanisterId,
        args: ApproveArgs,
    },
    /// `swapIcpToToken` on the backend.
    Swap {
        gateway: Arc<dyn WalletGateway>,
        backend: CanisterId,
        amount_e8s: u64,
        invite_code: Option<String>,
    },
    /// Register the swap token in the wallet.
    ImportToken {
        gateway: Arc<dyn WalletGateway>,
        token: TokenImport,
    },
}

/// Result of a [`PendingCall`].
#[derive(Debug)]
pub enum CallOutcome {
    ConnectionChecked(Result<bool, GatewayError>),
    Connected(Result<PublicKey, GatewayError>),
    /// The outer result is transport, the inner one the ledger's answer.
    Approved(Result<ApproveResult, GatewayError>),
    Swapped(Result<SwapReceipt, GatewayError>),
    TokenImported(Result<(), GatewayError>),
}

impl PendingCall {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckConnection { .. } => "check_connection",
            Self::Connect { .. } => "connect",
            Self::Approve { .. } => "approve",
            Self::Swap { .. } => "swap",
            Self::ImportToken { .. } => "import_token",
        }
    }

    /// Performs the call.
    pub async fn run(self) -> CallOutcome {
        match self {
            Self::CheckConnection { gateway } => {
                CallOutcome::ConnectionChecked(gateway.is_connected().await)
            }
            Self::Connect { gateway, whitelist } => {
                CallOutcome::Connected(gateway.request_connect(&whitelist).await)
            }
            Self::Approve {
                gateway,
                ledger,
                args,
            } => {
                let result: Result<ApproveResult, GatewayError> = async {
                    let actor = gateway.ledger_actor(&ledger).await?;
                    actor.icrc2_approve(&args).await
                }
                .await;
                CallOutcome::Approved(result)
            }
            Self::Swap {
                gateway,
                backend,
                amount_e8s,
                invite_code,
            } => {
                let result: Result<SwapReceipt, GatewayError> = async {
                    let actor = gateway.backend_actor(&backend).await?;
                    actor
                        .swap_icp_to_token(amount_e8s, invite_code.as_deref())
                        .await
                }
                .await;
                CallOutcome::Swapped(result)
            }
            Self::ImportToken { gateway, token } => {
                CallOutcome::TokenImported(gateway.request_import_token(&token).await)
            }
        }
    }
}
