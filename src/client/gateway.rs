//! Capability traits for the wallet and the remote actors it creates.
//!
//! The flow never talks to a wallet directly. It is handed an
//! `Arc<dyn WalletGateway>` (or nothing, when no wallet is installed) and
//! asks it for typed actors, the same way a browser wallet hands out actors
//! built from an interface factory.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    ApproveArgs, ApproveResult, CanisterId, GatewayError, PublicKey, SwapReceipt, TokenImport,
};

/// Candid method of the ledger approve call.
pub const ICRC2_APPROVE: &str = "icrc2_approve";

/// Candid method of the backend swap call.
pub const SWAP_ICP_TO_TOKEN: &str = "swapIcpToToken";

/// A wallet that can open a session and create actors on behalf of the user.
#[async_trait]
pub trait WalletGateway: Send + Sync + Debug {
    /// Whether a session with this frontend already exists.
    async fn is_connected(&self) -> Result<bool, GatewayError>;

    /// Asks the user to connect, whitelisting the given canisters.
    async fn request_connect(&self, whitelist: &[CanisterId]) -> Result<PublicKey, GatewayError>;

    /// Creates an actor for an ICRC-2 ledger canister.
    async fn ledger_actor(
        &self,
        canister: &CanisterId,
    ) -> Result<Arc<dyn LedgerActor>, GatewayError>;

    /// Creates an actor for the swap backend canister.
    async fn backend_actor(
        &self,
        canister: &CanisterId,
    ) -> Result<Arc<dyn BackendActor>, GatewayError>;

    /// Asks the wallet to list a token in its UI.
    async fn request_import_token(&self, token: &TokenImport) -> Result<(), GatewayError>;
}

/// Ledger calls signed by the connected wallet.
#[async_trait]
pub trait LedgerActor: Send + Sync + Debug {
    /// `icrc2_approve`; the outer error is transport, the inner one is the
    /// ledger's own answer.
    async fn icrc2_approve(&self, args: &ApproveArgs) -> Result<ApproveResult, GatewayError>;
}

/// Swap backend calls signed by the connected wallet.
#[async_trait]
pub trait BackendActor: Send + Sync + Debug {
    /// `swapIcpToToken(amount, opt invite_code)`.
    async fn swap_icp_to_token(
        &self,
        amount_e8s: u64,
        invite_code: Option<&str>,
    ) -> Result<SwapReceipt, GatewayError>;
}
