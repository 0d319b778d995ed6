//! Domain types for the galaxy-swap frontend.
//!
//! # Module Organization
//!
//! - [`error`] - Gateway and flow error types
//! - [`principal`] - Validated textual canister ids
//! - [`amount`] - Spend range and e8s arithmetic
//! - [`ledger`] - ICRC-2 approve request/response types
//! - [`token`] - Session keys, token registration, swap receipts

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod error;
pub mod ledger;
pub mod principal;
pub mod token;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::{SpendAmount, format_e8s};
pub use error::{FlowError, GatewayError};
pub use ledger::{ApproveArgs, ApproveError, ApproveReply, ApproveResult};
pub use principal::CanisterId;
pub use token::{PublicKey, SwapReceipt, TokenImport};
