//! Error types for wallet and flow operations.
//!
//! [`GatewayError`] covers everything that can go wrong while talking to the
//! wallet bridge or a remote actor. [`FlowError`] covers guard violations of
//! the swap flow itself; a guard violation never changes flow state.

use thiserror::Error;

use crate::constants::{MAX_SPEND_ICP, MIN_SPEND_ICP};

// ============================================================================
// Gateway Errors
// ============================================================================

/// Failure of a wallet gateway or remote actor call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The wallet (or its bridge) cannot be reached at all.
    #[error("Wallet unavailable: {0}")]
    Unavailable(String),

    /// The wallet refused the request (user declined, not whitelisted, ...).
    #[error("Request rejected by wallet: {0}")]
    Rejected(String),

    /// Transport failure of the HTTP request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The bridge answered with an error status.
    #[error("Bridge error ({status}): {message}")]
    Bridge {
        /// HTTP status code returned by the bridge.
        status: u16,
        /// Error text from the response body.
        message: String,
    },

    /// A canister call trapped or was rejected by the replica.
    #[error("Call to {method} failed: {message}")]
    Call {
        /// Candid method name that was called.
        method: String,
        /// Reject message.
        message: String,
    },

    /// The reply did not have the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },
}

impl GatewayError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new call error for `method`.
    #[must_use]
    pub fn call(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Call {
            method: method.into(),
            message: message.into(),
        }
    }

    /// Returns `true` when the wallet itself is missing rather than failing.
    ///
    /// The flow treats this like an absent gateway: the user is told to
    /// install the wallet.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Unavailable(_) => true,
            Self::Network(e) => e.is_connect(),
            _ => false,
        }
    }
}

// ============================================================================
// Flow Errors
// ============================================================================

/// A flow operation was requested in a stage that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The wallet has not been connected yet.
    #[error("Connect your wallet first")]
    NotConnected,

    /// The wallet is already connected.
    #[error("Wallet is already connected")]
    AlreadyConnected,

    /// The spend has not been approved yet.
    #[error("Approve the spend first")]
    NotApproved,

    /// The spend is already approved.
    #[error("Spend is already approved")]
    AlreadyApproved,

    /// Another call is still in flight.
    #[error("Please wait for the current request to finish")]
    Busy,

    /// The chosen amount is outside the accepted range.
    #[error("Amount {amount} ICP is outside {}..={} ICP", MIN_SPEND_ICP, MAX_SPEND_ICP)]
    AmountOutOfRange {
        /// The rejected amount in whole ICP.
        amount: u64,
    },

    /// The swap has already completed.
    #[error("Swap already completed")]
    Completed,

    /// No wallet gateway is installed.
    #[error("Wallet is not available")]
    WalletUnavailable,
}

// ============================================================================
// Tests
// ============================================================================
