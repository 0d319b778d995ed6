//! Textual principal ids for canisters.
//!
//! Parsing goes through [`candid::Principal::from_text`], which checks the
//! CRC32 prefix and only accepts the canonical dash-grouped form, so ids
//! coming from config files or the command line are checked before any
//! call is made with them.

use std::fmt;
use std::str::FromStr;

use candid::Principal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Reasons a textual principal is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrincipalError {
    /// Input was empty.
    #[error("principal text is empty")]
    Empty,

    /// Input is not a canonical textual principal.
    #[error("principal '{text}' is invalid: {reason}")]
    Invalid {
        /// The text that was given.
        text: String,
        /// Why the principal decoder refused it.
        reason: String,
    },
}

// ============================================================================
// CanisterId
// ============================================================================

/// Validated principal id of a canister, serialized in its text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanisterId(Principal);

impl FromStr for CanisterId {
    type Err = PrincipalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PrincipalError::Empty);
        }

        Principal::from_text(trimmed)
            .map(Self)
            .map_err(|e| PrincipalError::Invalid {
                text: trimmed.to_string(),
                reason: e.to_string(),
            })
    }
}

impl TryFrom<String> for CanisterId {
    type Error = PrincipalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CanisterId> for String {
    fn from(id: CanisterId) -> Self {
        id.0.to_text()
    }
}

impl fmt::Display for CanisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_text())
    }
}

// ============================================================================
// Tests
// ============================================================================
