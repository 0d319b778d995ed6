//! ICRC-2 ledger types used by the approve step.
//!
//! These mirror the ledger's candid interface closely enough for the wallet
//! bridge to translate them one to one: optional fields become JSON `null`,
//! `nat` values become JSON numbers (or strings when the bridge prefers to
//! avoid precision loss).

use std::fmt;

pub use candid::Nat;
use serde::{Deserialize, Serialize};

use super::CanisterId;

// ============================================================================
// Nat wire format
// ============================================================================

/// JSON form of a candid `nat` on the bridge: a number while it fits in
/// `u64`, a decimal string beyond that. Both forms are accepted on input.
pub mod nat_json {
    use candid::Nat;
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(u64),
        Text(String),
    }

    /// Decimal digits of `nat`, without candid's `_` grouping.
    #[must_use]
    pub fn digits(nat: &Nat) -> String {
        nat.0.to_string()
    }

    pub fn serialize<S: Serializer>(nat: &Nat, serializer: S) -> Result<S::Ok, S::Error> {
        let text = digits(nat);
        match text.parse::<u64>() {
            Ok(value) => serializer.serialize_u64(value),
            Err(_) => serializer.serialize_str(&text),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Nat, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(Nat::from(value)),
            Repr::Text(text) => text
                .parse::<Nat>()
                .map_err(|_| de::Error::custom(format!("invalid nat: {text}"))),
        }
    }

    /// Same format for optional fields; `None` is `null`.
    pub mod option {
        use candid::Nat;
        use serde::{Deserialize, Deserializer, Serializer};

        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "crate::domain::ledger::nat_json")] Nat);

        pub fn serialize<S: Serializer>(
            nat: &Option<Nat>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match nat {
                Some(nat) => super::serialize(nat, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Nat>, D::Error> {
            Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(nat)| nat))
        }
    }
}

// ============================================================================
// Approve Request
// ============================================================================

/// ICRC-1 account: an owner principal plus an optional 32-byte subaccount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Owning principal.
    pub owner: CanisterId,
    /// Optional subaccount.
    pub subaccount: Option<Vec<u8>>,
}

impl Account {
    /// Default account of `owner`.
    #[must_use]
    pub fn of(owner: CanisterId) -> Self {
        Self {
            owner,
            subaccount: None,
        }
    }
}

/// Arguments of `icrc2_approve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveArgs {
    /// Fee override; `None` lets the ledger charge its default fee.
    #[serde(default, with = "nat_json::option")]
    pub fee: Option<Nat>,
    /// Memo attached to the approval.
    pub memo: Option<Vec<u8>>,
    /// Subaccount of the caller granting the allowance.
    pub from_subaccount: Option<Vec<u8>>,
    /// Deduplication timestamp in nanoseconds.
    pub created_at_time: Option<u64>,
    /// Allowance in e8s.
    #[serde(with = "nat_json")]
    pub amount: Nat,
    /// Compare-and-set guard on the current allowance.
    #[serde(default, with = "nat_json::option")]
    pub expected_allowance: Option<Nat>,
    /// Expiry of the allowance in nanoseconds.
    pub expires_at: Option<u64>,
    /// Account allowed to spend.
    pub spender: Account,
}

impl ApproveArgs {
    /// Plain approval of `amount_e8s` for the default account of `spender`,
    /// with every optional field left to the ledger.
    #[must_use]
    pub fn for_spender(spender: CanisterId, amount_e8s: u64) -> Self {
        Self {
            fee: None,
            memo: None,
            from_subaccount: None,
            created_at_time: None,
            amount: Nat::from(amount_e8s),
            expected_allowance: None,
            expires_at: None,
            spender: Account::of(spender),
        }
    }
}

// ============================================================================
// Approve Response
// ============================================================================

/// Error variants of `icrc2_approve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApproveError {
    /// The fee given does not match the ledger fee.
    BadFee {
        /// Fee the ledger expects.
        #[serde(with = "nat_json")]
        expected_fee: Nat,
    },
    /// The caller cannot pay the approval fee.
    InsufficientFunds {
        /// Current balance of the caller, in e8s.
        #[serde(with = "nat_json")]
        balance: Nat,
    },
    /// `expected_allowance` did not match.
    AllowanceChanged {
        /// Allowance the ledger currently holds.
        #[serde(with = "nat_json")]
        current_allowance: Nat,
    },
    /// `expires_at` is in the past.
    Expired {
        /// Ledger time.
        ledger_time: u64,
    },
    /// `created_at_time` is too far in the past.
    TooOld,
    /// `created_at_time` is in the future.
    CreatedInFuture {
        /// Ledger time.
        ledger_time: u64,
    },
    /// Same request was already processed.
    Duplicate {
        /// Block index of the original.
        #[serde(with = "nat_json")]
        duplicate_of: Nat,
    },
    /// Ledger cannot process requests right now.
    TemporarilyUnavailable,
    /// Any other ledger error.
    GenericError {
        /// Ledger-specific code.
        #[serde(with = "nat_json")]
        error_code: Nat,
        /// Human readable message.
        message: String,
    },
}

impl fmt::Display for ApproveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadFee { expected_fee } => {
                write!(f, "bad fee, expected {}", nat_json::digits(expected_fee))
            }
            Self::InsufficientFunds { balance } => {
                write!(f, "insufficient funds ({})", nat_json::digits(balance))
            }
            Self::AllowanceChanged { current_allowance } => {
                write!(f, "allowance changed to {}", nat_json::digits(current_allowance))
            }
            Self::Expired { ledger_time } => write!(f, "approval expired at {ledger_time}"),
            Self::TooOld => f.write_str("request too old"),
            Self::CreatedInFuture { ledger_time } => {
                write!(f, "request created in the future (ledger time {ledger_time})")
            }
            Self::Duplicate { duplicate_of } => {
                write!(f, "duplicate of block {}", nat_json::digits(duplicate_of))
            }
            Self::TemporarilyUnavailable => f.write_str("ledger temporarily unavailable"),
            Self::GenericError {
                error_code,
                message,
            } => write!(f, "ledger error {}: {message}", nat_json::digits(error_code)),
        }
    }
}

/// Reply of `icrc2_approve`: the approval block index or a ledger error.
pub type ApproveResult = Result<Nat, ApproveError>;

/// Wire form of an [`ApproveResult`] as the bridge sends it.
#[derive(Debug, Deserialize)]
pub enum ApproveReply {
    Ok(#[serde(with = "nat_json")] Nat),
    Err(ApproveError),
}

impl From<ApproveReply> for ApproveResult {
    fn from(reply: ApproveReply) -> Self {
        match reply {
            ApproveReply::Ok(block) => Ok(block),
            ApproveReply::Err(e) => Err(e),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
