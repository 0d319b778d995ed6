//! Wallet-facing types: session keys, token registration and swap receipts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CanisterId;

/// Public key of the connected wallet session, as reported by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(pub String);

impl PublicKey {
    /// Shortened form for toasts and the header (`abcdef…7890`).
    #[must_use]
    pub fn abbreviated(&self) -> String {
        let key = self.0.as_str();
        let chars = key.chars().count();
        if chars <= 14 {
            return key.to_string();
        }
        let head: String = key.chars().take(6).collect();
        let tail: String = key.chars().skip(chars - 4).collect();
        format!("{head}…{tail}")
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request to register a token in the wallet UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenImport {
    /// Ledger canister of the token.
    pub canister_id: CanisterId,
    /// Ticker symbol.
    pub symbol: String,
    /// Token standard, e.g. `ICRC-1`.
    pub standard: String,
    /// Logo URL.
    pub logo: String,
}

/// Reply of the backend's `swapIcpToToken`.
///
/// The backend's reply type is not part of the contract the frontend relies
/// on, so it is kept as raw JSON for logging.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwapReceipt {
    /// Raw reply as forwarded by the bridge.
    pub reply: serde_json::Value,
}

impl SwapReceipt {
    /// Extracts a failure message when the backend encoded one as
    /// `{"Err": ...}` instead of trapping.
    #[must_use]
    pub fn backend_error(&self) -> Option<String> {
        self.reply.get("Err").map(|err| match err {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_key_abbreviation() {
        let key = PublicKey("302a300506032b6570032100abcdef".to_string());
        assert_eq!(key.abbreviated(), "302a30…cdef");

        let short = PublicKey("abc".to_string());
        assert_eq!(short.abbreviated(), "abc");
    }

    #[test]
    fn test_token_import_uses_camel_case() {
        let import = TokenImport {
            canister_id: "wexwn-tyaaa-aaaap-ag72a-cai".parse().unwrap(),
            symbol: "WBR23".to_string(),
            standard: "ICRC-1".to_string(),
            logo: "https://example.org/logo.png".to_string(),
        };

        let value = serde_json::to_value(&import).unwrap();
        assert_eq!(value["canisterId"], "wexwn-tyaaa-aaaap-ag72a-cai");
        assert_eq!(value["standard"], "ICRC-1");
    }

    #[test]
    fn test_swap_receipt_backend_error() {
        let ok = SwapReceipt {
            reply: json!({ "Ok": 17 }),
        };
        assert!(ok.backend_error().is_none());

        let err = SwapReceipt {
            reply: json!({ "Err": "Swap limit reached" }),
        };
        assert_eq!(err.backend_error().as_deref(), Some("Swap limit reached"));
    }
}
