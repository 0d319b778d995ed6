//! Application constants for the galaxy-swap TUI.
//!
//! Flow limits, ledger arithmetic, well-known canister ids, links and UI
//! timings live here so the flow, the config defaults and the renderer agree
//! on a single set of numbers.

use std::time::Duration;

// ============================================================================
// Ledger Arithmetic
// ============================================================================

/// Number of e8s (smallest ledger subdivision) in one ICP.
pub const SUBDIVISIONS_PER_ICP: u64 = 100_000_000;

/// Extra allowance added on top of the spend so the ledger transfer fee of
/// the later `transfer_from` is covered.
pub const APPROVAL_FEE_BUFFER_E8S: u64 = 10_000;

// ============================================================================
// Spend Limits
// ============================================================================

/// Smallest investment accepted by the approve screen, in whole ICP.
pub const MIN_SPEND_ICP: u64 = 10;

/// Largest investment accepted by the approve screen, in whole ICP.
pub const MAX_SPEND_ICP: u64 = 250;

/// Amount preselected on the approve screen.
pub const DEFAULT_SPEND_ICP: u64 = 100;

/// Step used by PageUp/PageDown on the amount input.
pub const SPEND_PAGE_STEP: u64 = 10;

/// Longest amount the input accepts while typing (digits).
pub const MAX_AMOUNT_DIGITS: usize = 6;

/// Referral code used when none is given.
pub const DEFAULT_INVITE_CODE: &str = "GALAXY";

/// Longest invite code the editor accepts.
pub const MAX_INVITE_CODE_LEN: usize = 32;

// ============================================================================
// Canisters and Token
// ============================================================================

/// NNS ICP ledger canister on mainnet.
pub const NNS_LEDGER_CANISTER_ID: &str = "ryjl3-tyaaa-aaaaa-aaaba-cai";

/// Token canister the swap pays out from.
pub const TOKEN_CANISTER_ID: &str = "wexwn-tyaaa-aaaap-ag72a-cai";

/// Symbol registered in the wallet by the import-token action.
pub const TOKEN_SYMBOL: &str = "WBR23";

/// Token standard registered in the wallet by the import-token action.
pub const TOKEN_STANDARD: &str = "ICRC-1";

/// Logo registered in the wallet by the import-token action.
pub const TOKEN_LOGO_URL: &str = "https://cryptologos.cc/logos/aptos-apt-logo.png";

// ============================================================================
// Wallet Bridge
// ============================================================================

/// Default address of the local wallet bridge.
pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:7590";

/// Default HTTP timeout for bridge calls; a swap takes one to two minutes.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

// ============================================================================
// Links
// ============================================================================

/// Where users get the wallet when it is missing.
pub const WALLET_DOWNLOAD_URL: &str = "https://plugwallet.ooo/";

/// Terms and conditions of the early investor round.
pub const TERMS_URL: &str =
    "https://caligian.notion.site/Galaxy-do-Early-Investors-3e76576a4d254783a5e57f0a39cc8572?pvs=4";

// ============================================================================
// UI Timing and Dimensions
// ============================================================================

/// Main loop tick.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Toast lifetime for success notices, in ticks.
pub const TOAST_TICKS_SHORT: u8 = 20;

/// Toast lifetime for failure notices, in ticks.
pub const TOAST_TICKS_LONG: u8 = 40;

/// Narrowest terminal the flow is rendered in.
pub const MIN_TERMINAL_WIDTH: u16 = 60;

/// Height of the header bar.
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the centered flow card.
pub const CARD_WIDTH: u16 = 64;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_limits_are_ordered() {
        assert!(MIN_SPEND_ICP < DEFAULT_SPEND_ICP);
        assert!(DEFAULT_SPEND_ICP < MAX_SPEND_ICP);
    }

    #[test]
    fn test_largest_approval_fits_u64() {
        let largest = MAX_SPEND_ICP
            .checked_mul(SUBDIVISIONS_PER_ICP)
            .and_then(|e8s| e8s.checked_add(APPROVAL_FEE_BUFFER_E8S));
        assert_eq!(largest, Some(25_000_010_000));
    }
}
