//! ICP amounts and the spend-range rules of the swap.
//!
//! The user picks a whole number of ICP. The ledger works in e8s, so every
//! conversion happens here in integer arithmetic.

use std::fmt;

use crate::constants::{
    APPROVAL_FEE_BUFFER_E8S, MAX_SPEND_ICP, MIN_SPEND_ICP, SUBDIVISIONS_PER_ICP,
};
use crate::domain::FlowError;

// ============================================================================
// SpendAmount
// ============================================================================

/// An investment amount in whole ICP that is known to be inside
/// [`MIN_SPEND_ICP`]..=[`MAX_SPEND_ICP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpendAmount(u64);

impl SpendAmount {
    /// Validates a raw amount.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::AmountOutOfRange`] when `icp` is outside the
    /// accepted range.
    pub const fn new(icp: u64) -> Result<Self, FlowError> {
        if icp < MIN_SPEND_ICP || icp > MAX_SPEND_ICP {
            return Err(FlowError::AmountOutOfRange { amount: icp });
        }
        Ok(Self(icp))
    }

    /// Returns `true` if `icp` would be accepted by [`SpendAmount::new`].
    #[must_use]
    pub const fn is_valid(icp: u64) -> bool {
        icp >= MIN_SPEND_ICP && icp <= MAX_SPEND_ICP
    }

    /// Moves `icp` into the accepted range.
    #[must_use]
    pub const fn clamped(icp: u64) -> Self {
        if icp < MIN_SPEND_ICP {
            Self(MIN_SPEND_ICP)
        } else if icp > MAX_SPEND_ICP {
            Self(MAX_SPEND_ICP)
        } else {
            Self(icp)
        }
    }

    /// Amount in whole ICP.
    #[must_use]
    pub const fn icp(self) -> u64 {
        self.0
    }

    /// Amount in e8s, as sent to the swap backend.
    #[must_use]
    pub const fn swap_e8s(self) -> u64 {
        self.0 * SUBDIVISIONS_PER_ICP
    }

    /// Allowance in e8s, as sent to the ledger: the swap amount plus the fee
    /// buffer for the backend's `transfer_from`.
    #[must_use]
    pub const fn approval_e8s(self) -> u64 {
        self.swap_e8s() + APPROVAL_FEE_BUFFER_E8S
    }
}

impl fmt::Display for SpendAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ICP", self.0)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats an e8s amount as ICP with trailing zeros trimmed.
///
/// # Example
///
/// ```ignore
/// assert_eq!(format_e8s(5_000_010_000), "50.0001");
/// ```
#[must_use]
pub fn format_e8s(e8s: u64) -> String {
    let whole = e8s / SUBDIVISIONS_PER_ICP;
    let fraction = e8s % SUBDIVISIONS_PER_ICP;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{fraction:08}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0)]
    #[case::just_below(9)]
    #[case::just_above(251)]
    #[case::huge(u64::MAX)]
    fn test_out_of_range_is_rejected(#[case] icp: u64) {
        assert!(!SpendAmount::is_valid(icp));
        assert_eq!(
            SpendAmount::new(icp),
            Err(FlowError::AmountOutOfRange { amount: icp })
        );
    }

    #[test]
    fn test_every_valid_amount_converts_exactly() {
        for icp in MIN_SPEND_ICP..=MAX_SPEND_ICP {
            let amount = SpendAmount::new(icp).unwrap();
            assert_eq!(amount.swap_e8s(), icp * 100_000_000);
            assert_eq!(amount.approval_e8s(), icp * 100_000_000 + 10_000);
        }
    }

    #[test]
    fn test_fifty_icp_amounts() {
        let amount = SpendAmount::new(50).unwrap();
        assert_eq!(amount.approval_e8s(), 5_000_010_000);
        assert_eq!(amount.swap_e8s(), 5_000_000_000);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(10, 10)]
    #[case(120, 120)]
    #[case(250, 250)]
    #[case(999, 250)]
    fn test_clamped(#[case] raw: u64, #[case] expected: u64) {
        assert_eq!(SpendAmount::clamped(raw).icp(), expected);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(100_000_000, "1")]
    #[case(5_000_010_000, "50.0001")]
    #[case(1, "0.00000001")]
    #[case(123_450_000, "1.2345")]
    fn test_format_e8s(#[case] e8s: u64, #[case] expected: &str) {
        assert_eq!(format_e8s(e8s), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(SpendAmount::new(100).unwrap().to_string(), "100 ICP");
    }
}
