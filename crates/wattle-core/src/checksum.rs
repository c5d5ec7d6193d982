//! # Weighted Checksum Engine
//!
//! All four Australian identifier checksum schemes are linear
//! weighted-sum-mod-N tests. They differ only in the weight vector, the
//! modulus, and whether the whole sum must divide evenly or a trailing check
//! digit is compared explicitly:
//!
//! ```text
//! ┌──────────────┬──────────────────────────┬─────────┬──────────────────┐
//! │ Family       │ Weights                  │ Modulus │ Mode             │
//! ├──────────────┼──────────────────────────┼─────────┼──────────────────┤
//! │ ABN          │ 10,1,3,5,7,9,11,..,19    │ 89      │ divisible sum    │
//! │ ACN          │ 8,7,6,5,4,3,2,1          │ 10      │ check digit      │
//! │ TFN (indiv.) │ 1,4,3,7,5,8,6,9,10       │ 11      │ divisible, sum>0 │
//! │ TFN (bus.)   │ 10,7,8,4,6,3,5,1,0       │ 11      │ divisible, sum>0 │
//! └──────────────┴──────────────────────────┴─────────┴──────────────────┘
//! ```
//!
//! This module is the single parameterized routine behind that table; each
//! family keeps its weight vector as a named constant in its own module for
//! auditability against the published government specifications.

use crate::error::{ValidationError, ValidationResult};
use crate::identifier::IdentifierKind;

// =============================================================================
// Check Mode
// =============================================================================

/// How the weighted sum is turned into a pass/fail decision.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CheckMode {
    /// The weighted sum over all digit values must be divisible by
    /// `modulus`. With `reject_zero`, a sum of exactly zero fails too
    /// (the TFN schemes treat the all-zero string as invalid).
    DivisibleSum { modulus: i64, reject_zero: bool },

    /// The final digit is an explicit check digit: the weighted sum is
    /// taken over the preceding digits, and the check digit must equal
    /// `modulus - (sum % modulus)`, with a complement of `modulus`
    /// folding to zero.
    CheckDigit { modulus: i64 },
}

// =============================================================================
// Verification
// =============================================================================

/// Verifies `values` against a weight vector under the given mode.
///
/// `values` are digit values from the normalizer, possibly biased by the
/// caller (the ABN scheme decrements the leading digit first). A weight
/// vector longer than `values` is allowed; surplus weights multiply digits
/// that do not exist and contribute nothing.
pub(crate) fn verify(
    kind: IdentifierKind,
    values: &[i64],
    weights: &[i64],
    mode: CheckMode,
) -> ValidationResult<()> {
    let pass = match mode {
        CheckMode::DivisibleSum {
            modulus,
            reject_zero,
        } => {
            let sum = weighted_sum(values, weights);
            (!reject_zero || sum != 0) && sum % modulus == 0
        }
        CheckMode::CheckDigit { modulus } => match values.split_last() {
            Some((&check, body)) => {
                let remainder = weighted_sum(body, weights) % modulus;
                let complement = modulus - remainder;
                let check_digit = if complement == modulus { 0 } else { complement };
                check == check_digit
            }
            None => false,
        },
    };

    if pass {
        Ok(())
    } else {
        Err(ValidationError::ChecksumMismatch { kind })
    }
}

/// Sum of `value[i] * weight[i]` over the shorter of the two slices.
#[inline]
fn weighted_sum(values: &[i64], weights: &[i64]) -> i64 {
    values.iter().zip(weights).map(|(v, w)| v * w).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
