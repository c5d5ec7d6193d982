//! # Digit Normalizer
//!
//! The tokenization step shared by every identifier family: trim the input,
//! drop the family's allowed separators, reject anything that is not a
//! decimal digit, and enforce the exact canonical digit count.
//!
//! The normalizer is pure and total given its inputs - no hidden state, no
//! locale awareness, bounded by input length. Its output is the canonical
//! digit string that the checksum validators and value objects build on.

use crate::error::{ValidationError, ValidationResult};
use crate::identifier::IdentifierKind;

/// Separators stripped from ABN, ACN, and BSB input: `"51 824 753 556"` and
/// `"51-824-753-556"` normalize identically.
pub(crate) const STANDARD_SEPARATORS: &[char] = &['-', ' '];

/// TFN input additionally tolerates `.` and newline - TFNs are commonly
/// copy-pasted out of documents with stray formatting.
pub(crate) const TFN_SEPARATORS: &[char] = &['-', ' ', '.', '\n'];

/// Strips `separators` from `raw` and returns the canonical digit string.
///
/// The expected digit count comes from `kind`. Character order is preserved;
/// only separator characters are dropped. Fails with `NonDigitCharacter` on
/// the first non-separator, non-digit character, or `WrongLength` if the
/// retained digit count is off.
pub(crate) fn normalize(
    kind: IdentifierKind,
    raw: &str,
    separators: &[char],
) -> ValidationResult<String> {
    let expected = kind.expected_len();
    let mut digits = String::with_capacity(expected);

    for ch in raw.trim().chars() {
        if separators.contains(&ch) {
            continue;
        }
        if !ch.is_ascii_digit() {
            return Err(ValidationError::NonDigitCharacter { kind, found: ch });
        }
        digits.push(ch);
    }

    if digits.len() != expected {
        return Err(ValidationError::WrongLength {
            kind,
            expected,
            actual: digits.len(),
        });
    }

    Ok(digits)
}

/// Converts a canonical digit string to its numeric digit values.
///
/// Only called on normalizer output, so every byte is an ASCII digit.
/// Values are `i64` because the ABN scheme biases the leading digit below
/// zero before weighting.
pub(crate) fn digit_values(canonical: &str) -> Vec<i64> {
    canonical.bytes().map(|b| i64::from(b - b'0')).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
