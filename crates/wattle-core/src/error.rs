//! # Error Types
//!
//! The validation error taxonomy for wattle-core, ordered by where each
//! failure is detected:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Validation Pipeline                             │
//! │                                                                     │
//! │  raw string                                                         │
//! │      │  trim + strip separators                                     │
//! │      ├── NonDigitCharacter   (a remaining char is not 0-9)          │
//! │      │                                                              │
//! │      │  count retained digits                                       │
//! │      ├── WrongLength         (digit count != family's fixed length) │
//! │      │                                                              │
//! │      │  weighted checksum                                           │
//! │      ├── ChecksumMismatch    (shape right, arithmetic wrong)        │
//! │      ▼                                                              │
//! │  canonical value object                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Non-string input has no variant here: the `parse` API takes `&str`, and
//! the serde path deserializes through `String`, so a non-text value is
//! rejected by serde's own invalid-type error before normalization runs.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant carries the [`IdentifierKind`] that rejected the input
//! 3. Errors are enum variants, never String
//! 4. All variants are recoverable, caller-visible outcomes - never panics

use thiserror::Error;

use crate::identifier::IdentifierKind;

// =============================================================================
// Validation Error
// =============================================================================

/// A structural or arithmetic validation failure.
///
/// Returned by every `parse` entry point. The library never retries,
/// silently corrects, or treats any of these as fatal; the caller decides
/// whether an invalid identifier is a user input error or a data integrity
/// problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// After stripping the family's allowed separators, a remaining
    /// character is not a decimal digit.
    #[error("{kind} contains a non-digit character: {found:?}")]
    NonDigitCharacter { kind: IdentifierKind, found: char },

    /// The digit count after separator stripping does not match the
    /// family's fixed length.
    #[error("{kind} must be exactly {expected} digits, got {actual}")]
    WrongLength {
        kind: IdentifierKind,
        expected: usize,
        actual: usize,
    },

    /// The digits have the right shape but fail the family's weighted
    /// checksum or check-digit test.
    #[error("{kind} checksum does not match")]
    ChecksumMismatch { kind: IdentifierKind },
}

impl ValidationError {
    /// The identifier family that rejected the input.
    pub const fn kind(&self) -> IdentifierKind {
        match self {
            ValidationError::NonDigitCharacter { kind, .. }
            | ValidationError::WrongLength { kind, .. }
            | ValidationError::ChecksumMismatch { kind } => *kind,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::WrongLength {
            kind: IdentifierKind::Abn,
            expected: 11,
            actual: 9,
        };
        assert_eq!(err.to_string(), "ABN must be exactly 11 digits, got 9");

        let err = ValidationError::NonDigitCharacter {
            kind: IdentifierKind::Bsb,
            found: 'x',
        };
        assert_eq!(err.to_string(), "BSB contains a non-digit character: 'x'");

        let err = ValidationError::ChecksumMismatch {
            kind: IdentifierKind::IndividualTfn,
        };
        assert_eq!(err.to_string(), "individual TFN checksum does not match");
    }

    #[test]
    fn test_error_kind_accessor() {
        let err = ValidationError::ChecksumMismatch {
            kind: IdentifierKind::Acn,
        };
        assert_eq!(err.kind(), IdentifierKind::Acn);
    }
}
