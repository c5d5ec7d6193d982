//! # Australian Business Number (ABN)
//!
//! An 11-digit identifier with a modulus-89 weighted checksum. The published
//! algorithm is unusual in one respect: the leading digit is decremented by
//! one before weighting.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ABN checksum: "51 824 753 556"                                     │
//! │                                                                     │
//! │  digits   5  1  8  2  4  7  5  3  5  5  6                          │
//! │  bias    -1  .  .  .  .  .  .  .  .  .  .   (leading digit only)   │
//! │  weights 10  1  3  5  7  9 11 13 15 17 19                          │
//! │                                                                     │
//! │  valid ⇔ Σ (digit × weight) ≡ 0 (mod 89)                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation is structural and arithmetic only; whether the ABN is
//! registered or active with the ABR is out of scope.

use serde::Serialize;
use ts_rs::TS;

use crate::checksum::{self, CheckMode};
use crate::error::ValidationResult;
use crate::identifier::{impl_identifier, IdentifierKind};
use crate::normalize;

/// Weight vector from the ATO's published ABN checksum specification.
const WEIGHTS: [i64; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

const MODULUS: i64 = 89;

// =============================================================================
// ABN Value Object
// =============================================================================

/// A checksum-valid Australian Business Number.
///
/// Wraps the canonical 11-digit string. Construction goes through
/// [`Abn::parse`] (validated) or [`Abn::from_trusted`] (caller-asserted);
/// there is no way to mutate the value afterwards. Two `Abn`s are equal iff
/// their canonical digit strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Abn(String);

impl Abn {
    /// Validates a raw ABN string.
    ///
    /// Accepts `-` and space as separators, e.g. `"51 824 753 556"` and
    /// `"51-824-753-556"` both normalize to `"51824753556"`.
    ///
    /// ## Example
    /// ```rust
    /// use wattle_core::Abn;
    ///
    /// let abn = Abn::parse("51 824 753 556").unwrap();
    /// assert_eq!(abn.as_canonical(), "51824753556");
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let canonical =
            normalize::normalize(IdentifierKind::Abn, raw, normalize::STANDARD_SEPARATORS)?;

        let mut values = normalize::digit_values(&canonical);
        // The published algorithm subtracts 1 from the leading digit before
        // weighting. A leading 0 biases to -1; i64 values carry that fine.
        if let Some(first) = values.first_mut() {
            *first -= 1;
        }

        checksum::verify(
            IdentifierKind::Abn,
            &values,
            &WEIGHTS,
            CheckMode::DivisibleSum {
                modulus: MODULUS,
                reject_zero: false,
            },
        )?;

        Ok(Abn(canonical))
    }

    /// Wraps an already-canonical, already-valid ABN without re-validating.
    ///
    /// For hydrating this library's own prior output and for fixtures.
    /// Misuse is a caller contract violation, not a checked error.
    pub fn from_trusted<S: Into<String>>(canonical: S) -> Self {
        Abn(canonical.into())
    }

    /// The canonical 11-digit string.
    #[inline]
    pub fn as_canonical(&self) -> &str {
        &self.0
    }

    /// The conventional display form: `"xx xxx xxx xxx"`.
    ///
    /// Display only - never use this for storage or comparison.
    pub fn standard_format(&self) -> String {
        format!(
            "{} {} {} {}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..]
        )
    }

    /// Fixed checksum-valid instance for tests and example data.
    pub fn fixture() -> Self {
        Abn::from_trusted("76861743447")
    }
}

impl_identifier!(Abn, IdentifierKind::Abn, 11);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_accepts_valid_abns() {
        for raw in [
            "51 824 753 556",
            "51-824-753-556",
            " 11 223 491 505 ",
            "91 834 387 136",
            " 78 247 283 315",
            "76861743447",
        ] {
            assert!(Abn::parse(raw).is_ok(), "expected valid: {raw:?}");
        }
    }

    #[test]
    fn test_separator_insensitivity() {
        let spaced = Abn::parse("51 824 753 556").unwrap();
        let dashed = Abn::parse("51-824-753-556").unwrap();
        let bare = Abn::parse("51824753556").unwrap();
        assert_eq!(spaced, dashed);
        assert_eq!(spaced, bare);
        assert_eq!(spaced.as_canonical(), "51824753556");
    }

    #[test]
    fn test_rejects_bad_checksum() {
        assert_eq!(
            Abn::parse("12345678912").unwrap_err(),
            ValidationError::ChecksumMismatch {
                kind: IdentifierKind::Abn
            }
        );
        // One transcription error away from a valid ABN.
        assert!(Abn::parse("11834387136").is_err());
    }

    #[test]
    fn test_rejects_degenerate_digit_strings() {
        assert!(Abn::parse("00000000000").is_err());
        assert!(Abn::parse("99999999999").is_err());
    }

    #[test]
    fn test_rejects_non_digit_input() {
        assert!(Abn::parse("Hello world").is_err());
        assert!(Abn::parse("c26177aa-5b00-4808-b81a-34057bfc189e").is_err());
        // Prose around an otherwise valid ABN is not stripped.
        assert!(Abn::parse("My ABN is 91 834 387 136").is_err());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Abn::parse("5182475355").unwrap_err(),
            ValidationError::WrongLength {
                kind: IdentifierKind::Abn,
                expected: 11,
                actual: 10
            }
        );
    }

    #[test]
    fn test_standard_format() {
        let abn = Abn::parse("51-824-753-556").unwrap();
        assert_eq!(abn.standard_format(), "51 824 753 556");
    }

    #[test]
    fn test_round_trip_through_canonical() {
        let abn = Abn::parse("51 824 753 556").unwrap();
        assert_eq!(Abn::parse(abn.as_canonical()).unwrap(), abn);
    }

    #[test]
    fn test_fixture_is_checksum_valid() {
        let fixture = Abn::fixture();
        assert_eq!(Abn::parse(fixture.as_canonical()).unwrap(), fixture);
    }

    #[test]
    fn test_display_and_from_str() {
        let abn: Abn = "51 824 753 556".parse().unwrap();
        assert_eq!(abn.to_string(), "51824753556");
        assert!("12345678912".parse::<Abn>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let abn = Abn::parse("51 824 753 556").unwrap();
        let json = serde_json::to_string(&abn).unwrap();
        assert_eq!(json, "\"51824753556\"");
        let back: Abn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, abn);
    }

    #[test]
    fn test_deserialize_validates() {
        // Separator-laden input normalizes on the way in.
        let abn: Abn = serde_json::from_str("\"51 824 753 556\"").unwrap();
        assert_eq!(abn.as_canonical(), "51824753556");
        // Checksum failures are rejected at deserialization time.
        assert!(serde_json::from_str::<Abn>("\"12345678912\"").is_err());
        // Non-string input fails with serde's own type error.
        assert!(serde_json::from_str::<Abn>("51824753556").is_err());
    }
}
