//! # Tax File Numbers (TFN)
//!
//! Two checksummed variants plus a discriminated union over them:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         TFN Family                                  │
//! │                                                                     │
//! │  IndividualTfn   9 digits   weights 1,4,3,7,5,8,6,9,10             │
//! │  BusinessTfn     8 digits   weights 10,7,8,4,6,3,5,1,(0)           │
//! │                                                                     │
//! │  Both: weighted sum must be nonzero and divisible by 11.           │
//! │                                                                     │
//! │  AnyTfn = IndividualTfn | BusinessTfn                              │
//! │  The variant tag is never stored - it is recomputed from the       │
//! │  canonical digit length (9 ⇒ individual, 8 ⇒ business), so it      │
//! │  cannot drift out of sync with the wrapped value.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! TFN input tolerates `.` and newline on top of the usual `-` and space;
//! TFNs are commonly copy-pasted out of PDFs and letters with stray
//! formatting. Display grouping is a caller concern - only the canonical
//! digit string is produced here.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::checksum::{self, CheckMode};
use crate::error::{ValidationError, ValidationResult};
use crate::identifier::{impl_identifier, IdentifierKind};
use crate::normalize;

/// Weight vector from the ATO's TFN verification algorithm (9-digit form).
const INDIVIDUAL_WEIGHTS: [i64; 9] = [1, 4, 3, 7, 5, 8, 6, 9, 10];

/// Weight vector for the 8-digit business form. The trailing zero keeps the
/// table aligned with the nine-slot individual layout; it multiplies a digit
/// that does not exist and contributes nothing to the sum.
const BUSINESS_WEIGHTS: [i64; 9] = [10, 7, 8, 4, 6, 3, 5, 1, 0];

const MODULUS: i64 = 11;

/// Both variants share the same mod-11 test: sum nonzero, divisible by 11.
fn tfn_checksum(kind: IdentifierKind, canonical: &str, weights: &[i64]) -> ValidationResult<()> {
    let values = normalize::digit_values(canonical);
    checksum::verify(
        kind,
        &values,
        weights,
        CheckMode::DivisibleSum {
            modulus: MODULUS,
            reject_zero: true,
        },
    )
}

// =============================================================================
// Individual TFN
// =============================================================================

/// A checksum-valid 9-digit personal Tax File Number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct IndividualTfn(String);

impl IndividualTfn {
    /// Validates a raw individual TFN string.
    ///
    /// ## Example
    /// ```rust
    /// use wattle_core::IndividualTfn;
    ///
    /// let tfn = IndividualTfn::parse("1124-740-82").unwrap();
    /// assert_eq!(tfn.as_canonical(), "112474082");
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let canonical =
            normalize::normalize(IdentifierKind::IndividualTfn, raw, normalize::TFN_SEPARATORS)?;
        tfn_checksum(IdentifierKind::IndividualTfn, &canonical, &INDIVIDUAL_WEIGHTS)?;
        Ok(IndividualTfn(canonical))
    }

    /// Wraps an already-canonical, already-valid TFN without re-validating.
    pub fn from_trusted<S: Into<String>>(canonical: S) -> Self {
        IndividualTfn(canonical.into())
    }

    /// The canonical 9-digit string.
    #[inline]
    pub fn as_canonical(&self) -> &str {
        &self.0
    }

    /// Fixed checksum-valid instance for tests and example data.
    pub fn fixture() -> Self {
        IndividualTfn::from_trusted("459599230")
    }
}

impl_identifier!(IndividualTfn, IdentifierKind::IndividualTfn, 9);

// =============================================================================
// Business TFN
// =============================================================================

/// A checksum-valid 8-digit business Tax File Number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct BusinessTfn(String);

impl BusinessTfn {
    /// Validates a raw business TFN string.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let canonical =
            normalize::normalize(IdentifierKind::BusinessTfn, raw, normalize::TFN_SEPARATORS)?;
        tfn_checksum(IdentifierKind::BusinessTfn, &canonical, &BUSINESS_WEIGHTS)?;
        Ok(BusinessTfn(canonical))
    }

    /// Wraps an already-canonical, already-valid TFN without re-validating.
    pub fn from_trusted<S: Into<String>>(canonical: S) -> Self {
        BusinessTfn(canonical.into())
    }

    /// The canonical 8-digit string.
    #[inline]
    pub fn as_canonical(&self) -> &str {
        &self.0
    }

    /// Fixed checksum-valid instance for tests and example data.
    pub fn fixture() -> Self {
        BusinessTfn::from_trusted("81854402")
    }
}

impl_identifier!(BusinessTfn, IdentifierKind::BusinessTfn, 8);

// =============================================================================
// AnyTfn Discriminator
// =============================================================================

/// Which TFN variant an [`AnyTfn`] resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TfnKind {
    /// 9-digit personal TFN.
    Individual,
    /// 8-digit business TFN.
    Business,
}

/// A TFN of either variant.
///
/// Wraps the canonical digits of whichever variant matched. There is no
/// stored tag: [`AnyTfn::classify`] recomputes the variant from the digit
/// length, so classification is consistent with the wrapped value by
/// construction. The two variants have different fixed lengths (9 vs 8),
/// which makes the union unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct AnyTfn(String);

impl AnyTfn {
    /// Validates a raw TFN of either variant; the individual interpretation
    /// is tried first and the first success wins.
    ///
    /// When both variants reject, the more specific error surfaces: a
    /// checksum mismatch beats a non-digit report, which beats a length
    /// mismatch. At equal specificity the individual variant's error wins.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let individual_err = match IndividualTfn::parse(raw) {
            Ok(tfn) => return Ok(AnyTfn(tfn.0)),
            Err(err) => err,
        };
        match BusinessTfn::parse(raw) {
            Ok(tfn) => Ok(AnyTfn(tfn.0)),
            Err(business_err) => Err(prefer_specific(individual_err, business_err)),
        }
    }

    /// Wraps an already-canonical, already-valid TFN of either variant.
    pub fn from_trusted<S: Into<String>>(canonical: S) -> Self {
        AnyTfn(canonical.into())
    }

    /// The canonical digit string (9 or 8 digits).
    #[inline]
    pub fn as_canonical(&self) -> &str {
        &self.0
    }

    /// The variant this TFN resolved to, derived from the digit length.
    pub fn classify(&self) -> TfnKind {
        match self.0.len() {
            9 => TfnKind::Individual,
            _ => TfnKind::Business,
        }
    }

    /// Fixed checksum-valid instance for tests and example data.
    pub fn fixture() -> Self {
        AnyTfn::from(IndividualTfn::fixture())
    }
}

impl From<IndividualTfn> for AnyTfn {
    fn from(tfn: IndividualTfn) -> Self {
        AnyTfn(tfn.0)
    }
}

impl From<BusinessTfn> for AnyTfn {
    fn from(tfn: BusinessTfn) -> Self {
        AnyTfn(tfn.0)
    }
}

impl fmt::Display for AnyTfn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AnyTfn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnyTfn::parse(s)
    }
}

impl AsRef<str> for AnyTfn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for AnyTfn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        AnyTfn::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Ranks the two variant errors and returns the more telling one.
fn prefer_specific(individual: ValidationError, business: ValidationError) -> ValidationError {
    fn specificity(err: &ValidationError) -> u8 {
        match err {
            ValidationError::ChecksumMismatch { .. } => 2,
            ValidationError::NonDigitCharacter { .. } => 1,
            ValidationError::WrongLength { .. } => 0,
        }
    }
    if specificity(&business) > specificity(&individual) {
        business
    } else {
        individual
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INDIVIDUAL_CASES: [(&str, &str); 5] = [
        ("\n865414088\n", "865414088"),
        ("459-599-230", "459599230"),
        ("1124-740-82", "112474082"),
        ("565.051.603", "565051603"),
        ("907 974 668", "907974668"),
    ];

    const BUSINESS_CASES: [(&str, &str); 6] = [
        ("81 854 402", "81854402"),
        ("37 118 629", "37118629"),
        ("37 118 660", "37118660"),
        ("38 593 474", "38593474"),
        ("85 655 734", "85655734"),
        ("37 118 655", "37118655"),
    ];

    const SHARED_INVALID: [&str; 5] = [
        "not a number",
        "ooooooooo",
        "123456789",
        "37 118 656",
        "Longform prose is not expected to be valid",
    ];

    #[test]
    fn test_individual_accepts_corpus() {
        for (raw, canonical) in INDIVIDUAL_CASES {
            let tfn = IndividualTfn::parse(raw).unwrap();
            assert_eq!(tfn.as_canonical(), canonical, "input: {raw:?}");
        }
    }

    #[test]
    fn test_business_accepts_corpus() {
        for (raw, canonical) in BUSINESS_CASES {
            let tfn = BusinessTfn::parse(raw).unwrap();
            assert_eq!(tfn.as_canonical(), canonical, "input: {raw:?}");
        }
    }

    #[test]
    fn test_variants_reject_each_other() {
        // Wrong length in both directions.
        for (raw, _) in BUSINESS_CASES {
            assert!(IndividualTfn::parse(raw).is_err(), "input: {raw:?}");
        }
        for (raw, _) in INDIVIDUAL_CASES {
            assert!(BusinessTfn::parse(raw).is_err(), "input: {raw:?}");
        }
    }

    #[test]
    fn test_shared_invalid_cases_fail_everywhere() {
        for raw in SHARED_INVALID {
            assert!(IndividualTfn::parse(raw).is_err(), "input: {raw:?}");
            assert!(BusinessTfn::parse(raw).is_err(), "input: {raw:?}");
            assert!(AnyTfn::parse(raw).is_err(), "input: {raw:?}");
        }
    }

    #[test]
    fn test_rejects_all_zero_strings() {
        // The weighted sum of an all-zero string is zero; the scheme
        // requires a nonzero sum.
        assert!(IndividualTfn::parse("000000000").is_err());
        assert!(BusinessTfn::parse("00000000").is_err());
    }

    #[test]
    fn test_any_tfn_classifies_by_length() {
        let individual = AnyTfn::parse("459599230").unwrap();
        assert_eq!(individual.classify(), TfnKind::Individual);
        assert_eq!(individual.as_canonical(), "459599230");

        let business = AnyTfn::parse("81854402").unwrap();
        assert_eq!(business.classify(), TfnKind::Business);
        assert_eq!(business.as_canonical(), "81854402");
    }

    #[test]
    fn test_any_tfn_accepts_both_corpuses() {
        for (raw, canonical) in INDIVIDUAL_CASES {
            assert_eq!(AnyTfn::parse(raw).unwrap().as_canonical(), canonical);
        }
        for (raw, canonical) in BUSINESS_CASES {
            assert_eq!(AnyTfn::parse(raw).unwrap().as_canonical(), canonical);
        }
    }

    #[test]
    fn test_any_tfn_prefers_the_specific_error() {
        // 9 digits, bad checksum: the individual mismatch beats the
        // business length complaint.
        assert_eq!(
            AnyTfn::parse("123456789").unwrap_err(),
            ValidationError::ChecksumMismatch {
                kind: IdentifierKind::IndividualTfn
            }
        );
        // 8 digits, bad checksum: the business mismatch beats the
        // individual length complaint.
        assert_eq!(
            AnyTfn::parse("37 118 656").unwrap_err(),
            ValidationError::ChecksumMismatch {
                kind: IdentifierKind::BusinessTfn
            }
        );
        // Not digits at all: both variants agree, individual's report wins.
        assert_eq!(
            AnyTfn::parse("not a number").unwrap_err(),
            ValidationError::NonDigitCharacter {
                kind: IdentifierKind::IndividualTfn,
                found: 'n'
            }
        );
    }

    #[test]
    fn test_conversions_into_any_tfn() {
        let individual = IndividualTfn::fixture();
        let any: AnyTfn = individual.clone().into();
        assert_eq!(any.as_canonical(), individual.as_canonical());
        assert_eq!(any.classify(), TfnKind::Individual);

        let business = BusinessTfn::fixture();
        let any: AnyTfn = business.into();
        assert_eq!(any.classify(), TfnKind::Business);
    }

    #[test]
    fn test_fixtures_are_checksum_valid() {
        let individual = IndividualTfn::fixture();
        assert_eq!(
            IndividualTfn::parse(individual.as_canonical()).unwrap(),
            individual
        );

        let business = BusinessTfn::fixture();
        assert_eq!(
            BusinessTfn::parse(business.as_canonical()).unwrap(),
            business
        );

        assert_eq!(AnyTfn::fixture().classify(), TfnKind::Individual);
    }

    #[test]
    fn test_serde_round_trip() {
        let tfn = IndividualTfn::parse("565.051.603").unwrap();
        let json = serde_json::to_string(&tfn).unwrap();
        assert_eq!(json, "\"565051603\"");
        assert_eq!(serde_json::from_str::<IndividualTfn>(&json).unwrap(), tfn);

        let any: AnyTfn = serde_json::from_str("\"81 854 402\"").unwrap();
        assert_eq!(any.classify(), TfnKind::Business);
        assert_eq!(serde_json::to_string(&any).unwrap(), "\"81854402\"");

        assert!(serde_json::from_str::<AnyTfn>("\"37 118 656\"").is_err());
    }
}
