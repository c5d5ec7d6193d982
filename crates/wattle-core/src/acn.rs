//! # Australian Company Number (ACN)
//!
//! A 9-digit identifier whose last digit is an explicit check digit derived
//! from the first 8 via a modulus-10 complement:
//!
//! ```text
//! remainder  = Σ (digit[0..8] × weight) mod 10      weights 8,7,6,5,4,3,2,1
//! complement = 10 - remainder                       (10 folds to 0)
//! valid ⇔ digit[8] == complement
//! ```
//!
//! Validation is structural and arithmetic only; ASIC registration status is
//! out of scope.

use serde::Serialize;
use ts_rs::TS;

use crate::checksum::{self, CheckMode};
use crate::error::ValidationResult;
use crate::identifier::{impl_identifier, IdentifierKind};
use crate::normalize;

/// Weight vector from ASIC's published ACN check-digit specification,
/// applied to the first 8 digits only.
const WEIGHTS: [i64; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

const MODULUS: i64 = 10;

// =============================================================================
// ACN Value Object
// =============================================================================

/// A check-digit-valid Australian Company Number.
///
/// Wraps the canonical 9-digit string; immutable and value-equal like every
/// identifier in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Acn(String);

impl Acn {
    /// Validates a raw ACN string.
    ///
    /// Accepts `-` and space as separators.
    ///
    /// ## Example
    /// ```rust
    /// use wattle_core::Acn;
    ///
    /// let acn = Acn::parse("000 000 019").unwrap();
    /// assert_eq!(acn.as_canonical(), "000000019");
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let canonical =
            normalize::normalize(IdentifierKind::Acn, raw, normalize::STANDARD_SEPARATORS)?;

        let values = normalize::digit_values(&canonical);
        checksum::verify(
            IdentifierKind::Acn,
            &values,
            &WEIGHTS,
            CheckMode::CheckDigit { modulus: MODULUS },
        )?;

        Ok(Acn(canonical))
    }

    /// Wraps an already-canonical, already-valid ACN without re-validating.
    pub fn from_trusted<S: Into<String>>(canonical: S) -> Self {
        Acn(canonical.into())
    }

    /// The canonical 9-digit string.
    #[inline]
    pub fn as_canonical(&self) -> &str {
        &self.0
    }

    /// The conventional display form: `"xxx xxx xxx"`.
    pub fn standard_format(&self) -> String {
        format!("{} {} {}", &self.0[..3], &self.0[3..6], &self.0[6..])
    }

    /// Fixed checksum-valid instance for tests and example data.
    pub fn fixture() -> Self {
        Acn::from_trusted("000000019")
    }
}

impl_identifier!(Acn, IdentifierKind::Acn, 9);

// =============================================================================
// Unit Tests
// =============================================================================
