//! # Bank State Branch (BSB)
//!
//! A 6-digit bank routing code. BSBs carry no checksum - validity is purely
//! the shared normalization step (six digits, optionally `-` or space
//! delimited). There is no conventional display grouping either; the
//! canonical form is the display form, and any grouping is a caller concern.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::identifier::{impl_identifier, IdentifierKind};
use crate::normalize;

/// A structurally valid Bank State Branch code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Bsb(String);

impl Bsb {
    /// Validates a raw BSB string. Accepts `-` and space as separators.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let canonical =
            normalize::normalize(IdentifierKind::Bsb, raw, normalize::STANDARD_SEPARATORS)?;
        Ok(Bsb(canonical))
    }

    /// Wraps an already-canonical BSB without re-validating.
    pub fn from_trusted<S: Into<String>>(canonical: S) -> Self {
        Bsb(canonical.into())
    }

    /// The canonical 6-digit string.
    #[inline]
    pub fn as_canonical(&self) -> &str {
        &self.0
    }

    /// Fixed instance for tests and example data.
    pub fn fixture() -> Self {
        Bsb::from_trusted("123456")
    }
}

impl_identifier!(Bsb, IdentifierKind::Bsb, 6);

// =============================================================================
// Unit Tests
// =============================================================================
