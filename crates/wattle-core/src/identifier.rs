//! # Identifier Contract
//!
//! The shared value-object contract every Australian identifier type
//! implements, plus the [`IdentifierKind`] tag used in error reporting.
//!
//! ## The Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Identifier Lifecycle                            │
//! │                                                                     │
//! │  raw string ──► parse() ──► normalize ──► checksum ──► wrapped     │
//! │                    │                                      │         │
//! │                    └── ValidationError                    │         │
//! │                                                           ▼         │
//! │  canonical string ──► from_trusted() ───────────────► wrapped      │
//! │  (known-good data)     (no re-validation)                           │
//! │                                                                     │
//! │  Once wrapped: immutable. Equality = canonical string equality.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every concrete type wires itself up through the crate-private
//! `impl_identifier!` macro, which
//! generates the trait impl plus `Display`, `FromStr`, `AsRef<str>`, and a
//! validating `Deserialize` (deserializes as a plain `String`, then routes
//! through `parse` so invalid values are rejected at deserialization time,
//! not silently accepted).

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Identifier Kind
// =============================================================================

/// Which identifier family a value (or a validation failure) belongs to.
///
/// Carried inside every [`ValidationError`] so a caller validating a batch of
/// mixed identifiers can tell which rule fired without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum IdentifierKind {
    /// Australian Business Number, 11 digits, modulus-89 weighted checksum.
    Abn,
    /// Australian Company Number, 9 digits, explicit check digit.
    Acn,
    /// Bank State Branch code, 6 digits, no checksum.
    Bsb,
    /// Personal Tax File Number, 9 digits, modulus-11 weighted checksum.
    IndividualTfn,
    /// Business Tax File Number, 8 digits, modulus-11 weighted checksum.
    BusinessTfn,
}

impl IdentifierKind {
    /// The fixed canonical digit count for this identifier family.
    #[inline]
    pub const fn expected_len(&self) -> usize {
        match self {
            IdentifierKind::Abn => 11,
            IdentifierKind::Acn => 9,
            IdentifierKind::Bsb => 6,
            IdentifierKind::IndividualTfn => 9,
            IdentifierKind::BusinessTfn => 8,
        }
    }

    /// Human-readable name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Abn => "ABN",
            IdentifierKind::Acn => "ACN",
            IdentifierKind::Bsb => "BSB",
            IdentifierKind::IndividualTfn => "individual TFN",
            IdentifierKind::BusinessTfn => "business TFN",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Identifier Trait
// =============================================================================

/// The capability set shared by every identifier value object.
///
/// Implemented by [`Abn`](crate::Abn), [`Acn`](crate::Acn),
/// [`Bsb`](crate::Bsb), [`IndividualTfn`](crate::IndividualTfn), and
/// [`BusinessTfn`](crate::BusinessTfn). [`AnyTfn`](crate::AnyTfn) is the one
/// exception: it spans two digit lengths, so it exposes the same methods
/// inherently without the `LEN` constant.
pub trait Identifier: Sized {
    /// The identifier family this type validates.
    const KIND: IdentifierKind;

    /// The fixed canonical digit count.
    const LEN: usize;

    /// Validates a raw string and wraps the canonical digits.
    ///
    /// Runs the digit normalizer, then the family's checksum. Normalization
    /// errors take precedence: the checksum never sees malformed input.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// Wraps an already-canonical, already-valid digit string without
    /// re-running normalization or the checksum.
    ///
    /// For hydrating this library's own prior output (database columns,
    /// wire payloads) and for test fixtures. Passing anything else is a
    /// contract violation on the caller's side, not a checked error.
    fn from_trusted<S: Into<String>>(canonical: S) -> Self;

    /// The canonical digit-only string: stable, separator-free, and the
    /// only representation suitable for storage, transport, or equality.
    fn as_canonical(&self) -> &str;

    /// A fixed, checksum-valid instance for tests and example data.
    ///
    /// Deterministic, never randomized: repeated test runs and generated
    /// documentation stay reproducible.
    fn fixture() -> Self;
}

// =============================================================================
// Implementation Macro
// =============================================================================

/// Generates the [`Identifier`] impl and the standard conversions for a
/// digit-string newtype: `Display` (canonical form), `FromStr` (delegates to
/// `parse`), `AsRef<str>`, and a validating `Deserialize`.
///
/// The newtype's inherent `parse`, `from_trusted`, and `fixture` must already
/// exist; the macro only wires them into the shared surface.
macro_rules! impl_identifier {
    ($ty:ident, $kind:expr, $len:expr) => {
        impl $crate::identifier::Identifier for $ty {
            const KIND: $crate::identifier::IdentifierKind = $kind;
            const LEN: usize = $len;

            fn parse(raw: &str) -> Result<Self, $crate::error::ValidationError> {
                $ty::parse(raw)
            }

            fn from_trusted<S: Into<String>>(canonical: S) -> Self {
                $ty::from_trusted(canonical)
            }

            fn as_canonical(&self) -> &str {
                &self.0
            }

            fn fixture() -> Self {
                $ty::fixture()
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::parse(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw: String = ::serde::Deserialize::deserialize(deserializer)?;
                $ty::parse(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_identifier;

// =============================================================================
// Unit Tests
// =============================================================================
