//! # wattle-core: Pure Validation Logic for Australian Identifiers
//!
//! This crate is the **heart** of Wattle. It validates, normalizes, and
//! canonically formats Australian identifier strings - ABN, ACN, BSB, and
//! both TFN variants - as pure functions with zero I/O dependencies, and
//! wraps the results in immutable, value-equal objects.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Wattle Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │          Callers (CLI, services, TS frontend via ts-rs)       │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ wattle-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  raw string ──► normalize ──► checksum ──► value object      │ │
//! │  │                                                               │ │
//! │  │  ┌───────────┐ ┌───────────┐ ┌──────────┐ ┌──────────────┐  │ │
//! │  │  │ normalize │ │ checksum  │ │ abn acn  │ │ tfn          │  │ │
//! │  │  │ digits    │ │ weighted  │ │ bsb      │ │ + AnyTfn     │  │ │
//! │  │  └───────────┘ └───────────┘ └──────────┘ └──────────────┘  │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO REGISTRY LOOKUPS • PURE FUNCTIONS               │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`identifier`] - The shared value-object contract and identifier kinds
//! - [`error`] - The validation error taxonomy
//! - `normalize` (private) - Separator stripping and digit-count enforcement
//! - `checksum` (private) - The parameterized weighted-sum engine
//! - [`abn`], [`acn`], [`bsb`], [`tfn`] - One module per identifier family
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input =
//!    same output; nothing retries, suspends, or blocks
//! 2. **Construct-or-Fail**: A value object existing means validation
//!    passed; there is no partially-valid state and no mutation
//! 3. **Canonical Form**: The separator-free digit string is the only
//!    representation used for storage, transport, and equality
//! 4. **Explicit Errors**: All failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use wattle_core::{Abn, AnyTfn, TfnKind, ValidationError};
//!
//! // Separator and spacing differences vanish in the canonical form.
//! let abn = Abn::parse("51 824 753 556").unwrap();
//! assert_eq!(abn.as_canonical(), "51824753556");
//! assert_eq!(abn.standard_format(), "51 824 753 556");
//!
//! // The TFN union resolves its variant from the digit length.
//! let tfn = AnyTfn::parse("81 854 402").unwrap();
//! assert_eq!(tfn.classify(), TfnKind::Business);
//!
//! // Failures are structured, recoverable values.
//! let err = Abn::parse("12345678912").unwrap_err();
//! assert!(matches!(err, ValidationError::ChecksumMismatch { .. }));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod abn;
pub mod acn;
pub mod bsb;
mod checksum;
pub mod error;
pub mod identifier;
mod normalize;
pub mod tfn;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use wattle_core::Abn` instead of
// `use wattle_core::abn::Abn`

pub use abn::Abn;
pub use acn::Acn;
pub use bsb::Bsb;
pub use error::{ValidationError, ValidationResult};
pub use identifier::{Identifier, IdentifierKind};
pub use tfn::{AnyTfn, BusinessTfn, IndividualTfn, TfnKind};

// =============================================================================
// Crate-Level Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Every family's fixture must survive its own validated path.
    #[test]
    fn test_fixtures_round_trip_generically() {
        fn check<T: Identifier + PartialEq + std::fmt::Debug>() {
            let fixture = T::fixture();
            assert_eq!(fixture.as_canonical().len(), T::LEN);
            let reparsed = T::parse(fixture.as_canonical()).unwrap();
            assert_eq!(reparsed, fixture);
        }

        check::<Abn>();
        check::<Acn>();
        check::<Bsb>();
        check::<IndividualTfn>();
        check::<BusinessTfn>();
    }

    /// Canonical output re-parses to an equal value for every family.
    #[test]
    fn test_parse_is_idempotent_on_canonical_output() {
        fn check<T: Identifier + PartialEq + std::fmt::Debug>(raw: &str) {
            let first = T::parse(raw).unwrap();
            let second = T::parse(first.as_canonical()).unwrap();
            assert_eq!(first, second);
        }

        check::<Abn>("51-824-753-556");
        check::<Acn>("000 000 019");
        check::<Bsb>("123 456");
        check::<IndividualTfn>("1124-740-82");
        check::<BusinessTfn>("81 854 402");
    }

    #[test]
    fn test_kinds_line_up_with_lengths() {
        assert_eq!(Abn::LEN, IdentifierKind::Abn.expected_len());
        assert_eq!(Acn::LEN, IdentifierKind::Acn.expected_len());
        assert_eq!(Bsb::LEN, IdentifierKind::Bsb.expected_len());
        assert_eq!(
            IndividualTfn::LEN,
            IdentifierKind::IndividualTfn.expected_len()
        );
        assert_eq!(BusinessTfn::LEN, IdentifierKind::BusinessTfn.expected_len());
    }
}
