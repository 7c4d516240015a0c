//! Core traits for Tablero
//!
//! This module defines the `SearchField` contract. Every entity that can be
//! searched defines a field enum implementing this trait; the trait carries
//! the entity's endpoint decision table: which query key a field maps to and
//! whether the backend offers an exact-match variant for it.

use crate::types::Precision;

// ============================================================================
// SearchField Trait
// ============================================================================

/// Trait for per-entity search-field enums
///
/// The implementation of this trait *is* the entity's search decision table:
/// `(field, precision)` resolves to the backend `busqueda` endpoint through
/// [`query_key`](SearchField::query_key) and
/// [`effective_precision`](SearchField::effective_precision).
///
/// # Example
///
/// ```rust,ignore
/// use tablero_core::{SearchField, Precision};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum TaxField { Code, Name }
///
/// impl SearchField for TaxField {
///     fn query_key(&self) -> &'static str {
///         match self {
///             TaxField::Code => "codigo",
///             TaxField::Name => "nombre",
///         }
///     }
///     fn label(&self) -> &'static str { /* ... */ "Código" }
///     fn exact_capable(&self) -> bool { true }
///     fn all() -> &'static [Self] { &[TaxField::Code, TaxField::Name] }
/// }
/// ```
pub trait SearchField: Copy + Eq + std::fmt::Debug + 'static {
    /// The query-string key the backend expects for this field
    fn query_key(&self) -> &'static str;

    /// Display label for the search form's field selector
    fn label(&self) -> &'static str;

    /// Whether the backend offers an exact-match endpoint for this field
    ///
    /// For fields without one, the precise flag is meaningless and the
    /// fuzzy endpoint is always selected.
    fn exact_capable(&self) -> bool;

    /// All selectable fields, in form order
    fn all() -> &'static [Self];

    /// Resolve the precision actually sent to the backend
    fn effective_precision(&self, precise: bool) -> Precision {
        if self.exact_capable() {
            Precision::from_precise(precise)
        } else {
            Precision::Fuzzy
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Demo {
        Exactable,
        FuzzyOnly,
    }

    impl SearchField for Demo {
        fn query_key(&self) -> &'static str {
            match self {
                Demo::Exactable => "a",
                Demo::FuzzyOnly => "b",
            }
        }

        fn label(&self) -> &'static str {
            "demo"
        }

        fn exact_capable(&self) -> bool {
            matches!(self, Demo::Exactable)
        }

        fn all() -> &'static [Self] {
            &[Demo::Exactable, Demo::FuzzyOnly]
        }
    }

    #[test]
    fn test_effective_precision_respects_capability() {
        assert_eq!(Demo::Exactable.effective_precision(true), Precision::Exact);
        assert_eq!(Demo::Exactable.effective_precision(false), Precision::Fuzzy);
        // Precise flag is meaningless for fields with no exact endpoint
        assert_eq!(Demo::FuzzyOnly.effective_precision(true), Precision::Fuzzy);
    }
}
