//! # UI Hooks
//!
//! Custom Dioxus hooks for the Tablero UI.
//!
//! This module provides reusable hooks for:
//! - Entity list/search fetching driven by a query controller
//! - Debounced server-side uniqueness validation on form fields

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_entity_query;
pub mod use_unique_check;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_entity_query::{EntityQuery, use_entity_query};
pub use use_unique_check::{UniqueCheck, UniqueProbe, use_unique_check};
