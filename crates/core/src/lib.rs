//! # Tablero Core
//!
//! Core types, traits, and error handling for the Tablero dashboard.
//!
//! This crate provides the foundational building blocks used throughout
//! the Tablero workspace, including:
//!
//! - **Types**: entity catalog, row actions, search precision
//! - **Traits**: the `SearchField` contract implemented by every entity's
//!   search-field enum
//! - **Permissions**: the permission matrix and the pure resolver that maps
//!   it to a default row action
//! - **Errors**: unified error handling with `PanelError` and `PanelResult`
//!

pub mod error;
pub mod permissions;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{PanelError, PanelResult};
pub use permissions::{Action, PermissionSnapshot, default_row_action};
pub use traits::SearchField;
pub use types::{EntityKind, Precision, RowAction};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
