//! # UI Components
//!
//! Reusable Dioxus components for the Tablero dashboard.
//!
//! This module provides the building blocks every entity page is
//! assembled from:
//! - **DataTable**: the shared paginated table with permission-gated row
//!   actions and the not-found view
//! - **Pagination**: numbered page selector
//! - **Inputs**: form input components (text, number, select, toggle)
//! - **Dialogs**: search form, create/edit forms, delete confirmation,
//!   read-only detail view
//!
//! ## Component Hierarchy
//!
//! ```text
//! EntityPage
//! ├── Toolbar (search / cancel search / add, permission-gated)
//! ├── DataTable
//! │   └── row action button + dropup menu
//! ├── Pagination
//! └── Dialogs (at most one open)
//!     ├── SearchDialog
//!     ├── <Entity>Dialog (create/edit)
//!     ├── ConfirmDeleteDialog
//!     └── DetailDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;
pub mod pagination;
pub mod table;

// ============================================================================
// Re-exports
// ============================================================================

// Table components
pub use table::{Column, DataTable, NotFoundView};

// Pagination
pub use pagination::Pagination;

// Input components
pub use inputs::{NumberInput, Select, SelectOption, TextArea, TextInput, Toggle};

// Dialog components
pub use dialogs::{
    ClientDialog, ClientDialogMode, ConfirmDeleteDialog, DetailDialog, ImageDialog,
    ImageDialogMode, MessageDialog, RoleDialog, RoleDialogMode, SearchDialog, TaxDialog,
    TaxDialogMode, UserDialog, UserDialogMode,
};
