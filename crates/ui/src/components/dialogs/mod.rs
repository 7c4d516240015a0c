//! # Dialog Components
//!
//! This module provides all dialog/modal components for the Tablero UI.
//!
//! ## Dialogs
//!
//! - **SearchDialog**: Two-mode (exact/fuzzy) search form
//! - **ConfirmDeleteDialog**: Confirmation for destructive actions
//! - **DetailDialog**: Read-only record detail view
//! - **ClientDialog / UserDialog / RoleDialog / TaxDialog / ImageDialog**:
//!   Per-entity create/edit forms
//! - **MessageDialog**: Message compose form (no edit mode)
//!
//! Every form dialog fires `on_completed` when its backend call resolves,
//! success or failure alike; pages re-fetch their active view on that
//! signal.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod client_dialog;
pub mod confirm_delete;
pub mod detail_dialog;
pub mod image_dialog;
pub mod message_dialog;
pub mod role_dialog;
pub mod search_dialog;
pub mod tax_dialog;
pub mod user_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use client_dialog::{ClientDialog, ClientDialogMode};
pub use confirm_delete::ConfirmDeleteDialog;
pub use detail_dialog::DetailDialog;
pub use image_dialog::{ImageDialog, ImageDialogMode};
pub use message_dialog::MessageDialog;
pub use role_dialog::{RoleDialog, RoleDialogMode};
pub use search_dialog::SearchDialog;
pub use tax_dialog::{TaxDialog, TaxDialogMode};
pub use user_dialog::{UserDialog, UserDialogMode};
