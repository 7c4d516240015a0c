//! # Tablero UI
//!
//! Dioxus Desktop UI for the Tablero dashboard.
//!
//! This crate renders the administrative panel: one paginated table per
//! entity, two-mode search, permission-gated row actions and the dialogs
//! behind them.
//!
//! ## Features
//!
//! - Per-entity pages driven by a shared query controller
//! - Exact/fuzzy search with committed vs. in-progress form state
//! - Row actions resolved from the session's permission matrix
//! - Debounced server-side uniqueness checks on unique form fields
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use tablero_core;
pub use tablero_model;
pub use tablero_query;

// Re-export main components
pub use app::App;
pub use pages::{
    AuditPage, ClientsPage, ImagesPage, MessagesPage, RolesPage, TaxesPage, UsersPage,
};
pub use state::{
    ACTIVE_PAGE, SESSION, SessionState, SessionUser, TOASTS, Toast, ToastHandle, ToastKind,
    ToastStore, install_session,
};

// Re-export components
pub use components::{
    Column, DataTable, NotFoundView, NumberInput, Pagination, Select, SelectOption, TextArea,
    TextInput, Toggle,
};

// Re-export hooks
pub use hooks::{EntityQuery, UniqueCheck, UniqueProbe, use_entity_query, use_unique_check};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Tablero";

/// Application display title
pub const TITLE: &str = "Tablero - Panel administrativo";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

/// Session staged before the Dioxus runtime exists; installed by [`App`]
/// on first render
static INITIAL_SESSION: std::sync::OnceLock<state::SessionUser> = std::sync::OnceLock::new();

pub(crate) fn initial_session() -> Option<&'static state::SessionUser> {
    INITIAL_SESSION.get()
}

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Tablero desktop application
///
/// This is the main entry point for the Dioxus desktop app. The session
/// is expected to be installed by the host via
/// [`install_session`](state::install_session) before or right after
/// launch; until then every view renders deny-all.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     tablero_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Launch with a session already picked by the host
///
/// Stages the user before the runtime exists; [`App`] installs it on
/// first render. Signals cannot be written before launch.
pub fn launch_with_session(user: state::SessionUser) {
    let _ = INITIAL_SESSION.set(user);
    launch();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Tablero"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains("tailwindcss"));
    }
}
