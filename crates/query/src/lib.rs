//! # Tablero Query
//!
//! The headless query core of the dashboard. Every list view is driven by
//! the same four pieces, instantiated per entity:
//!
//! - [`SearchStore`]: committed vs. in-progress search state plus the
//!   monotonic search generation
//! - [`QueryController`]: the state machine that owns pagination, selects
//!   the backend route for the active search, and folds responses into a
//!   renderable phase
//! - [`Debouncer`] / [`UniqueRule`]: the cancellable-timer primitive and
//!   the rule behind server-side uniqueness checks on form fields
//! - [`MutationSignal`]: the refresh flag modals raise after a mutation
//!
//! Nothing in this crate performs I/O; the UI layer owns the actual HTTP
//! calls and feeds their outcomes back through
//! [`QueryController::apply`].

pub mod controller;
pub mod debounce;
pub mod search;
pub mod signal;

// Re-export commonly used items at crate root
pub use controller::{Applied, QueryController, QueryPhase, QueryRequest, QueryRoute};
pub use debounce::{
    CODE_MIN_LEN, DebounceTicket, Debouncer, NAME_MIN_LEN, UNIQUE_CHECK_WINDOW, UniqueRule,
    UniqueVerdict,
};
pub use search::{SearchSpec, SearchStore};
pub use signal::MutationSignal;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
