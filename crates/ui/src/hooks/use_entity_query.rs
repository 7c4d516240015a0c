//! Entity query hook
//!
//! Glues one [`QueryController`] to the backend for the lifetime of an
//! entity view. The controller plans requests and folds outcomes; this
//! hook owns the actual fetching: a revision signal drives an effect that
//! plans the next request, spawns the HTTP call and applies the stamped
//! outcome. Stale responses are applied and discarded by the controller,
//! so a slow page-1 fetch can never overwrite page 2.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use tablero_api::ApiClient;
use tablero_core::{EntityKind, SearchField};
use tablero_model::PageOutcome;
use tablero_query::{Applied, QueryController, QueryPhase, SearchStore};

use crate::state::TOASTS;

// ============================================================================
// EntityQuery
// ============================================================================

/// Handle returned by [`use_entity_query`]
///
/// Cheap to copy into event handlers. Every operation that changes what
/// should be on screen bumps the revision, which re-plans and re-fetches.
pub struct EntityQuery<F: SearchField, T: 'static> {
    controller: Signal<QueryController<F>>,
    rows: Signal<Vec<T>>,
    pages: Signal<u32>,
    loading: Signal<bool>,
    revision: Signal<u64>,
}

impl<F: SearchField, T> Clone for EntityQuery<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: SearchField, T> Copy for EntityQuery<F, T> {}

impl<F: SearchField, T> EntityQuery<F, T> {
    // ========================================================================
    // Reads
    // ========================================================================

    /// The rows of the visible page
    pub fn rows(&self) -> Signal<Vec<T>> {
        self.rows
    }

    /// Total pages of the active view; 0 while nothing was found
    pub fn total_pages(&self) -> u32 {
        *self.pages.read()
    }

    pub fn page(&self) -> u32 {
        self.controller.read().page()
    }

    pub fn phase(&self) -> QueryPhase {
        self.controller.read().phase()
    }

    /// Whether a search is active (the "cancelar búsqueda" chip is shown)
    pub fn is_searching(&self) -> bool {
        self.controller.read().is_searching()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    /// Human-readable summary of the committed search, for the filter chip
    pub fn search_summary(&self) -> Option<String> {
        let controller = self.controller.read();
        if !controller.is_searching() {
            return None;
        }
        let committed = controller.store().committed();
        committed
            .field
            .map(|field| format!("{}: {}", field.label(), committed.value))
    }

    // ========================================================================
    // Search form pass-through
    // ========================================================================

    /// Run a closure against the search store (temp setters, open_form)
    ///
    /// Form edits never trigger a fetch; only
    /// [`submit_search`](EntityQuery::submit_search) does.
    pub fn with_store(&mut self, f: impl FnOnce(&mut SearchStore<F>)) {
        f(self.controller.write().store_mut());
    }

    /// Snapshot of the in-progress form state
    pub fn temp(&self) -> tablero_query::SearchSpec<F> {
        self.controller.read().store().temp().clone()
    }

    // ========================================================================
    // Operations - each one re-plans and re-fetches
    // ========================================================================

    /// Confirm the search form; returns `false` if it is not filled in
    pub fn submit_search(&mut self) -> bool {
        let submitted = self.controller.write().submit_search();
        if submitted {
            self.refetch();
        }
        submitted
    }

    /// Return to the unfiltered list
    pub fn cancel_search(&mut self) {
        self.controller.write().cancel_search();
        self.refetch();
    }

    /// Move to another page of whichever view is active
    pub fn go_to_page(&mut self, page: u32) {
        self.controller.write().set_page(page);
        self.refetch();
    }

    /// A modal finished its backend call; re-issue the active view unchanged
    pub fn mutation_completed(&mut self) {
        self.controller.write().mutation_completed();
        self.refetch();
    }

    fn refetch(&mut self) {
        self.revision += 1;
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Drive an entity view's list/search fetching
///
/// Plans through the entity's [`QueryController`], fetches through
/// [`ApiClient::fetch_route`] and applies outcomes with their stamp. A
/// loading toast is shown while the request is in flight and dismissed
/// whether it resolves with rows, empty or a failure.
pub fn use_entity_query<F, T>(entity: EntityKind) -> EntityQuery<F, T>
where
    F: SearchField,
    T: DeserializeOwned + 'static,
{
    let mut controller = use_signal(|| QueryController::<F>::new(entity.page_size()));
    let mut rows = use_signal(Vec::<T>::new);
    let mut pages = use_signal(|| 0u32);
    let mut loading = use_signal(|| false);
    let revision = use_signal(|| 0u64);

    use_effect(move || {
        // The revision is the only dependency; controller writes below must
        // not re-trigger this effect
        let _ = revision.read();

        let request = controller.write().plan();
        let stamp = request.stamp;
        loading.set(true);
        let toast = TOASTS.write().loading("Cargando...");

        spawn(async move {
            let outcome: PageOutcome<T> = ApiClient::new().fetch_route(entity, &request).await;
            TOASTS.write().dismiss(toast);

            match controller.write().apply(stamp, outcome) {
                Applied::Stale => {
                    // A newer request is in flight; its completion clears
                    // the loading flag
                }
                Applied::NotFound => {
                    rows.set(Vec::new());
                    pages.set(0);
                    loading.set(false);
                }
                Applied::Rows(page) => {
                    rows.set(page.rows);
                    pages.set(page.pages);
                    loading.set(false);
                }
            }
        });
    });

    EntityQuery {
        controller,
        rows,
        pages,
        loading,
        revision,
    }
}
