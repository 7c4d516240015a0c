//! Query controller
//!
//! The state machine behind every list view: owns the page number, derives
//! which backend call to issue from the committed search, and folds the
//! response into one of four renderable phases. The controller plans
//! requests and applies outcomes; it never performs I/O itself.
//!
//! Responses race-free by construction: every planned request carries a
//! monotonically increasing stamp and [`QueryController::apply`] discards
//! any outcome whose stamp is not the latest issued, so a slow early
//! response can never overwrite a later one.

use tablero_core::{Precision, SearchField};
use tablero_model::{PageOutcome, PageResult};

use crate::search::SearchStore;
use crate::signal::MutationSignal;

// ============================================================================
// Phases
// ============================================================================

/// Renderable states of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    /// No active search; the plain list is shown
    #[default]
    Unfiltered,
    /// A search was submitted and its fetch is in flight
    SearchPending,
    /// The active fetch resolved with rows
    SearchResults,
    /// The active fetch resolved with zero rows or a failure status;
    /// both render the same "no encontrado" view
    SearchEmpty,
}

// ============================================================================
// Routes and Requests
// ============================================================================

/// Which backend endpoint a request goes to
#[derive(Debug, Clone, PartialEq)]
pub enum QueryRoute<F> {
    /// `GET /api/<entity>?page&size`
    ListAll,
    /// `GET /api/<entity>/busqueda?exactitud=..&<field>=<value>&page&size`
    Search {
        field: F,
        value: String,
        precision: Precision,
    },
}

/// A planned request, ready for the UI layer to execute
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest<F> {
    /// Monotonic stamp compared at apply time to discard stale responses
    pub stamp: u64,
    pub page: u32,
    pub page_size: u32,
    pub route: QueryRoute<F>,
}

/// What applying an outcome did to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Applied<T> {
    /// The outcome's stamp was not the latest issued; state untouched
    Stale,
    /// The fetch resolved empty or failed; the not-found view is active
    NotFound,
    /// Rows arrived and are now the visible page
    Rows(PageResult<T>),
}

// ============================================================================
// Controller
// ============================================================================

/// Per-entity query state machine
///
/// Created on view mount, dropped on unmount. All mutation goes through
/// the explicit operations below; the UI layer re-plans after each one.
#[derive(Debug, Clone)]
pub struct QueryController<F: SearchField> {
    store: SearchStore<F>,
    page: u32,
    page_size: u32,
    phase: QueryPhase,
    /// Stamp of the most recently planned request
    issued: u64,
    refresh: MutationSignal,
}

impl<F: SearchField> QueryController<F> {
    /// Create a controller in the unfiltered state
    pub fn new(page_size: u32) -> Self {
        Self {
            store: SearchStore::new(),
            page: 1,
            page_size,
            phase: QueryPhase::Unfiltered,
            issued: 0,
            refresh: MutationSignal::new(),
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    /// Whether a search is active (generation above zero)
    pub fn is_searching(&self) -> bool {
        self.store.generation() > 0
    }

    /// Whether a mutation is waiting for its re-fetch
    pub fn refresh_pending(&self) -> bool {
        self.refresh.is_raised()
    }

    /// The search parameter store backing this controller
    pub fn store(&self) -> &SearchStore<F> {
        &self.store
    }

    /// Mutable access for the search form's temp setters
    pub fn store_mut(&mut self) -> &mut SearchStore<F> {
        &mut self.store
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Confirm the search form: commit temp state, bump the generation and
    /// reset to page 1. Returns `false` (and changes nothing) if the form
    /// has no field or no value.
    pub fn submit_search(&mut self) -> bool {
        if !self.store.temp().is_filled() {
            return false;
        }

        self.store.commit_temp();
        self.store.increment_generation();
        self.page = 1;
        true
    }

    /// Return to the unfiltered list ("cancelar búsqueda")
    pub fn cancel_search(&mut self) {
        self.store.reset_generation();
        self.page = 1;
        self.phase = QueryPhase::Unfiltered;
    }

    /// Move to another page of whichever view is active
    pub fn set_page(&mut self, page: u32) {
        if page >= 1 {
            self.page = page;
        }
    }

    /// A modal finished its backend call; the next plan re-issues the
    /// active view unchanged
    pub fn mutation_completed(&mut self) {
        self.refresh.raise();
    }

    // ========================================================================
    // Plan / Apply
    // ========================================================================

    /// Plan the request for the current state
    ///
    /// Selects the route from the committed search via the entity's
    /// decision table, hands out a fresh stamp, clears a pending refresh
    /// (the re-fetch is now in flight) and moves an active search into
    /// `SearchPending`.
    pub fn plan(&mut self) -> QueryRequest<F> {
        self.issued += 1;
        self.refresh.take();

        let route = match self.store.committed().field {
            Some(field) if self.store.generation() > 0 => {
                self.phase = QueryPhase::SearchPending;
                QueryRoute::Search {
                    field,
                    value: self.store.committed().value.clone(),
                    precision: field.effective_precision(self.store.committed().precise),
                }
            }
            _ => QueryRoute::ListAll,
        };

        tracing::debug!(stamp = self.issued, page = self.page, ?route, "planned query");

        QueryRequest {
            stamp: self.issued,
            page: self.page,
            page_size: self.page_size,
            route,
        }
    }

    /// Fold a fetch outcome back into the controller
    ///
    /// Outcomes stamped older than the latest plan are discarded without
    /// touching any state. Empty pages and failed requests arrive here
    /// already collapsed into [`PageOutcome::NotFound`].
    pub fn apply<T>(&mut self, stamp: u64, outcome: PageOutcome<T>) -> Applied<T> {
        if stamp != self.issued {
            tracing::debug!(stamp, latest = self.issued, "discarding stale response");
            return Applied::Stale;
        }

        match outcome {
            PageOutcome::NotFound => {
                self.phase = QueryPhase::SearchEmpty;
                Applied::NotFound
            }
            PageOutcome::Found(page) => {
                self.phase = if self.is_searching() {
                    QueryPhase::SearchResults
                } else {
                    QueryPhase::Unfiltered
                };
                Applied::Rows(page)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablero_model::{ClientField, MessageField, PageResult};

    fn controller() -> QueryController<ClientField> {
        QueryController::new(8)
    }

    fn rows(n: u32) -> PageOutcome<u32> {
        PageOutcome::from_page(PageResult::new((0..n).collect(), 3, 1))
    }

    #[test]
    fn test_mount_plans_list_all() {
        let mut ctl = controller();
        let req = ctl.plan();
        assert_eq!(req.route, QueryRoute::ListAll);
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 8);
        assert_eq!(ctl.phase(), QueryPhase::Unfiltered);
    }

    #[test]
    fn test_submit_bumps_generation_and_resets_page() {
        let mut ctl = controller();
        ctl.set_page(3);

        ctl.store_mut().set_temp_field(Some(ClientField::Apellido));
        ctl.store_mut().set_temp_value("Gomez");
        assert!(ctl.submit_search());

        assert_eq!(ctl.generation(), 1);
        assert_eq!(ctl.page(), 1);

        let req = ctl.plan();
        assert_eq!(
            req.route,
            QueryRoute::Search {
                field: ClientField::Apellido,
                value: "Gomez".to_string(),
                precision: Precision::Fuzzy,
            }
        );
        assert_eq!(req.page, 1);
        assert_eq!(ctl.phase(), QueryPhase::SearchPending);
    }

    #[test]
    fn test_pagination_keeps_the_search_route() {
        let mut ctl = controller();
        ctl.store_mut().set_temp_field(Some(ClientField::Apellido));
        ctl.store_mut().set_temp_value("Gomez");
        ctl.submit_search();
        let first = ctl.plan();

        ctl.set_page(2);
        let second = ctl.plan();

        assert_eq!(first.route, second.route);
        assert_eq!(second.page, 2);
        assert_eq!(ctl.generation(), 1);
    }

    #[test]
    fn test_every_field_precision_combination_routes() {
        for field in ClientField::all() {
            for precise in [true, false] {
                let mut ctl = controller();
                let before = ctl.generation();

                ctl.store_mut().set_temp_field(Some(*field));
                ctl.store_mut().set_temp_value("x");
                ctl.store_mut().set_temp_precise(precise);
                assert!(ctl.submit_search());

                assert_eq!(ctl.generation(), before + 1);
                assert_eq!(ctl.page(), 1);

                let req = ctl.plan();
                assert_eq!(
                    req.route,
                    QueryRoute::Search {
                        field: *field,
                        value: "x".to_string(),
                        precision: Precision::from_precise(precise),
                    }
                );
            }
        }
    }

    #[test]
    fn test_fuzzy_only_field_ignores_precise_flag() {
        let mut ctl: QueryController<MessageField> = QueryController::new(8);
        ctl.store_mut().set_temp_field(Some(MessageField::Asunto));
        ctl.store_mut().set_temp_value("factura");
        ctl.store_mut().set_temp_precise(true);
        ctl.submit_search();

        match ctl.plan().route {
            QueryRoute::Search { precision, .. } => assert_eq!(precision, Precision::Fuzzy),
            other => panic!("expected search route, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_and_error_collapse_identically() {
        // Zero rows and HTTP 404 both arrive as NotFound and land in the
        // same phase
        let mut ctl = controller();
        let req = ctl.plan();
        assert_eq!(ctl.apply(req.stamp, rows(0)), Applied::<u32>::NotFound);
        assert_eq!(ctl.phase(), QueryPhase::SearchEmpty);

        let req = ctl.plan();
        assert_eq!(
            ctl.apply(req.stamp, PageOutcome::<u32>::NotFound),
            Applied::NotFound
        );
        assert_eq!(ctl.phase(), QueryPhase::SearchEmpty);
    }

    #[test]
    fn test_results_enter_the_right_phase() {
        let mut ctl = controller();
        let req = ctl.plan();
        assert!(matches!(ctl.apply(req.stamp, rows(3)), Applied::Rows(_)));
        assert_eq!(ctl.phase(), QueryPhase::Unfiltered);

        ctl.store_mut().set_temp_field(Some(ClientField::Nombre));
        ctl.store_mut().set_temp_value("Ana");
        ctl.submit_search();
        let req = ctl.plan();
        assert!(matches!(ctl.apply(req.stamp, rows(2)), Applied::Rows(_)));
        assert_eq!(ctl.phase(), QueryPhase::SearchResults);
    }

    #[test]
    fn test_stale_responses_are_discarded() {
        let mut ctl = controller();
        let old = ctl.plan();
        ctl.set_page(2);
        let new = ctl.plan();

        // The slow first response lands after the second was planned
        assert_eq!(ctl.apply(old.stamp, rows(5)), Applied::<u32>::Stale);
        assert_eq!(ctl.phase(), QueryPhase::Unfiltered);

        assert!(matches!(ctl.apply(new.stamp, rows(2)), Applied::Rows(_)));
    }

    #[test]
    fn test_mutation_refetches_active_view_unchanged() {
        let mut ctl = controller();
        ctl.store_mut().set_temp_field(Some(ClientField::Documento));
        ctl.store_mut().set_temp_value("301");
        ctl.submit_search();
        ctl.set_page(2);
        let before = ctl.plan();

        ctl.mutation_completed();
        assert!(ctl.refresh_pending());

        let after = ctl.plan();
        assert_eq!(after.route, before.route);
        assert_eq!(after.page, 2);
        assert_eq!(ctl.generation(), 1);
        // The signal is cleared once the re-fetch has been issued
        assert!(!ctl.refresh_pending());
    }

    #[test]
    fn test_cancel_search_returns_to_unfiltered() {
        let mut ctl = controller();
        ctl.store_mut().set_temp_field(Some(ClientField::Nombre));
        ctl.store_mut().set_temp_value("Ana");
        ctl.submit_search();
        ctl.set_page(4);

        ctl.cancel_search();
        assert_eq!(ctl.generation(), 0);
        assert_eq!(ctl.page(), 1);
        assert_eq!(ctl.phase(), QueryPhase::Unfiltered);
        assert_eq!(ctl.plan().route, QueryRoute::<ClientField>::ListAll);
    }

    #[test]
    fn test_unfilled_form_does_not_submit() {
        let mut ctl = controller();
        ctl.store_mut().set_temp_value("no field chosen");
        assert!(!ctl.submit_search());
        assert_eq!(ctl.generation(), 0);

        ctl.store_mut().set_temp_field(Some(ClientField::Nombre));
        ctl.store_mut().set_temp_value("   ");
        assert!(!ctl.submit_search());
        assert_eq!(ctl.generation(), 0);
    }

    #[test]
    fn test_page_zero_is_ignored() {
        let mut ctl = controller();
        ctl.set_page(0);
        assert_eq!(ctl.page(), 1);
    }
}
