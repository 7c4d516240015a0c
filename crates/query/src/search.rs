//! Search parameter state
//!
//! Holds, per entity, both the *committed* search (the one queries are
//! issued from) and the *temp* search (the one the open form edits). The
//! two are independent containers: closing the form without submitting
//! never touches the committed spec. The store is also the only writer of
//! the search generation.

use tablero_core::SearchField;

// ============================================================================
// SearchSpec
// ============================================================================

/// One search request as the user composed it
///
/// `field == None` only in the "no active search" state. The `precise`
/// flag selects the exact endpoint variant where the field offers one.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpec<F> {
    pub field: Option<F>,
    pub value: String,
    /// Optional secondary criterion (e.g. name + surname)
    pub second_field: Option<F>,
    pub second_value: String,
    pub precise: bool,
}

impl<F> Default for SearchSpec<F> {
    fn default() -> Self {
        Self {
            field: None,
            value: String::new(),
            second_field: None,
            second_value: String::new(),
            precise: false,
        }
    }
}

impl<F: SearchField> SearchSpec<F> {
    /// Whether a field has been chosen and a value typed
    pub fn is_filled(&self) -> bool {
        self.field.is_some() && !self.value.trim().is_empty()
    }
}

// ============================================================================
// SearchStore
// ============================================================================

/// Committed + temp search state and the search generation counter
///
/// One instance per entity view, created on mount and dropped on unmount.
/// All mutation goes through setters; the generation has exactly two
/// writers, [`increment_generation`](SearchStore::increment_generation)
/// (once per confirmed submit) and
/// [`reset_generation`](SearchStore::reset_generation) (return to the
/// unfiltered list).
#[derive(Debug, Clone, Default)]
pub struct SearchStore<F> {
    committed: SearchSpec<F>,
    temp: SearchSpec<F>,
    generation: u64,
}

impl<F: SearchField> SearchStore<F> {
    /// Create a store in the "no active search" state
    pub fn new() -> Self {
        Self {
            committed: SearchSpec::default(),
            temp: SearchSpec::default(),
            generation: 0,
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The committed search, the one queries are issued from
    pub fn committed(&self) -> &SearchSpec<F> {
        &self.committed
    }

    /// The in-progress form state
    pub fn temp(&self) -> &SearchSpec<F> {
        &self.temp
    }

    /// Current search generation; 0 means no active search
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ========================================================================
    // Temp setters - always allowed while the form is open
    // ========================================================================

    pub fn set_temp_field(&mut self, field: Option<F>) {
        self.temp.field = field;
    }

    pub fn set_temp_value(&mut self, value: impl Into<String>) {
        self.temp.value = value.into();
    }

    pub fn set_temp_second_field(&mut self, field: Option<F>) {
        self.temp.second_field = field;
    }

    pub fn set_temp_second_value(&mut self, value: impl Into<String>) {
        self.temp.second_value = value.into();
    }

    pub fn set_temp_precise(&mut self, precise: bool) {
        self.temp.precise = precise;
    }

    /// Re-sync the form with the committed state when it is (re)opened
    pub fn open_form(&mut self) {
        self.temp = self.committed.clone();
    }

    /// Throw away unsubmitted form edits
    pub fn discard_temp(&mut self) {
        self.temp = self.committed.clone();
    }

    // ========================================================================
    // Committed writers - only called at submit/reset time
    // ========================================================================

    /// Copy the temp spec into the committed spec (submit time only)
    pub fn commit_temp(&mut self) {
        self.committed = self.temp.clone();
    }

    /// Bump the generation; called exactly once per confirmed submit
    pub fn increment_generation(&mut self) {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "search submitted");
    }

    /// Return to the unfiltered list: generation 0, committed spec cleared
    pub fn reset_generation(&mut self) {
        self.generation = 0;
        self.committed = SearchSpec::default();
        self.temp = SearchSpec::default();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tablero_model::ClientField;

    #[test]
    fn test_temp_edits_do_not_touch_committed() {
        let mut store: SearchStore<ClientField> = SearchStore::new();
        store.set_temp_field(Some(ClientField::Apellido));
        store.set_temp_value("Gomez");
        store.set_temp_precise(true);

        assert_eq!(store.committed().field, None);
        assert_eq!(store.committed().value, "");
        assert!(!store.committed().precise);
    }

    #[test]
    fn test_cancelled_form_leaves_committed_unchanged() {
        let mut store: SearchStore<ClientField> = SearchStore::new();

        // Submit a first search
        store.set_temp_field(Some(ClientField::Nombre));
        store.set_temp_value("Ana");
        store.commit_temp();
        store.increment_generation();

        // Open the form again, type something else, then close without submit
        store.open_form();
        store.set_temp_value("Beatriz");
        store.set_temp_field(Some(ClientField::Telefono));
        store.discard_temp();

        assert_eq!(store.committed().field, Some(ClientField::Nombre));
        assert_eq!(store.committed().value, "Ana");
        assert_eq!(store.temp().value, "Ana");
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn test_generation_counts_submits() {
        let mut store: SearchStore<ClientField> = SearchStore::new();
        assert_eq!(store.generation(), 0);

        store.increment_generation();
        store.increment_generation();
        assert_eq!(store.generation(), 2);

        store.reset_generation();
        assert_eq!(store.generation(), 0);
        assert_eq!(store.committed().field, None);
    }

    #[test]
    fn test_is_filled_requires_field_and_value() {
        let mut spec: SearchSpec<ClientField> = SearchSpec::default();
        assert!(!spec.is_filled());

        spec.field = Some(ClientField::Documento);
        assert!(!spec.is_filled());

        spec.value = "  ".to_string();
        assert!(!spec.is_filled());

        spec.value = "30111222".to_string();
        assert!(spec.is_filled());
    }
}
