//! Mutation-completion signal
//!
//! Every add/edit/delete dialog raises this flag after its backend call
//! resolves, success or failure alike. The query controller consumes it
//! with take semantics: at most one pending re-fetch per mutation, rapid
//! mutations coalesce to "last write wins".

/// A one-shot refresh flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationSignal {
    raised: bool,
}

impl MutationSignal {
    /// Create a lowered signal
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag; raising an already-raised flag is a no-op
    pub fn raise(&mut self) {
        self.raised = true;
    }

    /// Whether the flag is currently raised
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    /// Consume the flag, lowering it
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.raised)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_lowers_the_flag() {
        let mut signal = MutationSignal::new();
        assert!(!signal.take());

        signal.raise();
        assert!(signal.is_raised());
        assert!(signal.take());
        assert!(!signal.take());
    }

    #[test]
    fn test_rapid_raises_coalesce() {
        let mut signal = MutationSignal::new();
        signal.raise();
        signal.raise();
        signal.raise();
        // Three mutations, one pending re-fetch
        assert!(signal.take());
        assert!(!signal.take());
    }
}
