//! Debounced uniqueness validation
//!
//! Unique form fields (tax codes, role names) are checked against the
//! backend while the user types. Two pieces make that race-free:
//!
//! - [`Debouncer`], a cancellable ticket timer: arming it invalidates any
//!   pending ticket, so only the last keystroke within the window ever
//!   fires. The actual sleeping happens in the UI layer; the tickets are
//!   what make a late waker harmless.
//! - [`UniqueRule`], the decision of whether a check should fire at all
//!   (minimum input length) and whether a hit actually conflicts (the
//!   record's own current value never does).

use std::time::Duration;

/// Idle window before a uniqueness check fires
pub const UNIQUE_CHECK_WINDOW: Duration = Duration::from_millis(500);

/// Minimum input length before code fields are checked
pub const CODE_MIN_LEN: usize = 2;

/// Minimum input length before name fields are checked
pub const NAME_MIN_LEN: usize = 1;

// ============================================================================
// Debouncer
// ============================================================================

/// Ticket handed out by [`Debouncer::arm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Cancellable fire-once timer state
///
/// Each call to [`arm`](Debouncer::arm) supersedes every earlier ticket.
/// The holder sleeps for [`window`](Debouncer::window) and then fires only
/// if its ticket is still current.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    current: u64,
}

impl Debouncer {
    /// Create a debouncer with the given idle window
    pub fn new(window: Duration) -> Self {
        Self { window, current: 0 }
    }

    /// The idle window the holder should sleep for
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arm the timer, invalidating any pending ticket
    pub fn arm(&mut self) -> DebounceTicket {
        self.current += 1;
        DebounceTicket(self.current)
    }

    /// Whether the ticket is still the most recently armed one
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.current
    }

    /// Invalidate every outstanding ticket without arming a new one
    pub fn cancel(&mut self) {
        self.current += 1;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(UNIQUE_CHECK_WINDOW)
    }
}

// ============================================================================
// UniqueRule
// ============================================================================

/// Result of resolving an existence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueVerdict {
    /// The value can be used
    Available,
    /// Another record already uses the value; submit must stay disabled
    Taken,
}

/// When to check a unique field and how to judge a hit
#[derive(Debug, Clone, Default)]
pub struct UniqueRule {
    min_len: usize,
    /// The value the record being edited currently holds, if any
    current: Option<String>,
}

impl UniqueRule {
    /// Rule for an add form: no self value to exclude
    pub fn for_new(min_len: usize) -> Self {
        Self { min_len, current: None }
    }

    /// Rule for an edit form: the record's own value never conflicts
    pub fn for_edit(min_len: usize, current: impl Into<String>) -> Self {
        Self {
            min_len,
            current: Some(current.into()),
        }
    }

    /// Whether the input is long enough to be worth a round-trip
    pub fn should_check(&self, input: &str) -> bool {
        input.trim().len() >= self.min_len
    }

    /// Judge the backend's answer for the given input
    ///
    /// A hit that matches the record's own current value
    /// (case-insensitively) is self-exclusion, not a conflict.
    pub fn resolve(&self, input: &str, exists: bool) -> UniqueVerdict {
        if !exists {
            return UniqueVerdict::Available;
        }

        let own = self
            .current
            .as_deref()
            .is_some_and(|cur| cur.trim().eq_ignore_ascii_case(input.trim()));

        if own { UniqueVerdict::Available } else { UniqueVerdict::Taken }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_new_ticket_supersedes_old() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.arm();
        assert!(debouncer.is_current(first));

        // A keystroke before the window elapses restarts the timer
        let second = debouncer.arm();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn test_cancel_invalidates_without_arming() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.arm();
        debouncer.cancel();
        assert!(!debouncer.is_current(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_inside_window_restarts_the_timer() {
        let debouncer = Arc::new(Mutex::new(Debouncer::default()));
        let fired = Arc::new(Mutex::new(Vec::new()));

        // Each keystroke's holder sleeps the full window and fires only
        // if no later keystroke superseded its ticket in the meantime.
        let spawn_holder = |ticket: DebounceTicket| {
            let debouncer = Arc::clone(&debouncer);
            let fired = Arc::clone(&fired);
            tokio::spawn(async move {
                let window = debouncer.lock().unwrap().window();
                tokio::time::sleep(window).await;
                if debouncer.lock().unwrap().is_current(ticket) {
                    fired.lock().unwrap().push(ticket);
                }
            })
        };

        let first = debouncer.lock().unwrap().arm();
        let first_holder = spawn_holder(first);

        // Second keystroke 200 ms in, well inside the 500 ms window
        tokio::time::sleep(Duration::from_millis(200)).await;
        let second = debouncer.lock().unwrap().arm();
        let second_holder = spawn_holder(second);

        first_holder.await.unwrap();
        second_holder.await.unwrap();

        assert_eq!(*fired.lock().unwrap(), vec![second]);
    }

    #[test]
    fn test_window_default_is_half_a_second() {
        assert_eq!(Debouncer::default().window(), Duration::from_millis(500));
    }

    #[test]
    fn test_short_input_never_fires() {
        let rule = UniqueRule::for_new(CODE_MIN_LEN);
        assert!(!rule.should_check(""));
        assert!(!rule.should_check("A"));
        assert!(!rule.should_check(" A "));
        assert!(rule.should_check("AB"));
    }

    #[test]
    fn test_name_fields_fire_from_one_character() {
        let rule = UniqueRule::for_new(NAME_MIN_LEN);
        assert!(!rule.should_check("  "));
        assert!(rule.should_check("a"));
    }

    #[test]
    fn test_hit_marks_taken_on_add_form() {
        let rule = UniqueRule::for_new(CODE_MIN_LEN);
        assert_eq!(rule.resolve("AB", true), UniqueVerdict::Taken);
        assert_eq!(rule.resolve("AB", false), UniqueVerdict::Available);
    }

    #[test]
    fn test_own_value_is_not_a_conflict_when_editing() {
        let rule = UniqueRule::for_edit(CODE_MIN_LEN, "IVA21");
        assert_eq!(rule.resolve("iva21", true), UniqueVerdict::Available);
        assert_eq!(rule.resolve(" IVA21 ", true), UniqueVerdict::Available);
        assert_eq!(rule.resolve("IVA10", true), UniqueVerdict::Taken);
    }
}
