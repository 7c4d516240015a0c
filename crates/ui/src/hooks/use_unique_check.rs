//! Debounced uniqueness check hook
//!
//! Wires a [`Debouncer`] and a [`UniqueRule`] to the backend existence
//! probes. Each keystroke arms the timer; after the idle window the latest
//! ticket (and only the latest) fires one exact-match probe and the verdict
//! lands in the `taken` signal. Submit buttons stay disabled while a check
//! is pending or the value is taken.

use dioxus::prelude::*;

use tablero_api::ApiClient;
use tablero_query::{Debouncer, UniqueRule, UniqueVerdict};

// ============================================================================
// Probe Targets
// ============================================================================

/// Which unique field the hook probes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueProbe {
    /// `codigo` on taxes
    TaxCode,
    /// `nombre` on roles
    RoleName,
    /// `nombre_usuario` on user accounts
    Username,
}

impl UniqueProbe {
    async fn exists(self, client: &ApiClient, value: &str) -> bool {
        let result = match self {
            UniqueProbe::TaxCode => client.tax_code_exists(value).await,
            UniqueProbe::RoleName => client.role_name_exists(value).await,
            UniqueProbe::Username => client.username_exists(value).await,
        };

        // A probe that cannot reach the backend must not block the form;
        // the server still rejects a real conflict at submit time
        match result {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!(probe = ?self, error = %e, "uniqueness probe failed");
                false
            }
        }
    }
}

// ============================================================================
// UniqueCheck
// ============================================================================

/// Handle returned by [`use_unique_check`]
pub struct UniqueCheck {
    probe: UniqueProbe,
    rule: Signal<UniqueRule>,
    debouncer: Signal<Debouncer>,
    checking: Signal<bool>,
    taken: Signal<bool>,
}

impl Clone for UniqueCheck {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for UniqueCheck {}

impl UniqueCheck {
    /// Whether a probe is in flight for the current input
    pub fn is_checking(&self) -> bool {
        *self.checking.read()
    }

    /// Whether the current input belongs to another record
    pub fn is_taken(&self) -> bool {
        *self.taken.read()
    }

    /// Whether the form may be submitted as far as uniqueness goes
    pub fn clear_to_submit(&self) -> bool {
        !self.is_checking() && !self.is_taken()
    }

    /// Swap the rule, e.g. when the dialog switches between add and edit
    pub fn set_rule(&mut self, rule: UniqueRule) {
        self.rule.set(rule);
        self.debouncer.write().cancel();
        self.checking.set(false);
        self.taken.set(false);
    }

    /// Feed a keystroke into the debounced check
    ///
    /// Arms the timer (superseding any pending ticket), sleeps the idle
    /// window and probes the backend only if the ticket is still current
    /// when it wakes. Inputs below the rule's minimum length clear the
    /// verdict without a round-trip.
    pub fn input_changed(&mut self, value: String) {
        let ticket = self.debouncer.write().arm();

        if !self.rule.peek().should_check(&value) {
            self.checking.set(false);
            self.taken.set(false);
            return;
        }

        self.checking.set(true);
        let mut this = *self;
        spawn(async move {
            let window = this.debouncer.peek().window();
            tokio::time::sleep(window).await;
            if !this.debouncer.peek().is_current(ticket) {
                return;
            }

            let exists = this.probe.exists(&ApiClient::new(), &value).await;

            // The ticket may have been superseded while the probe ran
            if !this.debouncer.peek().is_current(ticket) {
                return;
            }

            let verdict = this.rule.peek().resolve(&value, exists);
            this.taken.set(verdict == UniqueVerdict::Taken);
            this.checking.set(false);
        });
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Debounced server-side uniqueness validation for one form field
pub fn use_unique_check(probe: UniqueProbe, rule: UniqueRule) -> UniqueCheck {
    let rule = use_signal(move || rule);
    let debouncer = use_signal(Debouncer::default);
    let checking = use_signal(|| false);
    let taken = use_signal(|| false);

    UniqueCheck {
        probe,
        rule,
        debouncer,
        checking,
        taken,
    }
}
