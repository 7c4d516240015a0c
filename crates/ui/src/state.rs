//! Application State Management for Tablero
//!
//! This module provides centralized state management using Dioxus 0.7 Signals.
//! It holds the session handed over by the external session provider, the
//! active sidebar page and the toast queue. Per-entity query state lives in
//! the views themselves and is dropped when a view unmounts.

use dioxus::prelude::*;
use tablero_core::{Action, EntityKind, PermissionSnapshot, RowAction, default_row_action};

// ============================================================================
// Page Navigation
// ============================================================================

/// The entity view currently shown in the content area
///
/// Navigation is flat: one sidebar entry per entity, in
/// [`EntityKind::ALL`] order.
pub static ACTIVE_PAGE: GlobalSignal<EntityKind> = Signal::global(|| EntityKind::Client);

// ============================================================================
// Session State
// ============================================================================

/// The logged-in account as the session provider hands it over
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    /// Login name shown in the header
    pub nombre_usuario: String,
    /// Name of the assigned role
    pub rol: String,
    /// Administrator sessions bypass the permission matrix
    pub es_admin: bool,
    /// Granted actions per entity
    pub permisos: PermissionSnapshot,
}

/// Session container; `None` before the provider installs a user
///
/// Every permission read goes through this struct so that a missing
/// session uniformly reads as denied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    user: Option<SessionUser>,
}

impl SessionState {
    /// Create an empty (logged-out, deny-all) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the logged-in user; called by the session provider
    pub fn install(&mut self, user: SessionUser) {
        tracing::info!(user = %user.nombre_usuario, rol = %user.rol, "session installed");
        self.user = Some(user);
    }

    /// Drop the session, returning every view to deny-all
    pub fn clear(&mut self) {
        self.user = None;
    }

    /// The logged-in user, if any
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Whether this is an administrator session
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.es_admin)
    }

    /// Whether the action is granted for the entity
    ///
    /// Administrators pass every check; a missing session denies all.
    pub fn allows(&self, action: Action, entity: EntityKind) -> bool {
        match &self.user {
            Some(user) => user.es_admin || user.permisos.allows(action, entity),
            None => false,
        }
    }

    /// The default action shown on the entity's table rows
    pub fn default_action(&self, entity: EntityKind) -> RowAction {
        match &self.user {
            Some(user) => default_row_action(&user.permisos, entity, user.es_admin),
            None => RowAction::None,
        }
    }
}

/// Global session state
pub static SESSION: GlobalSignal<SessionState> = Signal::global(SessionState::new);

/// Install a session into the global state
///
/// The desktop shell calls this at startup; a host embedding the UI can
/// call it again after its own login flow.
pub fn install_session(user: SessionUser) {
    SESSION.write().install(user);
}

// ============================================================================
// Toast State
// ============================================================================

/// Visual category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Spinner toast while a request is in flight
    Loading,
    Success,
    Error,
}

/// One entry in the toast viewport
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for dismissing a specific toast
///
/// Loading toasts are dismissed by whoever raised them once the request
/// resolves; a stale handle (already dismissed) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastHandle(u64);

/// FIFO toast queue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStore {
    /// Keep at most this many toasts on screen
    const CAP: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// The toasts currently visible, oldest first
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastHandle {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > Self::CAP {
            self.toasts.remove(0);
        }
        ToastHandle(self.next_id)
    }

    /// Show a spinner toast; the caller dismisses it when done
    pub fn loading(&mut self, message: impl Into<String>) -> ToastHandle {
        self.push(ToastKind::Loading, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastHandle {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastHandle {
        self.push(ToastKind::Error, message)
    }

    /// Remove the toast behind the handle, if it is still visible
    pub fn dismiss(&mut self, handle: ToastHandle) {
        self.toasts.retain(|t| t.id != handle.0);
    }

    /// Remove a toast by its raw id (used by the viewport's close button)
    pub fn dismiss_id(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Global toast queue
pub static TOASTS: GlobalSignal<ToastStore> = Signal::global(ToastStore::new);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn operator() -> SessionUser {
        SessionUser {
            nombre_usuario: "mreyes".to_string(),
            rol: "Operador".to_string(),
            es_admin: false,
            permisos: PermissionSnapshot::new()
                .grant(Action::Ver, EntityKind::Client)
                .grant(Action::Eliminar, EntityKind::Client),
        }
    }

    #[test]
    fn test_missing_session_denies_everything() {
        let session = SessionState::new();
        assert!(!session.allows(Action::Ver, EntityKind::Client));
        assert_eq!(session.default_action(EntityKind::Client), RowAction::None);
    }

    #[test]
    fn test_installed_session_reads_the_matrix() {
        let mut session = SessionState::new();
        session.install(operator());

        assert!(session.allows(Action::Ver, EntityKind::Client));
        assert!(!session.allows(Action::Crear, EntityKind::Client));
        assert_eq!(session.default_action(EntityKind::Client), RowAction::Delete);
    }

    #[test]
    fn test_admin_bypasses_the_matrix() {
        let mut session = SessionState::new();
        session.install(SessionUser {
            nombre_usuario: "admin".to_string(),
            rol: "Administrador".to_string(),
            es_admin: true,
            permisos: PermissionSnapshot::new(),
        });

        assert!(session.allows(Action::Eliminar, EntityKind::Tax));
        assert_eq!(session.default_action(EntityKind::Tax), RowAction::Edit);
    }

    #[test]
    fn test_clear_returns_to_deny_all() {
        let mut session = SessionState::new();
        session.install(operator());
        session.clear();
        assert!(!session.allows(Action::Ver, EntityKind::Client));
    }

    #[test]
    fn test_toast_handles_dismiss_their_own_toast() {
        let mut store = ToastStore::new();
        let loading = store.loading("Cargando...");
        store.success("Guardado");
        assert_eq!(store.visible().len(), 2);

        store.dismiss(loading);
        assert_eq!(store.visible().len(), 1);
        assert_eq!(store.visible()[0].kind, ToastKind::Success);

        // Dismissing again is a no-op
        store.dismiss(loading);
        assert_eq!(store.visible().len(), 1);
    }

    #[test]
    fn test_toast_queue_is_capped() {
        let mut store = ToastStore::new();
        for i in 0..10 {
            store.error(format!("error {i}"));
        }
        assert_eq!(store.visible().len(), ToastStore::CAP);
        assert_eq!(store.visible()[0].message, "error 5");
    }
}
