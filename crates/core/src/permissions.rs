//! Permission model for Tablero
//!
//! The session provider hands the UI a [`PermissionSnapshot`]: a matrix of
//! granted actions per entity. The snapshot is read-only at the UI layer and
//! missing data always reads as denied. [`default_row_action`] is the pure
//! resolver that maps the matrix to the default action shown on a table row.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{EntityKind, RowAction};

// ============================================================================
// Actions
// ============================================================================

/// The actions tracked by the permission matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Read/list records
    Ver,
    /// Create records
    Crear,
    /// Edit records
    Editar,
    /// Delete records
    Eliminar,
    /// Void a document (sales/purchases)
    Anular,
    /// Manage restorations
    Gestionar,
}

impl Action {
    /// The key the backend uses for this action in the permission matrix
    pub fn key(&self) -> &'static str {
        match self {
            Action::Ver => "ver",
            Action::Crear => "crear",
            Action::Editar => "editar",
            Action::Eliminar => "eliminar",
            Action::Anular => "anular",
            Action::Gestionar => "gestionar",
        }
    }
}

// ============================================================================
// Permission Snapshot
// ============================================================================

/// A matrix of granted `{action: {entity: bool}}` permissions
///
/// Owned by the external session provider; the dashboard only reads it.
/// Entities are keyed by their permission key (the API path segment), so
/// snapshots can also carry entities this build does not render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    grants: HashMap<Action, HashSet<String>>,
}

impl PermissionSnapshot {
    /// Create an empty (deny-all) snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant an action on an entity (builder style, used by the session
    /// provider and by tests)
    pub fn grant(mut self, action: Action, entity: EntityKind) -> Self {
        self.grants
            .entry(action)
            .or_default()
            .insert(entity.permission_key().to_string());
        self
    }

    /// Grant an action on an entity identified by its raw key
    pub fn grant_key(mut self, action: Action, entity_key: impl Into<String>) -> Self {
        self.grants.entry(action).or_default().insert(entity_key.into());
        self
    }

    /// Whether the action is granted for the entity; missing data is `false`
    pub fn allows(&self, action: Action, entity: EntityKind) -> bool {
        self.grants
            .get(&action)
            .map(|entities| entities.contains(entity.permission_key()))
            .unwrap_or(false)
    }

    /// Whether any action at all is granted
    pub fn is_empty(&self) -> bool {
        self.grants.values().all(|entities| entities.is_empty())
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Fallback action per entity when neither edit nor delete is granted
fn fallback_action(entity: EntityKind) -> RowAction {
    match entity {
        EntityKind::Client | EntityKind::Image | EntityKind::Message | EntityKind::Audit => {
            RowAction::View
        }
        EntityKind::Role => RowAction::ViewElements,
        EntityKind::User | EntityKind::Tax => RowAction::None,
    }
}

/// Resolve the default [`RowAction`] for an entity's table rows
///
/// Priority: `Edit` if the edit permission is set, else `Delete` if the
/// delete permission is set, else the entity's fallback. An administrator
/// session short-circuits to the highest-priority action regardless of the
/// matrix contents. Pure lookup, no side effects.
pub fn default_row_action(
    snapshot: &PermissionSnapshot,
    entity: EntityKind,
    is_admin: bool,
) -> RowAction {
    if is_admin {
        return RowAction::Edit;
    }

    if snapshot.allows(Action::Editar, entity) {
        RowAction::Edit
    } else if snapshot.allows(Action::Eliminar, entity) {
        RowAction::Delete
    } else {
        fallback_action(entity)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_snapshot_denies_everything() {
        let snapshot = PermissionSnapshot::new();
        assert!(snapshot.is_empty());
        for entity in EntityKind::ALL {
            assert!(!snapshot.allows(Action::Ver, entity));
            assert!(!snapshot.allows(Action::Eliminar, entity));
        }
    }

    #[test]
    fn test_grant_is_per_entity() {
        let snapshot = PermissionSnapshot::new().grant(Action::Editar, EntityKind::Tax);
        assert!(snapshot.allows(Action::Editar, EntityKind::Tax));
        assert!(!snapshot.allows(Action::Editar, EntityKind::Client));
        assert!(!snapshot.allows(Action::Eliminar, EntityKind::Tax));
    }

    #[test]
    fn test_resolver_priority_edit_over_delete() {
        let snapshot = PermissionSnapshot::new()
            .grant(Action::Editar, EntityKind::Client)
            .grant(Action::Eliminar, EntityKind::Client);
        assert_eq!(
            default_row_action(&snapshot, EntityKind::Client, false),
            RowAction::Edit
        );
    }

    #[test]
    fn test_resolver_delete_when_no_edit() {
        let snapshot = PermissionSnapshot::new().grant(Action::Eliminar, EntityKind::Tax);
        assert_eq!(
            default_row_action(&snapshot, EntityKind::Tax, false),
            RowAction::Delete
        );
    }

    #[test]
    fn test_resolver_fallbacks() {
        let snapshot = PermissionSnapshot::new();
        assert_eq!(
            default_row_action(&snapshot, EntityKind::Client, false),
            RowAction::View
        );
        assert_eq!(
            default_row_action(&snapshot, EntityKind::Role, false),
            RowAction::ViewElements
        );
        assert_eq!(
            default_row_action(&snapshot, EntityKind::Tax, false),
            RowAction::None
        );
    }

    #[test]
    fn test_admin_short_circuits() {
        let snapshot = PermissionSnapshot::new();
        assert_eq!(
            default_row_action(&snapshot, EntityKind::Client, true),
            RowAction::Edit
        );
    }

    #[test]
    fn test_snapshot_roundtrips_through_json() {
        let snapshot = PermissionSnapshot::new()
            .grant(Action::Ver, EntityKind::Client)
            .grant_key(Action::Anular, "ventas");
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PermissionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
