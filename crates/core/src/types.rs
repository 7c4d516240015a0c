//! Shared types for Tablero
//!
//! This module contains the entity catalog, the row-action variants used by
//! table toolbars and per-row menus, and the search precision flag that
//! selects between the backend's exact and fuzzy search endpoints.

use serde::{Deserialize, Serialize};

// ============================================================================
// Entity Catalog
// ============================================================================

/// The business entities managed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Client records
    Client,
    /// Dashboard user accounts
    User,
    /// Roles and their permission matrices
    Role,
    /// Tax definitions (code + percentage)
    Tax,
    /// Uploaded images
    Image,
    /// Internal messages
    Message,
    /// Audit log entries (read-only)
    Audit,
}

impl EntityKind {
    /// All entities, in sidebar order
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Client,
        EntityKind::User,
        EntityKind::Role,
        EntityKind::Tax,
        EntityKind::Image,
        EntityKind::Message,
        EntityKind::Audit,
    ];

    /// The path segment used by the backend REST API
    pub fn api_path(&self) -> &'static str {
        match self {
            EntityKind::Client => "clientes",
            EntityKind::User => "usuarios",
            EntityKind::Role => "roles",
            EntityKind::Tax => "impuestos",
            EntityKind::Image => "imagenes",
            EntityKind::Message => "mensajes",
            EntityKind::Audit => "auditoria",
        }
    }

    /// The key used in the permission matrix
    pub fn permission_key(&self) -> &'static str {
        self.api_path()
    }

    /// Display title for page headers and the sidebar
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Client => "Clientes",
            EntityKind::User => "Usuarios",
            EntityKind::Role => "Roles",
            EntityKind::Tax => "Impuestos",
            EntityKind::Image => "Imágenes",
            EntityKind::Message => "Mensajes",
            EntityKind::Audit => "Auditoría",
        }
    }

    /// Icon for sidebar navigation
    pub fn icon(&self) -> &'static str {
        match self {
            EntityKind::Client => "👥",
            EntityKind::User => "🧑‍💼",
            EntityKind::Role => "🛡️",
            EntityKind::Tax => "🧾",
            EntityKind::Image => "🖼️",
            EntityKind::Message => "✉️",
            EntityKind::Audit => "📜",
        }
    }

    /// Rows fetched per page for this entity
    pub fn page_size(&self) -> u32 {
        match self {
            // Audit entries are compact; show more of them at once
            EntityKind::Audit => 15,
            _ => 8,
        }
    }

    /// Whether the entity supports create/edit/delete at all
    pub fn mutable(&self) -> bool {
        !matches!(self, EntityKind::Audit)
    }
}

// ============================================================================
// Row Actions
// ============================================================================

/// The single mutating/viewing operation exposed for a table row or toolbar,
/// chosen from permissions or re-selected by the user via the row menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowAction {
    /// No action available
    #[default]
    None,
    /// Open the create dialog
    Add,
    /// Open the edit dialog
    Edit,
    /// Open the delete confirmation
    Delete,
    /// Open the read-only detail view
    View,
    /// Open the search form
    Search,
    /// Compose/send (messages only)
    Send,
    /// Drill into the row's child elements
    ViewElements,
}

impl RowAction {
    /// Display label for menus and buttons
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::None => "—",
            RowAction::Add => "Agregar",
            RowAction::Edit => "Editar",
            RowAction::Delete => "Eliminar",
            RowAction::View => "Ver",
            RowAction::Search => "Buscar",
            RowAction::Send => "Enviar",
            RowAction::ViewElements => "Ver elementos",
        }
    }

    /// Whether the action mutates backend state
    pub fn is_mutation(&self) -> bool {
        matches!(self, RowAction::Add | RowAction::Edit | RowAction::Delete | RowAction::Send)
    }
}

// ============================================================================
// Search Precision
// ============================================================================

/// Server-side distinction between equality match and substring match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Precision {
    /// Equality match (`exactitud=EXACTA`)
    Exact,
    /// Substring/partial match (`exactitud=INEXACTA`)
    #[default]
    Fuzzy,
}

impl Precision {
    /// The value of the `exactitud` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            Precision::Exact => "EXACTA",
            Precision::Fuzzy => "INEXACTA",
        }
    }

    /// Build from a boolean "precise" flag
    pub fn from_precise(precise: bool) -> Self {
        if precise { Precision::Exact } else { Precision::Fuzzy }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_paths_are_distinct() {
        let mut paths: Vec<&str> = EntityKind::ALL.iter().map(|e| e.api_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_audit_is_read_only() {
        assert!(!EntityKind::Audit.mutable());
        assert!(EntityKind::Client.mutable());
    }

    #[test]
    fn test_precision_query_values() {
        assert_eq!(Precision::Exact.as_query(), "EXACTA");
        assert_eq!(Precision::Fuzzy.as_query(), "INEXACTA");
        assert_eq!(Precision::from_precise(true), Precision::Exact);
        assert_eq!(Precision::from_precise(false), Precision::Fuzzy);
    }

    #[test]
    fn test_row_action_mutations() {
        assert!(RowAction::Delete.is_mutation());
        assert!(RowAction::Send.is_mutation());
        assert!(!RowAction::View.is_mutation());
        assert!(!RowAction::Search.is_mutation());
    }
}
