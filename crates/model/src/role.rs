//! Roles and their permission matrices
//!
//! A role owns a full [`PermissionSnapshot`]; the session provider copies
//! the matrix of the logged-in user's role into the session.

use serde::{Deserialize, Serialize};
use tablero_core::{PermissionSnapshot, SearchField};
use uuid::Uuid;

/// A role definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    /// Role name, unique across the system
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Granted actions per entity
    pub permisos: PermissionSnapshot,
    /// System roles cannot be deleted
    pub es_sistema: bool,
}

/// Payload for `POST /api/roles/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRole {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub permisos: PermissionSnapshot,
}

/// Payload for `PATCH /api/roles/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRole {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub permisos: Option<PermissionSnapshot>,
}

// ============================================================================
// Search Fields
// ============================================================================

/// Searchable role fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleField {
    Nombre,
}

impl SearchField for RoleField {
    fn query_key(&self) -> &'static str {
        "nombre"
    }

    fn label(&self) -> &'static str {
        "Nombre"
    }

    fn exact_capable(&self) -> bool {
        true
    }

    fn all() -> &'static [Self] {
        &[RoleField::Nombre]
    }
}
