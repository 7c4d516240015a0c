//! Dashboard user accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tablero_core::SearchField;
use uuid::Uuid;

/// A dashboard user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Login name, unique across the system
    pub nombre_usuario: String,
    pub email: String,
    /// Name of the role assigned to this account
    pub rol: String,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
}

/// Payload for `POST /api/usuarios/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub nombre_usuario: String,
    pub email: String,
    pub rol: String,
    pub clave: String,
}

/// Payload for `PATCH /api/usuarios/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub nombre_usuario: Option<String>,
    pub email: Option<String>,
    pub rol: Option<String>,
    pub activo: Option<bool>,
}

// ============================================================================
// Search Fields
// ============================================================================

/// Searchable user fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    NombreUsuario,
    Email,
}

impl SearchField for UserField {
    fn query_key(&self) -> &'static str {
        match self {
            UserField::NombreUsuario => "nombre_usuario",
            UserField::Email => "email",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserField::NombreUsuario => "Nombre de usuario",
            UserField::Email => "Email",
        }
    }

    fn exact_capable(&self) -> bool {
        true
    }

    fn all() -> &'static [Self] {
        &[UserField::NombreUsuario, UserField::Email]
    }
}
