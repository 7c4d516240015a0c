//! Audit log entries
//!
//! The audit log is read-only: no create/update payloads exist and the
//! table never shows mutation actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tablero_core::SearchField;
use uuid::Uuid;

/// One audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    /// Login name of the account that performed the action
    pub usuario: String,
    /// Action performed (e.g. "crear", "eliminar")
    pub accion: String,
    /// Entity the action touched
    pub entidad: String,
    pub detalle: Option<String>,
    pub fecha: DateTime<Utc>,
}

// ============================================================================
// Search Fields
// ============================================================================

/// Searchable audit fields; the log only offers fuzzy matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditField {
    Usuario,
    Accion,
}

impl SearchField for AuditField {
    fn query_key(&self) -> &'static str {
        match self {
            AuditField::Usuario => "usuario",
            AuditField::Accion => "accion",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AuditField::Usuario => "Usuario",
            AuditField::Accion => "Acción",
        }
    }

    fn exact_capable(&self) -> bool {
        false
    }

    fn all() -> &'static [Self] {
        &[AuditField::Usuario, AuditField::Accion]
    }
}
