//! Client records
//!
//! The client table is the busiest view of the dashboard and carries the
//! widest search decision table: four fields, each with an exact and a
//! fuzzy endpoint variant (eight routes in total).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tablero_core::SearchField;
use uuid::Uuid;

// ============================================================================
// Client
// ============================================================================

/// A client record as the backend sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: Uuid,
    /// First name
    pub nombre: String,
    /// Last name
    pub apellido: String,
    /// National document number
    pub documento: String,
    /// Phone number
    pub telefono: String,
    /// Street address, if registered
    pub direccion: Option<String>,
    /// Contact email, if registered
    pub email: Option<String>,
    /// When the client was registered
    pub fecha_registro: DateTime<Utc>,
}

/// Payload for `POST /api/clientes/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClient {
    pub nombre: String,
    pub apellido: String,
    pub documento: String,
    pub telefono: String,
    pub direccion: Option<String>,
    pub email: Option<String>,
}

/// Payload for `PATCH /api/clientes/:id` — absent fields stay unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateClient {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub documento: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub email: Option<String>,
}

impl Client {
    /// Display name used in delete confirmations and toasts
    pub fn display_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

// ============================================================================
// Search Fields
// ============================================================================

/// Searchable client fields; every one has an exact and a fuzzy variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Nombre,
    Apellido,
    Documento,
    Telefono,
}

impl SearchField for ClientField {
    fn query_key(&self) -> &'static str {
        match self {
            ClientField::Nombre => "nombre",
            ClientField::Apellido => "apellido",
            ClientField::Documento => "documento",
            ClientField::Telefono => "telefono",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ClientField::Nombre => "Nombre",
            ClientField::Apellido => "Apellido",
            ClientField::Documento => "Documento",
            ClientField::Telefono => "Teléfono",
        }
    }

    fn exact_capable(&self) -> bool {
        true
    }

    fn all() -> &'static [Self] {
        &[
            ClientField::Nombre,
            ClientField::Apellido,
            ClientField::Documento,
            ClientField::Telefono,
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tablero_core::Precision;

    #[test]
    fn test_decision_table_has_eight_routes() {
        // 4 fields x exact/fuzzy
        let mut routes = Vec::new();
        for field in ClientField::all() {
            for precise in [true, false] {
                routes.push((field.query_key(), field.effective_precision(precise)));
            }
        }
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), 8);
    }

    #[test]
    fn test_every_field_is_exact_capable() {
        for field in ClientField::all() {
            assert_eq!(field.effective_precision(true), Precision::Exact);
        }
    }

    #[test]
    fn test_display_name() {
        let client = Client {
            id: Uuid::new_v4(),
            nombre: "Ana".to_string(),
            apellido: "Gomez".to_string(),
            documento: "30111222".to_string(),
            telefono: "555-0101".to_string(),
            direccion: None,
            email: None,
            fecha_registro: Utc::now(),
        };
        assert_eq!(client.display_name(), "Ana Gomez");
    }
}
