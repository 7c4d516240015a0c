//! Tax definitions
//!
//! Taxes carry the short unique `codigo` whose availability is checked
//! server-side while the add/edit form is being typed.

use serde::{Deserialize, Serialize};
use tablero_core::SearchField;
use uuid::Uuid;

/// A tax definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tax {
    pub id: Uuid,
    /// Short code, unique across the system (e.g. "IVA21")
    pub codigo: String,
    pub nombre: String,
    /// Percentage applied, 0..=100
    pub porcentaje: f64,
    pub activo: bool,
}

/// Payload for `POST /api/impuestos/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTax {
    pub codigo: String,
    pub nombre: String,
    pub porcentaje: f64,
}

/// Payload for `PATCH /api/impuestos/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTax {
    pub codigo: Option<String>,
    pub nombre: Option<String>,
    pub porcentaje: Option<f64>,
    pub activo: Option<bool>,
}

// ============================================================================
// Search Fields
// ============================================================================

/// Searchable tax fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxField {
    Codigo,
    Nombre,
}

impl SearchField for TaxField {
    fn query_key(&self) -> &'static str {
        match self {
            TaxField::Codigo => "codigo",
            TaxField::Nombre => "nombre",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TaxField::Codigo => "Código",
            TaxField::Nombre => "Nombre",
        }
    }

    fn exact_capable(&self) -> bool {
        true
    }

    fn all() -> &'static [Self] {
        &[TaxField::Codigo, TaxField::Nombre]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_payload_skips_untouched_fields() {
        let update = UpdateTax {
            porcentaje: Some(10.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["porcentaje"], 10.5);
        assert!(json["codigo"].is_null());
    }
}
