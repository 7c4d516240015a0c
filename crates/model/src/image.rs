//! Uploaded images

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tablero_core::SearchField;
use uuid::Uuid;

/// An uploaded image record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: Uuid,
    pub nombre: String,
    /// Public URL served by the backend
    pub url: String,
    pub descripcion: Option<String>,
    pub fecha_subida: DateTime<Utc>,
}

/// Payload for `POST /api/imagenes/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateImage {
    pub nombre: String,
    pub url: String,
    pub descripcion: Option<String>,
}

/// Payload for `PATCH /api/imagenes/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateImage {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

// ============================================================================
// Search Fields
// ============================================================================

/// Searchable image fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    Nombre,
}

impl SearchField for ImageField {
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
        &[ImageField::Nombre]
    }
}
