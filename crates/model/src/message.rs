//! Internal messages
//!
//! Messages are the one entity whose toolbar exposes the `Send` row action
//! instead of the usual create dialog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tablero_core::SearchField;
use uuid::Uuid;

/// A message as listed in the inbox table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub asunto: String,
    pub remitente: String,
    pub destinatario: String,
    pub contenido: String,
    pub leido: bool,
    pub fecha: DateTime<Utc>,
}

/// Payload for `POST /api/mensajes/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessage {
    pub asunto: String,
    pub destinatario: String,
    pub contenido: String,
}

// ============================================================================
// Search Fields
// ============================================================================

/// Searchable message fields
///
/// Subjects only have a fuzzy endpoint; senders can also be matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageField {
    Asunto,
    Remitente,
}

impl SearchField for MessageField {
    fn query_key(&self) -> &'static str {
        match self {
            MessageField::Asunto => "asunto",
            MessageField::Remitente => "remitente",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MessageField::Asunto => "Asunto",
            MessageField::Remitente => "Remitente",
        }
    }

    fn exact_capable(&self) -> bool {
        matches!(self, MessageField::Remitente)
    }

    fn all() -> &'static [Self] {
        &[MessageField::Asunto, MessageField::Remitente]
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
    fn test_subject_is_fuzzy_only() {
        // The precise flag is meaningless for fields without an exact route
        assert_eq!(MessageField::Asunto.effective_precision(true), Precision::Fuzzy);
        assert_eq!(
            MessageField::Remitente.effective_precision(true),
            Precision::Exact
        );
    }
}
