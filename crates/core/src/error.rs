//! Error types for Tablero
//!
//! This module provides unified error handling across the dashboard,
//! covering transport failures, backend status errors, session problems,
//! and serialization issues.

use thiserror::Error;

/// The main error type for Tablero
#[derive(Debug, Error)]
pub enum PanelError {
    // ========================================================================
    // Backend Errors
    // ========================================================================
    /// The backend answered with a non-success status
    #[error("Backend returned status {status}: {message}")]
    ApiStatus { status: u16, message: String },

    /// Network or transport failure before a status was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be deserialized
    #[error("Failed to parse response: {0}")]
    Parse(String),

    // ========================================================================
    // Session Errors
    // ========================================================================
    /// No session is active or the session is missing required data
    #[error("Session error: {0}")]
    Session(String),

    /// The current role does not allow the attempted operation
    #[error("Permission denied for '{action}' on '{entity}'")]
    PermissionDenied { action: String, entity: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PanelError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        PanelError::Transport(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        PanelError::Parse(msg.into())
    }

    /// Create a session error
    pub fn session(msg: impl Into<String>) -> Self {
        PanelError::Session(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        PanelError::Internal(msg.into())
    }

    /// Whether the error carries a backend status code
    pub fn status(&self) -> Option<u16> {
        match self {
            PanelError::ApiStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using `PanelError`
pub type PanelResult<T> = Result<T, PanelError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::ApiStatus {
            status: 404,
            message: "no encontrado".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned status 404: no encontrado");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = PanelError::transport("connection refused");
        assert_eq!(err.status(), None);
    }
}
