//! Custom error types for contest scoring
//!
//! This module defines the error hierarchy for the crate using thiserror.
//! Read-side and remote failures are absorbed close to where they happen;
//! what reaches callers is one of these variants.

use thiserror::Error;

/// The main error type for contest scoring operations
#[derive(Error, Debug)]
pub enum ScoringError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid input that cannot be clamped into shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Remote store errors
    #[error("Remote store error: {0}")]
    Remote(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl ScoringError {
    /// Create a "not found" error for contests
    pub fn contest_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contest",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for contestants
    pub fn contestant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contestant",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for backup slots
    pub fn backup_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Backup",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for ScoringError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ScoringError {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote(err.to_string())
    }
}

/// Result type alias for contest scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;
