//! Error types for stepviz.
//!
//! All fallible operations return `Result<T, VizError>` instead of
//! panicking. Algorithm-level terminal conditions (target not found,
//! cycle detected) are modeled as completion states, not errors.

use thiserror::Error;

/// Result type alias for stepviz operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all stepviz operations.
#[derive(Debug, Error)]
pub enum VizError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== Checkpoint Errors =====
    /// Checkpoint integrity violation.
    #[error("Checkpoint integrity violation: hash mismatch")]
    CheckpointIntegrity,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ===== Structure Errors =====
    /// Malformed structure (e.g., adjacency entry out of range).
    #[error("Structure error: {0}")]
    Structure(String),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a structure error.
    #[must_use]
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }
}
