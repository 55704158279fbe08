//! Error types for rapid_qa
//!
//! Only the boundary of the engine can fail: configuration, corpus loading
//! and (de)serialization. Scoring itself recovers locally from missing
//! statistics and degenerate input, so the ranking modules never return
//! these errors.

use std::path::Path;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, QaError>;

/// Main error type for rapid_qa
#[derive(Error, Debug, Clone)]
pub enum QaError {
    /// Configuration or invocation arguments are invalid
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A corpus directory or file could not be read
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl QaError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an I/O error tagged with the path that failed
    pub fn io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

impl From<serde_json::Error> for QaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
