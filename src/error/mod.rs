//! Error types and Result aliases for the env validator.
//!
//! Validation findings (issues and warnings) are data, not errors; see
//! [`crate::rules`]. This module covers operational failures only: reading
//! files and binding values into typed settings.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for env validator operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Binding env values into typed settings failed: a required variable
    /// is absent or a value does not fit its field.
    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
