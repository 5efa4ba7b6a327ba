//! Error types for anchorhead operations
//!
//! Only configuration paths can fail. The render path (scan, annotate,
//! menu) degrades to passing content through and never surfaces an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::sanitize::SanitizeError;

/// Result type alias for anchorhead operations
pub type AnchorheadResult<T> = Result<T, AnchorheadError>;

/// Errors raised while loading, validating or persisting settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read or written
    #[error("Settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings document is not valid JSON for the declared shape
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A declared option failed sanitization
    #[error("Option '{option}' could not be sanitized: {source}")]
    Sanitize {
        option: String,
        #[source]
        source: SanitizeError,
    },

    /// Submitted option map was not a JSON object
    #[error("Expected a JSON object of options, got {0}")]
    NotAnObject(&'static str),
}

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum AnchorheadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sanitize(#[from] SanitizeError),

    /// Blocking render task panicked or was cancelled
    #[error("Render task failed: {0}")]
    TaskFailed(String),
}

impl From<tokio::task::JoinError> for AnchorheadError {
    fn from(error: tokio::task::JoinError) -> Self {
        AnchorheadError::TaskFailed(error.to_string())
    }
}
