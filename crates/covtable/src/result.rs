//! Result and error types for covtable.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for covtable operations
pub type CovResult<T> = Result<T, CovError>;

/// Errors that can occur while loading or saving a coverage table
#[derive(Debug, Error)]
pub enum CovError {
    /// The document does not match the coverage report schema
    #[error("Malformed coverage report: {message}")]
    MalformedInput {
        /// What was wrong with the document
        message: String,
    },

    /// The document is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

impl CovError {
    /// Create a malformed input error
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create an I/O error tied to a path
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error reports a schema violation
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}
