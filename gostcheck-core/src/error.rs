//! Error types for loading documents and configuration.
//!
//! Only input problems are errors. A document that is missing a required
//! block is not an error: validators report it as a finding.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a document from being validated at all
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The path does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// No preprocessor accepts this file extension
    #[error("Unsupported document format (expected .docx or .txt): {0}")]
    UnsupportedFormat(PathBuf),

    /// The container itself could not be opened (e.g. not a zip archive)
    #[error("Not a valid document container: {path}: {reason}")]
    InvalidContainer { path: PathBuf, reason: String },

    /// The container opened but its contents could not be read
    #[error("Unreadable document contents: {path}: {reason}")]
    UnreadableContents { path: PathBuf, reason: String },

    /// Reading the file from disk failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Attach a path to an extraction error raised without one.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self {
            DocumentError::InvalidContainer { reason, .. } => {
                DocumentError::InvalidContainer { path, reason }
            }
            DocumentError::UnreadableContents { reason, .. } => {
                DocumentError::UnreadableContents { path, reason }
            }
            other => other,
        }
    }

    pub(crate) fn invalid_container(reason: impl ToString) -> Self {
        DocumentError::InvalidContainer {
            path: PathBuf::new(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn unreadable(reason: impl ToString) -> Self {
        DocumentError::UnreadableContents {
            path: PathBuf::new(),
            reason: reason.to_string(),
        }
    }
}

/// Failures loading a YAML configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
