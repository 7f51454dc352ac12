// ABOUTME: Error types for metadata scraping operations.
// ABOUTME: Provides ScrapeError with InvalidDocument, Manifest, and Io variants.

use std::fmt;
use thiserror::Error;

/// Errors that can cross the scraping boundary.
///
/// Extraction misses are never errors; they are threaded through as `None`.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The input could not be turned into a queryable document.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A provider manifest was malformed or named an unknown provider.
    #[error("invalid provider manifest: {0}")]
    Manifest(String),

    /// Reading a document or manifest from disk failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// Creates an InvalidDocument error from any displayable cause.
    pub fn invalid_document(err: impl fmt::Display) -> Self {
        ScrapeError::InvalidDocument(err.to_string())
    }

    /// Creates a Manifest error with a custom message.
    pub fn manifest(msg: impl Into<String>) -> Self {
        ScrapeError::Manifest(msg.into())
    }

    /// Creates an Io error tagged with the path being read.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidDocument error.
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, ScrapeError::InvalidDocument(_))
    }

    /// Returns true if this is a Manifest error.
    pub fn is_manifest(&self) -> bool {
        matches!(self, ScrapeError::Manifest(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrapeError>;
