//! Error types for the generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for a generation run.
///
/// Every variant is fatal: the run stops and nothing is written.
#[derive(Debug, Error)]
pub enum Error {
    /// Schema directory or file could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Schema document is malformed.
    #[error("failed to parse '{document}': {source}")]
    Parse {
        /// Source identifier of the document.
        document: String,
        /// Underlying parse error.
        source: avscts_schema::ParseError,
    },

    /// Schema document failed strict validation.
    #[error("invalid schema '{document}': {source}")]
    Invalid {
        /// Source identifier of the document.
        document: String,
        /// Validation failure.
        source: avscts_schema::SchemaError,
    },

    /// Output could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
