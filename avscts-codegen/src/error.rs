//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Generation itself never fails: unsupported shapes fall back to `any` and
/// dangling references pass through. Only reading and parsing input can fail.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] avscts_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
