//! # avscts Codegen
//!
//! TypeScript declaration generation from Avro schemas.
//!
//! This crate provides:
//! - Primitive type mapping
//! - Recursive type resolution with hoisted record and enum declarations
//! - Record field translation with the optional (null union) policy
//! - Per-document generation and single-blob batch assembly

pub mod error;
pub mod generator;
pub mod typescript;

pub use error::CodegenError;
pub use generator::{Banner, Generator};
pub use typescript::{Declaration, DocumentGenerator, TypeResolver};

/// Generates TypeScript declarations from one Avro schema string.
///
/// # Arguments
/// * `source` - Source identifier recorded in the provenance header
/// * `json` - Avro schema content
///
/// # Returns
/// Generated TypeScript for the document.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_json(source: &str, json: &str) -> Result<String, CodegenError> {
    let document = avscts_schema::parse_document(source, json)?;
    Ok(DocumentGenerator::new(&document).generate())
}

/// Generates TypeScript declarations from an Avro schema file.
///
/// The file name becomes the document's source identifier.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let document = avscts_schema::parse_document(source, &json)?;
    Ok(DocumentGenerator::new(&document).generate())
}
