//! # avscts Schema
//!
//! Avro schema parser and type definitions.
//!
//! This crate provides:
//! - JSON parsing of Avro `.avsc` documents into a closed [`SchemaType`]
//! - Type definitions for records, enums, fields and primitives
//! - Schema documents pairing a source identifier with its parsed root
//! - Opt-in validation (duplicate names, unresolved references)

pub mod document;
pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use document::SchemaDocument;
pub use error::{ParseError, SchemaError};
pub use parser::{parse_document, parse_schema, parse_value};
pub use types::{EnumDef, FieldDef, Primitive, RecordDef, SchemaType};
pub use validation::{declared_names, unresolved_references, validate_schema};
