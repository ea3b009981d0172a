//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on {element}")]
    MissingAttribute {
        /// Element kind (record, enum, field).
        element: String,
        /// Attribute name.
        attribute: String,
    },
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Duplicate enum symbol.
    #[error("duplicate symbol '{symbol}' in enum '{enum_name}'")]
    DuplicateSymbol {
        /// Enum name.
        enum_name: String,
        /// Repeated symbol.
        symbol: String,
    },

    /// Duplicate field name within one record.
    #[error("duplicate field '{field}' in record '{record}'")]
    DuplicateField {
        /// Record name.
        record: String,
        /// Repeated field name.
        field: String,
    },

    /// Named reference with no matching declaration in the document.
    #[error("unresolved type reference '{name}'")]
    UnresolvedReference {
        /// Referenced type name.
        name: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }
}
