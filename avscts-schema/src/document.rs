//! Schema documents.
//!
//! A document pairs the parsed root type of one `.avsc` file with the
//! identifier of the source it was read from.

use crate::types::SchemaType;

/// File extension of Avro schema documents.
pub const SCHEMA_EXTENSION: &str = "avsc";

/// One parsed Avro schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    /// Source identifier (usually the file name, e.g. `ping.avsc`).
    pub source: String,
    /// Root schema type.
    pub schema: SchemaType,
}

impl SchemaDocument {
    /// Creates a new schema document.
    #[must_use]
    pub fn new(source: impl Into<String>, schema: SchemaType) -> Self {
        Self {
            source: source.into(),
            schema,
        }
    }

    /// Returns the document's top-level name.
    ///
    /// This is the root record or enum name when one is declared, otherwise
    /// the source identifier without its `.avsc` extension.
    #[must_use]
    pub fn name(&self) -> &str {
        self.schema
            .explicit_name()
            .unwrap_or_else(|| self.source_stem())
    }

    /// Returns the source identifier without its `.avsc` extension.
    #[must_use]
    pub fn source_stem(&self) -> &str {
        let file_name = self
            .source
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.source);
        file_name
            .strip_suffix(SCHEMA_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
            .unwrap_or(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Primitive, RecordDef};

    #[test]
    fn test_name_prefers_declared_name() {
        let doc = SchemaDocument::new(
            "ping.avsc",
            SchemaType::Record(RecordDef::new(Some("Ping".to_string()))),
        );
        assert_eq!(doc.name(), "Ping");
    }

    #[test]
    fn test_name_falls_back_to_source_stem() {
        let doc = SchemaDocument::new("user_ids.avsc", SchemaType::Primitive(Primitive::String));
        assert_eq!(doc.name(), "user_ids");

        let anonymous = SchemaDocument::new("anon.avsc", SchemaType::Record(RecordDef::default()));
        assert_eq!(anonymous.name(), "anon");
    }

    #[test]
    fn test_source_stem() {
        let doc = |source: &str| SchemaDocument::new(source, SchemaType::Primitive(Primitive::Null));

        assert_eq!(doc("schemas/ping.avsc").source_stem(), "ping");
        assert_eq!(doc("ping.v2.avsc").source_stem(), "ping.v2");
        assert_eq!(doc("ping.json").source_stem(), "ping.json");
        assert_eq!(doc("avsc").source_stem(), "avsc");
    }
}
