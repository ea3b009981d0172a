//! Per-document generation.

use std::collections::HashSet;

use avscts_schema::SchemaDocument;

use super::declarations::Declaration;
use super::resolver::TypeResolver;

/// Generator for the TypeScript unit of one schema document.
pub struct DocumentGenerator<'a> {
    document: &'a SchemaDocument,
}

impl<'a> DocumentGenerator<'a> {
    /// Creates a new document generator.
    #[must_use]
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self { document }
    }

    /// Resolves the document root and returns the collected declarations.
    ///
    /// The root is resolved once with the document name as context. If no
    /// declaration carries the document name afterwards, an alias binding the
    /// name to the root type expression is appended.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration> {
        let name = self.document.name();
        let mut declarations = Vec::new();
        let root = TypeResolver::new(&mut declarations).resolve(&self.document.schema, name);

        if !declarations.iter().any(|decl| decl.name() == name) {
            declarations.push(Declaration::Alias {
                name: name.to_string(),
                target: root,
            });
        }

        warn_on_collisions(&self.document.source, &declarations);
        declarations
    }

    /// Generates the document's TypeScript text.
    ///
    /// The text is a provenance line followed by all declarations in emission
    /// order, separated by blank lines.
    #[must_use]
    pub fn generate(&self) -> String {
        let declarations = self.declarations();
        tracing::debug!(
            "{}: {} declaration(s)",
            self.document.source,
            declarations.len()
        );

        let body = declarations
            .iter()
            .map(Declaration::render)
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "// Generated from {}. Do not edit manually.\n{}\n",
            self.document.source, body
        )
    }
}

/// Reports declaration names emitted more than once in one document.
///
/// Duplicates are kept in the output as emitted.
fn warn_on_collisions(source: &str, declarations: &[Declaration]) {
    let mut seen = HashSet::new();
    for decl in declarations {
        if !seen.insert(decl.name()) {
            tracing::warn!(
                "{}: declaration '{}' is emitted more than once",
                source,
                decl.name()
            );
        }
    }
}
