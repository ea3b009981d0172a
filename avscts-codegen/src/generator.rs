//! Batch assembly of many documents into one output blob.

use avscts_schema::SchemaDocument;

use crate::typescript::DocumentGenerator;

/// Global banner placed once at the top of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Human-readable label of the schema source directory.
    pub source: String,
    /// Output file name.
    pub output: String,
}

impl Banner {
    /// Creates a new banner.
    #[must_use]
    pub fn new(source: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
        }
    }

    /// Renders the two banner comment lines.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "// Generated from Avro schemas in {}\n// Single-file output: {}\n",
            self.source, self.output
        )
    }
}

/// TypeScript generator for a batch of schema documents.
pub struct Generator {
    banner: Banner,
}

impl Generator {
    /// Creates a new generator with the given banner.
    #[must_use]
    pub fn new(banner: Banner) -> Self {
        Self { banner }
    }

    /// Generates one blob for all documents.
    ///
    /// Documents keep the order they are supplied in. Each becomes a section
    /// opened by a title comment; the banner precedes all sections.
    #[must_use]
    pub fn generate(&self, documents: &[SchemaDocument]) -> String {
        let sections: Vec<String> = documents.iter().map(generate_section).collect();
        tracing::info!("assembled {} section(s)", sections.len());

        format!("{}\n{}", self.banner.render(), sections.join("\n"))
    }
}

/// Generates one titled section.
fn generate_section(document: &SchemaDocument) -> String {
    format!(
        "// ===== {} (from {}) =====\n{}",
        document.name(),
        document.source,
        DocumentGenerator::new(document).generate()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use avscts_schema::parse_document;

    fn documents() -> Vec<SchemaDocument> {
        vec![
            parse_document(
                "ping.avsc",
                r#"{"type":"record","name":"Ping","fields":[{"name":"id","type":"long"}]}"#,
            )
            .expect("Failed to parse"),
            parse_document("ids.avsc", r#"{"type":"array","items":"string"}"#)
                .expect("Failed to parse"),
        ]
    }

    #[test]
    fn test_banner_render() {
        let banner = Banner::new("schemas", "events.ts");
        assert_eq!(
            banner.render(),
            "// Generated from Avro schemas in schemas\n// Single-file output: events.ts\n"
        );
    }

    #[test]
    fn test_generate_sections_in_order() {
        let generator = Generator::new(Banner::new("schemas", "events.ts"));
        let output = generator.generate(&documents());

        assert_eq!(
            output,
            "// Generated from Avro schemas in schemas\n\
             // Single-file output: events.ts\n\
             \n\
             // ===== Ping (from ping.avsc) =====\n\
             // Generated from ping.avsc. Do not edit manually.\n\
             export interface Ping {\n  id: number;\n}\n\
             \n\
             // ===== ids (from ids.avsc) =====\n\
             // Generated from ids.avsc. Do not edit manually.\n\
             export type ids = string[];\n"
        );
    }

    #[test]
    fn test_generate_single_banner() {
        let generator = Generator::new(Banner::new("schemas", "events.ts"));
        let output = generator.generate(&documents());

        assert_eq!(output.matches("// Generated from Avro schemas in").count(), 1);
        assert!(output.starts_with("// Generated from Avro schemas in schemas\n"));
        assert_eq!(output.matches("// ===== ").count(), 2);
        let ping = output.find("// ===== Ping").unwrap();
        let ids = output.find("// ===== ids").unwrap();
        assert!(ping < ids);
    }

    #[test]
    fn test_generate_keeps_supplied_order() {
        let mut reversed = documents();
        reversed.reverse();

        let output = Generator::new(Banner::new("s", "o.ts")).generate(&reversed);
        let ping = output.find("// ===== Ping").unwrap();
        let ids = output.find("// ===== ids").unwrap();
        assert!(ids < ping);
    }

    #[test]
    fn test_section_title_uses_declared_fixed_name() {
        let document = parse_document("md5.avsc", r#"{"type":"fixed","name":"Md5","size":16}"#)
            .expect("Failed to parse");

        let output = Generator::new(Banner::new("schemas", "events.ts")).generate(&[document]);
        assert!(output.contains("// ===== Md5 (from md5.avsc) =====\n"));
        assert!(output.contains("export type Md5 = any;"));
        assert!(!output.contains("export type md5"));
    }

    #[test]
    fn test_generate_no_documents() {
        let output = Generator::new(Banner::new("schemas", "events.ts")).generate(&[]);
        assert_eq!(
            output,
            "// Generated from Avro schemas in schemas\n// Single-file output: events.ts\n\n"
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let generator = Generator::new(Banner::new("schemas", "events.ts"));
        let docs = documents();
        assert_eq!(generator.generate(&docs), generator.generate(&docs));
    }
}
