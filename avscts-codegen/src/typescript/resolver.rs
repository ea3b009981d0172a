//! Recursive type resolution.
//!
//! Converts one [`SchemaType`] into a TypeScript type expression. Records and
//! enums are hoisted: each one appends a [`Declaration`] to the caller's
//! collection and resolves to its name.

use avscts_schema::{EnumDef, RecordDef, SchemaType};

use super::declarations::Declaration;
use super::fields::translate_field;
use super::naming::{ENUM_SUFFIX, ITEM_SUFFIX, VALUE_SUFFIX, derive_name};
use super::primitives::{ANY_TYPE, ts_primitive};

/// Resolver for TypeScript type expressions.
pub struct TypeResolver<'a> {
    declarations: &'a mut Vec<Declaration>,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver appending hoisted declarations to `declarations`.
    #[must_use]
    pub fn new(declarations: &'a mut Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Resolves a schema type to a TypeScript type expression.
    ///
    /// `context` names anonymous records and enums. Named references are
    /// returned verbatim without checking that they are declared anywhere.
    pub fn resolve(&mut self, schema: &SchemaType, context: &str) -> String {
        match schema {
            SchemaType::Primitive(primitive) => ts_primitive(*primitive).to_string(),
            SchemaType::Named(name) => name.clone(),
            SchemaType::Union(members) => self.resolve_union(members, context),
            SchemaType::Enum(enum_def) => self.resolve_enum(enum_def, context),
            SchemaType::Array(items) => {
                let item = self.resolve(items, &derive_name(context, ITEM_SUFFIX));
                format!("{}[]", item)
            }
            SchemaType::Map(values) => {
                let value = self.resolve(values, &derive_name(context, VALUE_SUFFIX));
                format!("Record<string, {}>", value)
            }
            SchemaType::Record(record) => self.resolve_record(record, context),
            SchemaType::Unknown(_) => ANY_TYPE.to_string(),
        }
    }

    /// Resolves every member with the same context and joins the distinct
    /// expressions in order of first occurrence.
    fn resolve_union(&mut self, members: &[SchemaType], context: &str) -> String {
        let mut distinct: Vec<String> = Vec::with_capacity(members.len());

        for member in members {
            let resolved = self.resolve(member, context);
            if !distinct.contains(&resolved) {
                distinct.push(resolved);
            }
        }

        distinct.join(" | ")
    }

    fn resolve_enum(&mut self, enum_def: &EnumDef, context: &str) -> String {
        let name = enum_def
            .name
            .clone()
            .unwrap_or_else(|| derive_name(context, ENUM_SUFFIX));

        self.declarations.push(Declaration::Enum {
            name: name.clone(),
            symbols: enum_def.symbols.clone(),
        });

        name
    }

    fn resolve_record(&mut self, record: &RecordDef, context: &str) -> String {
        let name = record.name.clone().unwrap_or_else(|| context.to_string());

        // Nested declarations land before the record that contains them.
        let mut fields = Vec::with_capacity(record.fields.len());
        for field in &record.fields {
            fields.push(translate_field(field, self.declarations, &name));
        }

        self.declarations.push(Declaration::Interface {
            name: name.clone(),
            fields,
        });

        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avscts_schema::parse_schema;

    fn resolve(json: &str, context: &str) -> (String, Vec<Declaration>) {
        let schema = parse_schema(json).expect("Failed to parse");
        let mut declarations = Vec::new();
        let ts = TypeResolver::new(&mut declarations).resolve(&schema, context);
        (ts, declarations)
    }

    #[test]
    fn test_resolve_primitives() {
        assert_eq!(resolve(r#""long""#, "Ctx").0, "number");
        assert_eq!(resolve(r#""bytes""#, "Ctx").0, "Uint8Array");
        assert_eq!(resolve(r#"{"type":"boolean"}"#, "Ctx").0, "boolean");
    }

    #[test]
    fn test_resolve_named_reference_passes_through() {
        let (ts, declarations) = resolve(r#""com.example.Customer""#, "Ctx");
        assert_eq!(ts, "com.example.Customer");
        assert!(declarations.is_empty());
    }

    #[test]
    fn test_resolve_union_deduplicates() {
        let (ts, _) = resolve(r#"["int", "long", "string", "double", "null"]"#, "Ctx");
        assert_eq!(ts, "number | string | null");
    }

    #[test]
    fn test_resolve_array_and_map() {
        assert_eq!(
            resolve(r#"{"type":"array","items":"string"}"#, "Ctx").0,
            "string[]"
        );
        assert_eq!(
            resolve(r#"{"type":"map","values":{"type":"array","items":"int"}}"#, "Ctx").0,
            "Record<string, number[]>"
        );
    }

    #[test]
    fn test_resolve_anonymous_enum_in_array() {
        let (ts, declarations) = resolve(
            r#"{"type":"array","items":{"type":"enum","symbols":["A","B"]}}"#,
            "Order_flags",
        );

        assert_eq!(ts, "Order_flagsItemEnum[]");
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].name(), "Order_flagsItemEnum");
    }

    #[test]
    fn test_resolve_anonymous_record_in_map() {
        let (ts, declarations) = resolve(
            r#"{"type":"map","values":{"type":"record","fields":[{"name":"n","type":"int"}]}}"#,
            "Order_attrs",
        );

        assert_eq!(ts, "Record<string, Order_attrsValue>");
        assert_eq!(
            declarations,
            vec![Declaration::Interface {
                name: "Order_attrsValue".to_string(),
                fields: vec!["  n: number;".to_string()],
            }]
        );
    }

    #[test]
    fn test_resolve_enum_preserves_symbols() {
        let (ts, declarations) =
            resolve(r#"{"type":"enum","name":"Color","symbols":["RED","GREEN","BLUE"]}"#, "X");

        assert_eq!(ts, "Color");
        assert_eq!(
            declarations,
            vec![Declaration::Enum {
                name: "Color".to_string(),
                symbols: vec!["RED".to_string(), "GREEN".to_string(), "BLUE".to_string()],
            }]
        );
    }

    #[test]
    fn test_resolve_nested_records_hoisted_in_order() {
        let (ts, declarations) = resolve(
            r#"{"type":"record","name":"Order","fields":[
                {"name":"customer","type":{"type":"record","name":"Customer","fields":[
                    {"name":"tier","type":{"type":"enum","symbols":["GOLD","SILVER"]}}
                ]}},
                {"name":"lines","type":{"type":"array","items":{"type":"record","fields":[
                    {"name":"sku","type":"string"}
                ]}}}
            ]}"#,
            "ignored",
        );

        assert_eq!(ts, "Order");
        let names: Vec<_> = declarations.iter().map(Declaration::name).collect();
        assert_eq!(
            names,
            ["Customer_tierEnum", "Customer", "Order_linesItem", "Order"]
        );
    }

    #[test]
    fn test_resolve_unknown_is_any() {
        assert_eq!(resolve(r#"{"type":"fixed","name":"Md5","size":16}"#, "X").0, "any");
        assert_eq!(resolve("[]", "X").0, "any");
        assert_eq!(resolve("true", "X").0, "any");
    }

    #[test]
    fn test_resolve_union_of_anonymous_records_shares_context() {
        let (ts, declarations) = resolve(
            r#"[{"type":"record","fields":[]},{"type":"record","fields":[]}]"#,
            "Event_payload",
        );

        assert_eq!(ts, "Event_payload");
        assert_eq!(declarations.len(), 2);
    }
}
