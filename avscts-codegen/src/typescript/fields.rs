//! Record field translation.

use std::borrow::Cow;

use avscts_schema::{FieldDef, Primitive, SchemaType};

use super::declarations::Declaration;
use super::naming::field_context;
use super::resolver::TypeResolver;

/// Translates one record field into a TypeScript property line.
///
/// A union containing `null` makes the property optional (`name?:`) and is
/// resolved without its `null` member. The field documentation, if any, is
/// appended as a trailing `//` comment.
///
/// # Arguments
/// * `field` - Field to translate
/// * `declarations` - Collection receiving hoisted declarations
/// * `parent` - Name of the enclosing record
pub fn translate_field(
    field: &FieldDef,
    declarations: &mut Vec<Declaration>,
    parent: &str,
) -> String {
    let (schema, optional) = unwrap_nullable(&field.schema);
    let context = field_context(parent, &field.name);
    let ts = TypeResolver::new(declarations).resolve(&schema, &context);

    let mut line = format!(
        "  {}{}: {};",
        field.name,
        if optional { "?" } else { "" },
        ts
    );

    if let Some(doc) = field.doc.as_deref().filter(|doc| !doc.is_empty()) {
        line.push_str(" // ");
        line.push_str(&single_line(doc));
    }

    line
}

/// Applies the null-unwrap policy.
///
/// Returns the type to resolve and whether the field is optional. A union
/// left with a single member collapses to that member; a union of only
/// `null` stays `null`.
fn unwrap_nullable(schema: &SchemaType) -> (Cow<'_, SchemaType>, bool) {
    let SchemaType::Union(members) = schema else {
        return (Cow::Borrowed(schema), false);
    };
    if !members.iter().any(SchemaType::is_null) {
        return (Cow::Borrowed(schema), false);
    }

    let mut rest: Vec<SchemaType> = members.iter().filter(|m| !m.is_null()).cloned().collect();
    let unwrapped = match rest.len() {
        0 => SchemaType::Primitive(Primitive::Null),
        1 => rest.remove(0),
        _ => SchemaType::Union(rest),
    };

    (Cow::Owned(unwrapped), true)
}

/// Collapses line breaks so the trailing comment stays on one line.
fn single_line(doc: &str) -> Cow<'_, str> {
    if doc.contains(['\n', '\r']) {
        Cow::Owned(doc.split_whitespace().collect::<Vec<_>>().join(" "))
    } else {
        Cow::Borrowed(doc)
    }
}
