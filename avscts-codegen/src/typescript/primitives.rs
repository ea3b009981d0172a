//! Primitive type mapping.

use avscts_schema::Primitive;

/// Escape type for shapes outside the supported subset.
pub const ANY_TYPE: &str = "any";

/// Returns the TypeScript type name for an Avro primitive.
///
/// All numeric types collapse to `number`; integer width and floating point
/// precision are not preserved.
#[must_use]
pub const fn ts_primitive(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "string",
        Primitive::Boolean => "boolean",
        Primitive::Bytes => "Uint8Array",
        Primitive::Int | Primitive::Long | Primitive::Float | Primitive::Double => "number",
        Primitive::Null => "null",
    }
}
