//! Avro schema parser.
//!
//! This module parses Avro `.avsc` JSON into the closed [`SchemaType`]
//! representation. Every shape is classified exactly once here; shapes outside
//! the supported subset become [`SchemaType::Unknown`] instead of errors.

use crate::document::SchemaDocument;
use crate::error::ParseError;
use crate::types::{EnumDef, FieldDef, Primitive, RecordDef, SchemaType};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parses an Avro schema from a JSON string.
///
/// # Arguments
/// * `json` - Avro schema content
///
/// # Returns
/// Parsed schema type or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a record, enum, array,
/// map or field is missing an attribute needed to emit a type.
pub fn parse_schema(json: &str) -> Result<SchemaType, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(&value)
}

/// Parses an Avro schema document, keeping its source identifier.
///
/// # Errors
/// Returns `ParseError` under the same conditions as [`parse_schema`].
pub fn parse_document(
    source: impl Into<String>,
    json: &str,
) -> Result<SchemaDocument, ParseError> {
    Ok(SchemaDocument::new(source, parse_schema(json)?))
}

/// Parses an already decoded JSON value.
///
/// # Errors
/// Returns `ParseError` if a required attribute is missing or malformed.
pub fn parse_value(value: &Value) -> Result<SchemaType, ParseError> {
    match value {
        Value::String(name) => Ok(parse_type_name(name)),
        Value::Array(members) if members.is_empty() => Ok(SchemaType::Unknown(value.clone())),
        Value::Array(members) => members
            .iter()
            .map(parse_value)
            .collect::<Result<Vec<_>, _>>()
            .map(SchemaType::Union),
        Value::Object(object) => parse_object(object, value),
        _ => Ok(SchemaType::Unknown(value.clone())),
    }
}

/// Classifies a bare type name as a primitive or a named reference.
fn parse_type_name(name: &str) -> SchemaType {
    Primitive::from_avro_name(name)
        .map(SchemaType::Primitive)
        .unwrap_or_else(|| SchemaType::Named(name.to_string()))
}

/// Parses an object-form schema according to its `type` attribute.
fn parse_object(object: &Map<String, Value>, value: &Value) -> Result<SchemaType, ParseError> {
    let Some(Value::String(kind)) = object.get("type") else {
        return Ok(SchemaType::Unknown(value.clone()));
    };

    match kind.as_str() {
        "record" => parse_record(value).map(SchemaType::Record),
        "enum" => parse_enum(value).map(SchemaType::Enum),
        "array" => {
            let items = object
                .get("items")
                .ok_or_else(|| ParseError::missing_attr("array", "items"))?;
            Ok(SchemaType::Array(Box::new(parse_value(items)?)))
        }
        "map" => {
            let values = object
                .get("values")
                .ok_or_else(|| ParseError::missing_attr("map", "values"))?;
            Ok(SchemaType::Map(Box::new(parse_value(values)?)))
        }
        other => Ok(Primitive::from_avro_name(other)
            .map(SchemaType::Primitive)
            .unwrap_or_else(|| SchemaType::Unknown(value.clone()))),
    }
}

#[derive(Deserialize)]
struct RawRecord {
    name: Option<String>,
    namespace: Option<String>,
    doc: Option<String>,
    fields: Option<Vec<RawField>>,
}

#[derive(Deserialize)]
struct RawField {
    name: Option<String>,
    #[serde(rename = "type")]
    schema: Option<Value>,
    doc: Option<String>,
}

#[derive(Deserialize)]
struct RawEnum {
    name: Option<String>,
    namespace: Option<String>,
    doc: Option<String>,
    symbols: Option<Vec<String>>,
}

/// Parses a record definition.
fn parse_record(value: &Value) -> Result<RecordDef, ParseError> {
    let raw = RawRecord::deserialize(value)?;
    let element = describe("record", raw.name.as_deref());

    let mut record = RecordDef::new(raw.name);
    record.namespace = raw.namespace;
    record.doc = raw.doc;

    for raw_field in raw.fields.unwrap_or_default() {
        let name = raw_field
            .name
            .ok_or_else(|| ParseError::missing_attr(&element, "fields[].name"))?;
        let schema = raw_field
            .schema
            .ok_or_else(|| ParseError::missing_attr(format!("field '{name}'"), "type"))?;

        record.add_field(FieldDef {
            schema: parse_value(&schema)?,
            name,
            doc: raw_field.doc,
        });
    }

    Ok(record)
}

/// Parses an enum definition.
fn parse_enum(value: &Value) -> Result<EnumDef, ParseError> {
    let raw = RawEnum::deserialize(value)?;
    let symbols = raw
        .symbols
        .ok_or_else(|| ParseError::missing_attr(describe("enum", raw.name.as_deref()), "symbols"))?;

    let mut enum_def = EnumDef::new(raw.name, symbols);
    enum_def.namespace = raw.namespace;
    enum_def.doc = raw.doc;

    Ok(enum_def)
}

fn describe(kind: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{kind} '{name}'"),
        None => kind.to_string(),
    }
}
