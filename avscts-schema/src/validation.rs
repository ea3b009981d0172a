//! Schema validation utilities.
//!
//! Validation is opt-in: code generation never calls into this module, so an
//! invalid or dangling schema still produces output unless the caller asks for
//! these checks.

use crate::error::SchemaError;
use crate::types::{EnumDef, RecordDef, SchemaType};
use std::collections::HashSet;

/// Validates a parsed schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` on duplicate enum symbols or duplicate field names.
pub fn validate_schema(schema: &SchemaType) -> Result<(), SchemaError> {
    match schema {
        SchemaType::Record(record) => validate_record(record),
        SchemaType::Enum(enum_def) => validate_enum(enum_def),
        SchemaType::Union(members) => members.iter().try_for_each(validate_schema),
        SchemaType::Array(inner) | SchemaType::Map(inner) => validate_schema(inner),
        SchemaType::Primitive(_) | SchemaType::Named(_) | SchemaType::Unknown(_) => Ok(()),
    }
}

/// Validates a record and all nested types of its fields.
fn validate_record(record: &RecordDef) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in &record.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                record: record.name.clone().unwrap_or_default(),
                field: field.name.clone(),
            });
        }
        validate_schema(&field.schema)?;
    }

    Ok(())
}

/// Validates an enum type definition.
fn validate_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for symbol in &enum_def.symbols {
        if !seen.insert(symbol.as_str()) {
            return Err(SchemaError::DuplicateSymbol {
                enum_name: enum_def.name.clone().unwrap_or_default(),
                symbol: symbol.clone(),
            });
        }
    }

    Ok(())
}

/// Returns the named references that no record or enum in `schema` declares.
///
/// A reference matches either a declaration's short name or its
/// namespace-qualified name. Nested declarations without a namespace of their
/// own inherit the enclosing one. Each unresolved name is reported once, in
/// order of first appearance.
#[must_use]
pub fn unresolved_references(schema: &SchemaType) -> Vec<String> {
    let mut declared = HashSet::new();
    let mut referenced = Vec::new();
    collect_names(schema, None, &mut declared, &mut referenced);

    let mut reported = HashSet::new();
    referenced
        .into_iter()
        .filter(|name| !declared.contains(*name))
        .filter(|name| reported.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Returns every record and enum name declared in `schema`, both short and
/// namespace-qualified.
#[must_use]
pub fn declared_names(schema: &SchemaType) -> HashSet<String> {
    let mut declared = HashSet::new();
    collect_names(schema, None, &mut declared, &mut Vec::new());
    declared
}

fn collect_names<'a>(
    schema: &'a SchemaType,
    namespace: Option<&'a str>,
    declared: &mut HashSet<String>,
    referenced: &mut Vec<&'a str>,
) {
    match schema {
        SchemaType::Named(name) => referenced.push(name),
        SchemaType::Union(members) => {
            for member in members {
                collect_names(member, namespace, declared, referenced);
            }
        }
        SchemaType::Array(inner) | SchemaType::Map(inner) => {
            collect_names(inner, namespace, declared, referenced);
        }
        SchemaType::Enum(enum_def) => {
            if let Some(name) = enum_def.name.as_deref() {
                let namespace = effective_namespace(name, enum_def.namespace.as_deref(), namespace);
                declare(declared, name, namespace);
            }
        }
        SchemaType::Record(record) => {
            let namespace = match record.name.as_deref() {
                Some(name) => {
                    let namespace =
                        effective_namespace(name, record.namespace.as_deref(), namespace);
                    declare(declared, name, namespace);
                    namespace
                }
                None => record.namespace.as_deref().filter(|ns| !ns.is_empty()).or(namespace),
            };
            for field in &record.fields {
                collect_names(&field.schema, namespace, declared, referenced);
            }
        }
        SchemaType::Primitive(_) | SchemaType::Unknown(_) => {}
    }
}

/// Namespace a named declaration lives in: the prefix of a dotted name, else
/// its own non-empty namespace, else the enclosing one.
fn effective_namespace<'a>(
    name: &'a str,
    own: Option<&'a str>,
    enclosing: Option<&'a str>,
) -> Option<&'a str> {
    match name.rsplit_once('.') {
        Some((prefix, _)) => Some(prefix),
        None => own.filter(|ns| !ns.is_empty()).or(enclosing),
    }
}

fn declare(declared: &mut HashSet<String>, name: &str, namespace: Option<&str>) {
    declared.insert(name.to_string());
    if let Some(ns) = namespace.filter(|_| !name.contains('.')) {
        declared.insert(format!("{ns}.{name}"));
    }
}
