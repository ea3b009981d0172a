//! Schema type definitions.
//!
//! This module contains the data structures representing Avro schema elements
//! including primitives, records, enums, arrays, maps and unions.

/// Avro schema type, parsed once from JSON into a closed set of variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    /// Primitive type (`"long"` or `{"type": "long"}`).
    Primitive(Primitive),
    /// Reference to a record or enum declared by name.
    Named(String),
    /// Union of member types, in declaration order.
    Union(Vec<SchemaType>),
    /// Enum type definition.
    Enum(EnumDef),
    /// Array with the given item type.
    Array(Box<SchemaType>),
    /// String-keyed map with the given value type.
    Map(Box<SchemaType>),
    /// Record type definition.
    Record(RecordDef),
    /// Any shape outside the supported subset (e.g. `fixed`).
    Unknown(serde_json::Value),
}

impl SchemaType {
    /// Returns the declared `name` of a record, enum or unsupported object
    /// form (e.g. `fixed`), if any.
    #[must_use]
    pub fn explicit_name(&self) -> Option<&str> {
        match self {
            Self::Record(r) => r.name.as_deref(),
            Self::Enum(e) => e.name.as_deref(),
            Self::Unknown(value) => value.get("name").and_then(serde_json::Value::as_str),
            _ => None,
        }
    }

    /// Returns true if this is the `null` primitive.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Primitive(Primitive::Null))
    }

    /// Returns true if this is a union.
    #[must_use]
    pub const fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    /// Returns true if this is a record.
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns true if this is an enum.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true if this shape is outside the supported subset.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// Avro primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Unicode character sequence.
    String,
    /// Boolean value.
    Boolean,
    /// Sequence of 8-bit unsigned bytes.
    Bytes,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// Single precision floating point.
    Float,
    /// Double precision floating point.
    Double,
    /// No value.
    Null,
}

impl Primitive {
    /// All primitive types, in Avro specification order.
    pub const ALL: [Self; 8] = [
        Self::Null,
        Self::Boolean,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Bytes,
        Self::String,
    ];

    /// Returns the Avro type name.
    #[must_use]
    pub const fn avro_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Bytes => "bytes",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Null => "null",
        }
    }

    /// Parses a primitive type from its Avro name.
    #[must_use]
    pub fn from_avro_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "boolean" => Some(Self::Boolean),
            "bytes" => Some(Self::Bytes),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    /// Returns true for the integer and floating point types.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Long | Self::Float | Self::Double)
    }
}

/// Record type definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordDef {
    /// Record name (derived from context when absent).
    pub name: Option<String>,
    /// Namespace.
    pub namespace: Option<String>,
    /// Documentation.
    pub doc: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    /// Creates a new record definition without fields.
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Adds a field to the record.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Returns the namespace-qualified name, if the record is named.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        qualify(self.namespace.as_deref(), self.name.as_deref()?)
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumDef {
    /// Enum name (derived from context when absent).
    pub name: Option<String>,
    /// Namespace.
    pub namespace: Option<String>,
    /// Documentation.
    pub doc: Option<String>,
    /// Symbols in declaration order.
    pub symbols: Vec<String>,
}

impl EnumDef {
    /// Creates a new enum definition.
    #[must_use]
    pub fn new(name: Option<String>, symbols: Vec<String>) -> Self {
        Self {
            name,
            symbols,
            ..Self::default()
        }
    }

    /// Returns the namespace-qualified name, if the enum is named.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        qualify(self.namespace.as_deref(), self.name.as_deref()?)
    }
}

/// Field within a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field type.
    pub schema: SchemaType,
    /// Documentation.
    pub doc: Option<String>,
}

impl FieldDef {
    /// Creates a new undocumented field.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: SchemaType) -> Self {
        Self {
            name: name.into(),
            schema,
            doc: None,
        }
    }

    /// Sets the field documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

fn qualify(namespace: Option<&str>, name: &str) -> Option<String> {
    Some(match namespace {
        Some(ns) if !ns.is_empty() && !name.contains('.') => format!("{ns}.{name}"),
        _ => name.to_string(),
    })
}
