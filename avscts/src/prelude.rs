//! Prelude module for convenient imports.
//!
//! ```ignore
//! use avscts::prelude::*;
//! ```

// Pipeline
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::pipeline::{run, run_with};
pub use crate::sink::{FileSink, OutputSink};
pub use crate::source::{DirectorySource, SchemaSource};

// Schema types
pub use avscts_schema::{
    EnumDef, FieldDef, ParseError, Primitive, RecordDef, SchemaDocument, SchemaError, SchemaType,
};

// Code generation
pub use avscts_codegen::{Banner, Declaration, DocumentGenerator, Generator};
