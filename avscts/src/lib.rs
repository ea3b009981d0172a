//! # avscts
//!
//! Compile Avro schema files (`.avsc`) into a single TypeScript declaration
//! file.
//!
//! Every schema in a directory is translated into `interface` declarations
//! for records, `as const` objects plus a type alias for enums, and aliases
//! for anything else. Nested anonymous types are hoisted into their own named
//! declarations ahead of the type that uses them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use avscts::prelude::*;
//!
//! let config = Config::new("schemas", "generated/ts", "events.ts");
//! let path = run(&config)?;
//! println!("[OK] Wrote {}", path.display());
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Avro JSON parsing and validation
//! - [`codegen`] - TypeScript generation from parsed schemas
//! - [`source`] / [`sink`] - Where documents come from and where output goes
//! - [`pipeline`] - One end-to-end generation run

pub mod config;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod sink;
pub mod source;

/// Avro schema parsing and validation.
pub mod schema {
    pub use avscts_schema::*;
}

/// TypeScript code generation from Avro schemas.
pub mod codegen {
    pub use avscts_codegen::*;
}

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{run, run_with};
pub use sink::{FileSink, OutputSink};
pub use source::{DirectorySource, SchemaSource};
