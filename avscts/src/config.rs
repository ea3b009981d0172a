//! Run configuration.
//!
//! Each setting can be given as a flag or through its environment variable,
//! and falls back to a default when neither is set.

use std::path::PathBuf;

use avscts_codegen::Banner;
use clap::Parser;

/// Default directory scanned for `.avsc` files.
pub const DEFAULT_SCHEMA_DIR: &str = "schemas";
/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "generated/ts";
/// Default output file name.
pub const DEFAULT_OUT_FILE: &str = "events.ts";

/// Configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "avscts", version, about = "Compile Avro schemas into TypeScript declarations")]
pub struct Config {
    /// Directory containing the `.avsc` schema files
    #[arg(long, env = "SCHEMA_DIR", default_value = DEFAULT_SCHEMA_DIR)]
    pub schema_dir: PathBuf,

    /// Directory receiving the generated file
    #[arg(long, env = "OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Output file; relative paths are placed inside the output directory
    #[arg(long, env = "OUT_FILE", default_value = DEFAULT_OUT_FILE)]
    pub out_file: PathBuf,

    /// Abort on duplicate names and unresolved type references
    #[arg(long)]
    pub strict: bool,
}

impl Config {
    /// Creates a non-strict configuration.
    #[must_use]
    pub fn new(
        schema_dir: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
        out_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            schema_dir: schema_dir.into(),
            out_dir: out_dir.into(),
            out_file: out_file.into(),
            strict: false,
        }
    }

    /// Enables or disables strict validation.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the full path of the output file.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        if self.out_file.is_absolute() {
            self.out_file.clone()
        } else {
            self.out_dir.join(&self.out_file)
        }
    }

    /// Returns the banner describing this run.
    #[must_use]
    pub fn banner(&self) -> Banner {
        let output_path = self.output_path();
        let output = output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| output_path.display().to_string());
        Banner::new(self.schema_dir.display().to_string(), output)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_DIR, DEFAULT_OUT_DIR, DEFAULT_OUT_FILE)
    }
}
