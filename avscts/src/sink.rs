//! Output sinks.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Destination for the generated output blob.
pub trait OutputSink {
    /// Persists `contents` at `destination`.
    ///
    /// # Errors
    /// Returns `Error::Write` if the contents cannot be persisted.
    fn write(&self, destination: &Path, contents: &str) -> Result<()>;
}

/// Writes the output to the filesystem, creating parent directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl OutputSink for FileSink {
    fn write(&self, destination: &Path, contents: &str) -> Result<()> {
        let write_error = |source| Error::Write {
            path: destination.to_path_buf(),
            source,
        };

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(destination, contents).map_err(write_error)?;

        tracing::debug!("wrote {} bytes to {}", contents.len(), destination.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let destination = dir.path().join("generated").join("ts").join("events.ts");

        FileSink
            .write(&destination, "export type A = string;\n")
            .expect("Failed to write");

        let written = fs::read_to_string(&destination).expect("Failed to read back");
        assert_eq!(written, "export type A = string;\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let destination = dir.path().join("events.ts");
        fs::write(&destination, "stale").expect("Failed to seed file");

        FileSink.write(&destination, "fresh").expect("Failed to write");
        assert_eq!(fs::read_to_string(&destination).unwrap(), "fresh");
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").expect("Failed to seed file");

        let err = FileSink
            .write(&blocker.join("events.ts"), "x")
            .unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
