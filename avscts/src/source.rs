//! Schema sources.

use std::fs;
use std::path::{Path, PathBuf};

use avscts_schema::SchemaDocument;
use avscts_schema::document::SCHEMA_EXTENSION;

use crate::error::{Error, Result};

/// Supplier of parsed schema documents.
pub trait SchemaSource {
    /// Loads every document, in generation order.
    ///
    /// # Errors
    /// Returns `Error` if a document cannot be read or parsed.
    fn load(&self) -> Result<Vec<SchemaDocument>>;
}

/// Reads every `.avsc` file directly inside a directory.
///
/// Files are ordered by name so repeated runs produce identical output.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Creates a source over `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the scanned directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn schema_files(&self) -> Result<Vec<PathBuf>> {
        let read_error = |source| Error::Read {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == SCHEMA_EXTENSION) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl SchemaSource for DirectorySource {
    fn load(&self) -> Result<Vec<SchemaDocument>> {
        let files = self.schema_files()?;
        tracing::info!(
            "found {} schema file(s) in {}",
            files.len(),
            self.dir.display()
        );

        files
            .into_iter()
            .map(|path| {
                let json = fs::read_to_string(&path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();

                tracing::debug!("parsing {}", file_name);
                avscts_schema::parse_document(file_name.as_str(), &json).map_err(|source| {
                    Error::Parse {
                        document: file_name.clone(),
                        source,
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).expect("Failed to write file");
    }

    #[test]
    fn test_load_sorted_avsc_files_only() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write(dir.path(), "b.avsc", r#"{"type":"record","name":"B","fields":[]}"#);
        write(dir.path(), "a.avsc", r#"{"type":"enum","name":"A","symbols":["X"]}"#);
        write(dir.path(), "notes.txt", "not a schema");
        write(dir.path(), "c.json", r#""string""#);
        fs::create_dir(dir.path().join("nested.avsc")).expect("Failed to create dir");

        let documents = DirectorySource::new(dir.path()).load().expect("Failed to load");

        let sources: Vec<_> = documents.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, ["a.avsc", "b.avsc"]);
        assert_eq!(documents[0].name(), "A");
        assert_eq!(documents[1].name(), "B");
    }

    #[test]
    fn test_load_empty_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let documents = DirectorySource::new(dir.path()).load().expect("Failed to load");
        assert!(documents.is_empty());
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("missing");

        let err = DirectorySource::new(&missing).load().unwrap_err();
        assert!(matches!(err, Error::Read { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_load_malformed_document() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write(dir.path(), "good.avsc", r#""string""#);
        write(dir.path(), "broken.avsc", r#"{"type": "record", "#);

        let err = DirectorySource::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, Error::Parse { ref document, .. } if document == "broken.avsc"));
    }
}
