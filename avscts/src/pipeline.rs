//! Generation pipeline.
//!
//! Loads every document, optionally validates them, assembles one output blob
//! and hands it to the sink. Nothing is written unless every document was
//! loaded and (in strict mode) validated.

use std::collections::HashSet;
use std::path::PathBuf;

use avscts_codegen::Generator;
use avscts_schema::{SchemaDocument, SchemaError};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sink::{FileSink, OutputSink};
use crate::source::{DirectorySource, SchemaSource};

/// Runs generation over the configured schema directory and writes the
/// output file.
///
/// # Returns
/// The path of the written file.
///
/// # Errors
/// Returns `Error` if reading, parsing, strict validation or writing fails.
pub fn run(config: &Config) -> Result<PathBuf> {
    run_with(config, &DirectorySource::new(&config.schema_dir), &FileSink)
}

/// Runs generation with explicit source and sink collaborators.
///
/// # Errors
/// Returns `Error` if the source, strict validation or the sink fails.
pub fn run_with(
    config: &Config,
    source: &dyn SchemaSource,
    sink: &dyn OutputSink,
) -> Result<PathBuf> {
    let documents = source.load()?;
    check_documents(&documents, config.strict)?;

    let output = Generator::new(config.banner()).generate(&documents);
    let path = config.output_path();
    sink.write(&path, &output)?;

    tracing::info!("generated {} document(s) into {}", documents.len(), path.display());
    Ok(path)
}

/// Reports references that no document declares and, in strict mode, fails
/// on them and on duplicate symbols or field names.
///
/// All documents end up in one output file, so a reference resolves if any
/// document declares it.
fn check_documents(documents: &[SchemaDocument], strict: bool) -> Result<()> {
    let declared: HashSet<String> = documents
        .iter()
        .flat_map(|doc| avscts_schema::declared_names(&doc.schema))
        .collect();

    for doc in documents {
        if strict {
            avscts_schema::validate_schema(&doc.schema).map_err(|source| Error::Invalid {
                document: doc.source.clone(),
                source,
            })?;
        }

        let unresolved = avscts_schema::unresolved_references(&doc.schema)
            .into_iter()
            .filter(|name| !declared.contains(name));

        for name in unresolved {
            tracing::warn!("{}: unresolved type reference '{}'", doc.source, name);
            if strict {
                return Err(Error::Invalid {
                    document: doc.source.clone(),
                    source: SchemaError::UnresolvedReference { name },
                });
            }
        }
    }

    Ok(())
}
