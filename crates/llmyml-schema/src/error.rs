//! Errors raised while loading or compiling a schema artifact.

use std::path::PathBuf;

use thiserror::Error;

/// The schema artifact itself is unusable.
///
/// Always fatal: it indicates a build or deployment problem, never a
/// problem with the document being validated.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("failed to load schema {}: {source}", path.display())]
    Load {
        /// Path of the schema artifact.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The schema text is not valid JSON.
    #[error("schema {origin} is not valid JSON: {reason}")]
    InvalidJson {
        /// Path or label of the schema artifact.
        origin: String,
        /// Parser message.
        reason: String,
    },

    /// The schema violates its meta-schema or has unresolved references.
    #[error("failed to compile schema {schema_id}: {reason}")]
    Compile {
        /// The schema `$id`, or `<anonymous>` when it has none.
        schema_id: String,
        /// JSON Pointer into the schema where compilation failed.
        schema_path: String,
        /// Human-readable reason.
        reason: String,
    },
}
