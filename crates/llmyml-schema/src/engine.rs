//! # Schema Compilation & Evaluation
//!
//! Wraps a compiled `jsonschema::Validator`.
//!
//! ## Reference resolution
//!
//! `$ref`s are resolved eagerly at compile time and only from an in-memory
//! registry: the schema itself plus any auxiliary schemas passed to
//! [`CompiledSchema::compile_with_resources`]. A reference the registry
//! cannot satisfy fails compilation instead of reaching for the network or
//! the filesystem.
//!
//! ## Draft
//!
//! The draft comes from the schema's `$schema` keyword. Schemas without one
//! are compiled as draft-07, the draft the LLM.yml schema is written in.

use std::collections::HashMap;
use std::path::Path;

use jsonschema::{Draft, Validator};
use llmyml_core::SchemaViolation;
use serde_json::Value;

use crate::error::SchemaError;
use crate::violation::to_violation;

/// Draft used when the schema does not declare `$schema`.
const DEFAULT_DRAFT: Draft = Draft::Draft7;

/// The LLM.yml schema shipped in `schemas/llm.schema.json`.
pub const BUILTIN_SCHEMA: &str = include_str!("../../../schemas/llm.schema.json");

/// Retriever that serves `$ref` targets from pre-registered schemas.
struct LocalSchemaRetriever {
    /// Map from full URI to parsed schema JSON.
    schemas: HashMap<String, Value>,
}

impl jsonschema::Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        self.schemas
            .get(uri_str)
            .cloned()
            .ok_or_else(|| format!("schema not found for URI: {uri_str}").into())
    }
}

/// A schema compiled once and evaluated against many documents.
pub struct CompiledSchema {
    schema_id: Option<String>,
    validator: Validator,
}

impl std::fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("schema_id", &self.schema_id)
            .finish_non_exhaustive()
    }
}

impl CompiledSchema {
    /// Compile a schema with no auxiliary schemas.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the schema fails its meta-schema
    /// or contains a `$ref` that cannot be resolved.
    pub fn compile(schema: &Value) -> Result<Self, SchemaError> {
        Self::compile_with_resources(schema, std::iter::empty())
    }

    /// Compile a schema, registering auxiliary schemas by URI so that
    /// cross-schema `$ref`s resolve locally.
    ///
    /// # Errors
    ///
    /// Same as [`CompiledSchema::compile`].
    pub fn compile_with_resources<I>(schema: &Value, resources: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let schema_id = schema
            .get("$id")
            .and_then(Value::as_str)
            .map(str::to_string);

        let retriever = LocalSchemaRetriever {
            schemas: resources.into_iter().collect(),
        };
        let registered = retriever.schemas.len();

        let mut options = jsonschema::options();
        if schema.get("$schema").is_none() {
            options.with_draft(DEFAULT_DRAFT);
        }
        let validator = options
            .with_retriever(retriever)
            .build(schema)
            .map_err(|e| SchemaError::Compile {
                schema_id: schema_id.clone().unwrap_or_else(|| "<anonymous>".to_string()),
                schema_path: e.instance_path.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            schema_id = schema_id.as_deref().unwrap_or("<anonymous>"),
            registered,
            "compiled schema"
        );

        Ok(Self {
            schema_id,
            validator,
        })
    }

    /// Parse schema JSON text and compile it.
    ///
    /// `origin` labels the schema in error messages (usually its path).
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidJson`] for unparseable text, otherwise
    /// the errors of [`CompiledSchema::compile`].
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, SchemaError> {
        let schema: Value =
            serde_json::from_str(text).map_err(|e| SchemaError::InvalidJson {
                origin: origin.to_string(),
                reason: e.to_string(),
            })?;
        Self::compile(&schema)
    }

    /// Compile the LLM.yml schema embedded in this crate.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded artifact itself is broken.
    pub fn builtin() -> Result<Self, SchemaError> {
        Self::from_json_str(BUILTIN_SCHEMA, "<builtin llm.schema.json>")
    }

    /// Read a schema artifact from disk and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] if the file cannot be read, otherwise
    /// the errors of [`CompiledSchema::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text, &path.display().to_string())
    }

    /// The schema's `$id`, if it declares one.
    pub fn schema_id(&self) -> Option<&str> {
        self.schema_id.as_deref()
    }

    /// Evaluate a document, collecting every violation in one pass.
    ///
    /// An empty vector means the document is valid. Violations are ordered
    /// as the validator walks the schema.
    pub fn evaluate(&self, document: &Value) -> Vec<SchemaViolation> {
        let violations: Vec<SchemaViolation> = self
            .validator
            .iter_errors(document)
            .map(|err| to_violation(&err))
            .collect();

        tracing::debug!(violations = violations.len(), "evaluated document");
        violations
    }

    /// True iff the document has no violations. Cheaper than `evaluate`.
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }
}
