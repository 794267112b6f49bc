//! # llmyml-schema — Schema Engine
//!
//! Compiles an LLM.yml JSON Schema once and evaluates any number of parsed
//! documents against it.
//!
//! ## Responsibilities
//!
//! - **Compilation** ([`CompiledSchema::compile`]): validates the schema
//!   against its meta-schema and resolves every `$ref` from an in-memory
//!   registry. A malformed schema is a [`SchemaError`], a deployment
//!   problem rather than a document problem.
//! - **Evaluation** ([`CompiledSchema::evaluate`]): collects every violation
//!   in the document in one pass and normalizes each into a
//!   [`llmyml_core::SchemaViolation`] carrying Ajv-style `params`.
//!
//! ## Thread Safety
//!
//! `CompiledSchema` is immutable after construction and `Send + Sync`;
//! share one instance across every validation in a process.

pub mod engine;
pub mod error;
mod violation;

pub use engine::{CompiledSchema, BUILTIN_SCHEMA};
pub use error::SchemaError;
