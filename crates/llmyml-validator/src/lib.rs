//! # llmyml-validator — Validation Orchestrator
//!
//! Sequences the schema engine and the best-practices linter into one
//! [`llmyml_core::ValidationResult`].
//!
//! ## Flow
//!
//! 1. Evaluate the document against the compiled schema.
//! 2. Any violation: return an invalid result. The linter does not run,
//!    since its checks assume shapes only a schema-valid document has.
//! 3. Otherwise run the linter and, when the raw byte length is known,
//!    the file-size check, and return a valid result carrying the warnings.
//!
//! ## Crate Policy
//!
//! - Parse and I/O failures are [`llmyml_core::LoadError`]s returned
//!   beside the result, never folded into it.
//! - Best-practice warnings never change `valid`.

pub mod validator;

pub use validator::{ValidateOptions, Validator};
