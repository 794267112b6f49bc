//! # llmyml-core — Foundational Types for the LLM.yml Validator
//!
//! Every other crate in the workspace depends on `llmyml-core`; it depends
//! on nothing internal.
//!
//! ## Contents
//!
//! - **Result model** (`result.rs`): [`ValidationResult`], [`SchemaViolation`],
//!   [`BestPracticeWarning`] and the closed [`Severity`] / [`WarningKind`]
//!   enumerations. A result is either valid with warnings or invalid with
//!   errors, never both.
//!
//! - **Documents** (`document.rs`): parses YAML or JSON input into the
//!   untyped `serde_json::Value` tree the schema engine and linter operate
//!   on. YAML is converted to the JSON-compatible subset at load time.
//!
//! - **Configuration** (`config.rs`): [`LintConfig`] thresholds for the
//!   best-practices linter, loadable from a YAML or JSON file.
//!
//! - **Errors** (`error.rs`): parse, load and config failures. Schema
//!   violations are data, not errors, and live in the result model.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod document;
pub mod error;
pub mod result;

pub use config::LintConfig;
pub use document::{load_document, parse_document, DocumentFormat, LoadedDocument};
pub use error::{ConfigError, LoadError, ParseError};
pub use result::{BestPracticeWarning, SchemaViolation, Severity, ValidationResult, WarningKind};
