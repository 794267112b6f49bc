//! # llmyml-cli — Command-Line Validator for LLM.yml Files
//!
//! Provides the `llm-yml` binary:
//!
//! ```bash
//! llm-yml LLM.yml
//! llm-yml ./services --recursive --quiet
//! llm-yml . -r --format json
//! ```
//!
//! ## Modules
//!
//! - `discover`: finds LLM.yml files by name under a directory.
//! - `output`: colored human output and the JSON report.
//! - `validate`: runs a validation pass and computes the exit code.

pub mod discover;
pub mod output;
pub mod validate;
