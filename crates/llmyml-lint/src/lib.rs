//! # llmyml-lint — Best-Practices Linter
//!
//! Advisory, non-blocking observations about an LLM.yml document that the
//! schema already accepted.
//!
//! ## Checks
//!
//! Run in this order, each appending zero or more warnings:
//!
//! | # | Check | Kind | Severity |
//! |---|-------|------|----------|
//! | 1 | Code examples longer than `max_code_lines` | `code_length` | minor |
//! | 2 | Recommended top-level sections absent | `missing_section` | moderate |
//! | 3 | Fewer than `min_usage_examples` quick-usage entries | `insufficient_examples` | minor |
//! | 4 | Error entries with a solution but no example | `missing_example` | minor |
//! | 5 | Decision tree deeper than `max_decision_tree_depth` | `deep_nesting` | moderate |
//!
//! The raw file-size check (`file_size`, moderate) is separate: it looks
//! at the input bytes, not the document, and is merged by the caller.
//!
//! ## Crate Policy
//!
//! - Checks are independent: none reads another's output.
//! - Every check tolerates absent optional fields, empty sequences and
//!   unexpected shapes. A schema-valid document never makes the linter panic.

pub mod checks;
pub mod depth;

pub use checks::BestPractices;
pub use depth::object_depth;
