//! # Validation Result Model
//!
//! The data produced by one validation call.
//!
//! ## Invariants
//!
//! - `valid == false` iff `errors` is non-empty.
//! - `warnings` is only ever populated on a valid result: best-practice
//!   checks assume shapes the schema guarantees, so they never run on an
//!   invalid document.
//!
//! Both invariants are enforced by construction: the only way to build a
//! result is [`ValidationResult::valid`] or [`ValidationResult::invalid`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Importance of a best-practice warning.
///
/// A closed enumeration: a typo cannot silently create a new severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic; worth fixing when convenient.
    Minor,
    /// Materially reduces how useful the document is to an agent.
    Moderate,
}

impl Severity {
    /// Lowercase identifier, as rendered in `[minor]` / `[moderate]` tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the check that produced a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A usage or pattern example has too many lines of code.
    CodeLength,
    /// A recommended top-level section is absent.
    MissingSection,
    /// Too few quick-usage examples.
    InsufficientExamples,
    /// An error-handling entry has a solution but no example.
    MissingExample,
    /// The decision tree is nested too deeply.
    DeepNesting,
    /// The raw input file is too large.
    FileSize,
}

impl WarningKind {
    /// All warning kinds, in check-execution order.
    pub fn all() -> &'static [WarningKind] {
        &[
            Self::CodeLength,
            Self::MissingSection,
            Self::InsufficientExamples,
            Self::MissingExample,
            Self::DeepNesting,
            Self::FileSize,
        ]
    }

    /// Snake-case identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeLength => "code_length",
            Self::MissingSection => "missing_section",
            Self::InsufficientExamples => "insufficient_examples",
            Self::MissingExample => "missing_example",
            Self::DeepNesting => "deep_nesting",
            Self::FileSize => "file_size",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An advisory, non-blocking observation about a schema-valid document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPracticeWarning {
    /// Which check produced this warning.
    #[serde(rename = "type")]
    pub kind: WarningKind,
    /// Location in the document, e.g. `quick_usage[2]` or `/`.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    /// Importance of the warning.
    pub severity: Severity,
}

impl BestPracticeWarning {
    /// Create a new warning.
    pub fn new(
        kind: WarningKind,
        path: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
            severity,
        }
    }
}

impl fmt::Display for BestPracticeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// A single schema non-conformance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaViolation {
    /// JSON Pointer into the document; `/` for the root.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// Constraint metadata (allowed values, numeric limit, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
    /// JSON Pointer into the schema to the keyword that failed.
    pub schema_path: String,
}

impl SchemaViolation {
    /// Create a violation. An empty `path` is normalized to `/`.
    pub fn new(
        path: impl Into<String>,
        message: impl Into<String>,
        params: Option<Map<String, Value>>,
        schema_path: impl Into<String>,
    ) -> Self {
        let path = path.into();
        Self {
            path: if path.is_empty() { "/".to_string() } else { path },
            message: message.into(),
            params,
            schema_path: schema_path.into(),
        }
    }

    /// Look up one constraint parameter.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.as_ref().and_then(|p| p.get(key))
    }

    /// One-line message reconstructed from the violation and its params,
    /// e.g. `/category: must be equal to one of the allowed values (allowed: cli, library)`.
    pub fn describe(&self) -> String {
        let mut message = format!("{}: {}", self.path, self.message);

        if let Some(Value::Array(allowed)) = self.param("allowedValues") {
            let rendered: Vec<String> = allowed.iter().map(render_scalar).collect();
            message.push_str(&format!(" (allowed: {})", rendered.join(", ")));
        }
        if let Some(limit) = self.param("limit") {
            message.push_str(&format!(" (limit: {})", render_scalar(limit)));
        }

        message
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Outcome of validating one document.
///
/// Serialize-only: the constructors are the sole way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<SchemaViolation>,
    warnings: Vec<BestPracticeWarning>,
}

impl ValidationResult {
    /// A schema-valid result carrying best-practice warnings.
    pub fn valid(warnings: Vec<BestPracticeWarning>) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings,
        }
    }

    /// A schema-invalid result. An empty `errors` list yields a valid
    /// result with no warnings.
    pub fn invalid(errors: Vec<SchemaViolation>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    /// True iff the document satisfied the schema.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Schema violations, in evaluation order.
    pub fn errors(&self) -> &[SchemaViolation] {
        &self.errors
    }

    /// Best-practice warnings, in check-execution order.
    pub fn warnings(&self) -> &[BestPracticeWarning] {
        &self.warnings
    }

    /// Append a warning produced outside the document checks (the raw
    /// file-size check). Ignored on invalid results.
    pub fn push_warning(&mut self, warning: BestPracticeWarning) {
        if self.valid {
            self.warnings.push(warning);
        }
    }

    /// Drop all warnings (quiet / best-practices-disabled modes).
    pub fn clear_warnings(&mut self) {
        self.warnings.clear();
    }
}
