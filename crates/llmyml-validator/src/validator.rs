//! The [`Validator`] type.

use std::path::Path;

use llmyml_core::{load_document, LintConfig, LoadError, ValidationResult};
use llmyml_lint::BestPractices;
use llmyml_schema::CompiledSchema;
use serde_json::Value;

/// Per-call switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Run the best-practice checks on schema-valid documents.
    pub best_practices: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            best_practices: true,
        }
    }
}

/// Schema engine plus linter, built once and reused for every document.
#[derive(Debug)]
pub struct Validator {
    schema: CompiledSchema,
    linter: BestPractices,
}

impl Validator {
    /// A validator with default lint thresholds.
    pub fn new(schema: CompiledSchema) -> Self {
        Self::with_config(schema, LintConfig::default())
    }

    /// A validator with custom lint thresholds.
    pub fn with_config(schema: CompiledSchema, config: LintConfig) -> Self {
        Self {
            schema,
            linter: BestPractices::new(config),
        }
    }

    /// The compiled schema documents are evaluated against.
    pub fn schema(&self) -> &CompiledSchema {
        &self.schema
    }

    /// The linter run on schema-valid documents.
    pub fn linter(&self) -> &BestPractices {
        &self.linter
    }

    /// Validate a parsed document with best-practice checks enabled.
    pub fn validate(&self, document: &Value) -> ValidationResult {
        self.validate_with_options(document, None, ValidateOptions::default())
    }

    /// Validate a parsed document and check the raw input size.
    pub fn validate_with_size(&self, document: &Value, byte_len: u64) -> ValidationResult {
        self.validate_with_options(document, Some(byte_len), ValidateOptions::default())
    }

    /// Validate a parsed document.
    ///
    /// `byte_len` is the size of the raw input, when there was one. The
    /// file-size warning is only ever added to a valid result, and only when
    /// best-practice checks are enabled.
    pub fn validate_with_options(
        &self,
        document: &Value,
        byte_len: Option<u64>,
        options: ValidateOptions,
    ) -> ValidationResult {
        let violations = self.schema.evaluate(document);
        if !violations.is_empty() {
            tracing::debug!(violations = violations.len(), "document failed schema validation");
            return ValidationResult::invalid(violations);
        }

        if !options.best_practices {
            return ValidationResult::valid(Vec::new());
        }

        let mut result = ValidationResult::valid(self.linter.check(document));
        if let Some(warning) = byte_len.and_then(|n| self.linter.check_file_size(n)) {
            result.push_warning(warning);
        }
        tracing::debug!(warnings = result.warnings().len(), "document passed schema validation");
        result
    }

    /// Read, parse and validate a file with best-practice checks enabled.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read or parsed. Schema
    /// violations are reported in the result, not as errors.
    pub fn validate_file(&self, path: &Path) -> Result<ValidationResult, LoadError> {
        self.validate_file_with_options(path, ValidateOptions::default())
    }

    /// Read, parse and validate a file.
    ///
    /// # Errors
    ///
    /// Same as [`Validator::validate_file`].
    pub fn validate_file_with_options(
        &self,
        path: &Path,
        options: ValidateOptions,
    ) -> Result<ValidationResult, LoadError> {
        let loaded = load_document(path)?;
        Ok(self.validate_with_options(&loaded.value, Some(loaded.byte_len), options))
    }
}
