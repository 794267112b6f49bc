//! # Best-Practice Checks
//!
//! [`BestPractices`] holds the thresholds from a [`LintConfig`] and runs the
//! five document checks against a schema-valid document.
//!
//! ## Design
//!
//! Each check is a private method that appends to a shared warning list.
//! Checks only read the document; none depends on another's output, so the
//! order is fixed purely to keep reports stable.
//!
//! The checks match on shapes instead of assuming them. A field that is
//! missing, null or of an unexpected type is skipped, not reported: type
//! errors are the schema's job.

use llmyml_core::{BestPracticeWarning, LintConfig, Severity, WarningKind};
use serde_json::Value;

use crate::depth::object_depth;

/// Sections whose entries carry a `code` example.
const CODE_EXAMPLE_FIELDS: [&str; 2] = ["quick_usage", "common_patterns"];

/// Best-practices linter.
#[derive(Debug, Clone, Default)]
pub struct BestPractices {
    config: LintConfig,
}

impl BestPractices {
    /// Create a linter with the given thresholds.
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Run every document check, in order, and return the warnings found.
    ///
    /// The document is expected to have passed schema validation already.
    /// Unexpected shapes never panic; they are skipped.
    pub fn check(&self, document: &Value) -> Vec<BestPracticeWarning> {
        let mut warnings = Vec::new();

        self.check_code_length(document, &mut warnings);
        self.check_recommended_sections(document, &mut warnings);
        self.check_usage_examples(document, &mut warnings);
        self.check_error_examples(document, &mut warnings);
        self.check_decision_tree_depth(document, &mut warnings);

        tracing::debug!(warnings = warnings.len(), "best-practice checks complete");
        warnings
    }

    /// Warn when the raw input is larger than `max_file_size` bytes.
    pub fn check_file_size(&self, byte_len: u64) -> Option<BestPracticeWarning> {
        let limit = self.config.max_file_size;
        if byte_len <= limit {
            return None;
        }

        let message = format!(
            "File size {:.1}KB exceeds recommended {}KB",
            byte_len as f64 / 1024.0,
            format_kib(limit)
        );
        Some(BestPracticeWarning::new(
            WarningKind::FileSize,
            "/",
            message,
            Severity::Moderate,
        ))
    }

    fn check_code_length(&self, document: &Value, warnings: &mut Vec<BestPracticeWarning>) {
        let max = self.config.max_code_lines;
        for field in CODE_EXAMPLE_FIELDS {
            let Some(Value::Array(entries)) = document.get(field) else {
                continue;
            };
            for (index, entry) in entries.iter().enumerate() {
                let Some(code) = entry.get("code").and_then(Value::as_str) else {
                    continue;
                };
                let lines = count_lines(code);
                if lines > max {
                    warnings.push(BestPracticeWarning::new(
                        WarningKind::CodeLength,
                        format!("{field}[{index}]"),
                        format!("Code example has {lines} lines (recommended: at most {max})"),
                        Severity::Minor,
                    ));
                }
            }
        }
    }

    fn check_recommended_sections(&self, document: &Value, warnings: &mut Vec<BestPracticeWarning>) {
        for section in &self.config.recommended_sections {
            if matches!(document.get(section), None | Some(Value::Null)) {
                warnings.push(BestPracticeWarning::new(
                    WarningKind::MissingSection,
                    "/",
                    format!("Missing recommended section: {section}"),
                    Severity::Moderate,
                ));
            }
        }
    }

    fn check_usage_examples(&self, document: &Value, warnings: &mut Vec<BestPracticeWarning>) {
        let Some(Value::Array(entries)) = document.get("quick_usage") else {
            return;
        };
        let min = self.config.min_usage_examples;
        if entries.len() < min {
            warnings.push(BestPracticeWarning::new(
                WarningKind::InsufficientExamples,
                "quick_usage",
                format!(
                    "Consider adding more usage examples (found {}, recommended: at least {min})",
                    entries.len()
                ),
                Severity::Minor,
            ));
        }
    }

    fn check_error_examples(&self, document: &Value, warnings: &mut Vec<BestPracticeWarning>) {
        let Some(Value::Array(entries)) = document.get("error_handling") else {
            return;
        };
        for (index, entry) in entries.iter().enumerate() {
            if is_present(entry.get("solution")) && !is_present(entry.get("example")) {
                warnings.push(BestPracticeWarning::new(
                    WarningKind::MissingExample,
                    format!("error_handling[{index}]"),
                    "Consider adding a code example for this error solution",
                    Severity::Minor,
                ));
            }
        }
    }

    fn check_decision_tree_depth(&self, document: &Value, warnings: &mut Vec<BestPracticeWarning>) {
        let Some(tree) = document.get("decision_tree") else {
            return;
        };
        let depth = object_depth(tree);
        let max = self.config.max_decision_tree_depth;
        if depth > max {
            warnings.push(BestPracticeWarning::new(
                WarningKind::DeepNesting,
                "decision_tree",
                format!("Decision tree has {depth} levels of nesting (recommended: at most {max})"),
                Severity::Moderate,
            ));
        }
    }
}

/// Number of `\n`-delimited lines. A trailing newline starts an empty
/// last line, so a YAML `|` block of n lines counts n + 1.
fn count_lines(code: &str) -> usize {
    code.split('\n').count()
}

/// Non-null and, for strings, non-empty.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// `102400` -> `100`, `1536` -> `1.5`.
fn format_kib(bytes: u64) -> String {
    if bytes % 1024 == 0 {
        (bytes / 1024).to_string()
    } else {
        format!("{:.1}", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbered_lines(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A document that trips no check.
    fn clean_document() -> Value {
        json!({
            "name": "demo",
            "version": "1.0.0",
            "description": "A demo project used in tests.",
            "quick_usage": [
                {"description": "Install", "code": "cargo add demo"},
                {"description": "Run", "code": "demo run"}
            ],
            "common_patterns": [{"name": "Batch", "code": "demo batch"}],
            "decision_tree": {"fast": {"yes": "batch", "no": "run"}},
            "error_handling": [
                {"error": "E1", "solution": "retry", "example": "demo run --retry"}
            ]
        })
    }

    fn kinds(warnings: &[BestPracticeWarning]) -> Vec<WarningKind> {
        warnings.iter().map(|w| w.kind).collect()
    }

    #[test]
    fn clean_document_has_no_warnings() {
        let warnings = BestPractices::default().check(&clean_document());
        assert!(warnings.is_empty(), "unexpected: {warnings:?}");
    }

    #[test]
    fn missing_recommended_sections_one_warning_each() {
        let doc = json!({
            "name": "demo",
            "version": "1.0.0",
            "description": "A demo project used in tests.",
            "quick_usage": [
                {"description": "a", "code": "a"},
                {"description": "b", "code": "b"}
            ]
        });
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(warnings.len(), 3);
        let expected = ["decision_tree", "common_patterns", "error_handling"];
        for (warning, section) in warnings.iter().zip(expected) {
            assert_eq!(warning.kind, WarningKind::MissingSection);
            assert_eq!(warning.severity, Severity::Moderate);
            assert_eq!(warning.path, "/");
            assert_eq!(warning.message, format!("Missing recommended section: {section}"));
        }
    }

    #[test]
    fn null_section_counts_as_missing() {
        let mut doc = clean_document();
        doc["decision_tree"] = Value::Null;
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(kinds(&warnings), vec![WarningKind::MissingSection]);
        assert!(warnings[0].message.ends_with("decision_tree"));
    }

    #[test]
    fn long_code_example_reports_line_count() {
        let mut doc = clean_document();
        doc["quick_usage"][1]["code"] = json!(numbered_lines(25));
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(warnings.len(), 1);
        let warning = &warnings[0];
        assert_eq!(warning.kind, WarningKind::CodeLength);
        assert_eq!(warning.severity, Severity::Minor);
        assert_eq!(warning.path, "quick_usage[1]");
        assert!(warning.message.contains("25"));
        assert!(warning.message.contains("20"));
    }

    #[test]
    fn code_at_the_limit_is_accepted() {
        let mut doc = clean_document();
        doc["quick_usage"][0]["code"] = json!(numbered_lines(20));
        assert!(BestPractices::default().check(&doc).is_empty());
    }

    #[test]
    fn trailing_newline_counts_as_a_line() {
        let mut doc = clean_document();
        doc["quick_usage"][0]["code"] = json!(format!("{}\n", numbered_lines(20)));
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::CodeLength);
        assert_eq!(
            warnings[0].message,
            "Code example has 21 lines (recommended: at most 20)"
        );
    }

    #[test]
    fn twenty_line_block_scalar_counts_twenty_one() {
        let code: String = (1..=20).map(|n| format!("l{n}\n")).collect();
        assert_eq!(count_lines(&code), 21);
    }

    #[test]
    fn long_pattern_code_uses_pattern_path() {
        let mut doc = clean_document();
        doc["common_patterns"][0]["code"] = json!(numbered_lines(21));
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "common_patterns[0]");
        assert_eq!(
            warnings[0].message,
            "Code example has 21 lines (recommended: at most 20)"
        );
    }

    #[test]
    fn single_usage_example_is_insufficient() {
        let mut doc = clean_document();
        doc["quick_usage"] = json!([{"description": "Install", "code": "x"}]);
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(kinds(&warnings), vec![WarningKind::InsufficientExamples]);
        assert_eq!(warnings[0].path, "quick_usage");
        assert_eq!(warnings[0].severity, Severity::Minor);
    }

    #[test]
    fn empty_usage_list_is_insufficient() {
        let mut doc = clean_document();
        doc["quick_usage"] = json!([]);
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(kinds(&warnings), vec![WarningKind::InsufficientExamples]);
    }

    #[test]
    fn solution_without_example_is_flagged_at_its_index() {
        let mut doc = clean_document();
        doc["error_handling"] = json!([
            {"error": "E1", "solution": "retry", "example": "demo --retry"},
            {"error": "E2", "solution": "reinstall"}
        ]);
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::MissingExample);
        assert_eq!(warnings[0].path, "error_handling[1]");
    }

    #[test]
    fn empty_strings_are_not_present() {
        let mut doc = clean_document();
        doc["error_handling"] = json!([
            {"error": "E1", "solution": "", "example": ""},
            {"error": "E2", "solution": "fix it", "example": ""},
            {"error": "E3"}
        ]);
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "error_handling[1]");
    }

    #[test]
    fn five_level_decision_tree_is_too_deep() {
        let mut doc = clean_document();
        doc["decision_tree"] = json!({"a": {"b": {"c": {"d": {"e": 1}}}}});
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::DeepNesting);
        assert_eq!(warnings[0].path, "decision_tree");
        assert_eq!(warnings[0].severity, Severity::Moderate);
        assert!(warnings[0].message.contains('5'));
    }

    #[test]
    fn four_level_decision_tree_is_accepted() {
        let mut doc = clean_document();
        doc["decision_tree"] = json!({"a": {"b": {"c": {"d": 1}}}});
        assert!(BestPractices::default().check(&doc).is_empty());
    }

    #[test]
    fn checks_run_in_order() {
        let doc = json!({
            "quick_usage": [{"description": "x", "code": numbered_lines(30)}],
            "decision_tree": {"a": {"b": {"c": {"d": {"e": {"f": 1}}}}}},
            "error_handling": [{"error": "E", "solution": "s"}]
        });
        let warnings = BestPractices::default().check(&doc);
        assert_eq!(
            kinds(&warnings),
            vec![
                WarningKind::CodeLength,
                WarningKind::MissingSection,
                WarningKind::InsufficientExamples,
                WarningKind::MissingExample,
                WarningKind::DeepNesting,
            ]
        );
    }

    #[test]
    fn unexpected_shapes_are_skipped() {
        let doc = json!({
            "quick_usage": "not a list",
            "common_patterns": [42, {"code": 7}, null],
            "error_handling": {"error": "E"},
            "decision_tree": "flat"
        });
        let warnings = BestPractices::default().check(&doc);
        assert!(warnings.is_empty(), "unexpected: {warnings:?}");

        assert_eq!(
            BestPractices::default().check(&json!(null)).len(),
            3,
            "a non-map document only misses sections"
        );
    }

    #[test]
    fn custom_thresholds_apply() {
        let config = LintConfig {
            max_code_lines: 2,
            min_usage_examples: 3,
            max_decision_tree_depth: 1,
            recommended_sections: vec!["related".to_string()],
            ..LintConfig::default()
        };
        let warnings = BestPractices::new(config).check(&clean_document());
        assert_eq!(
            kinds(&warnings),
            vec![
                WarningKind::MissingSection,
                WarningKind::InsufficientExamples,
                WarningKind::DeepNesting,
            ]
        );
        assert_eq!(warnings[0].message, "Missing recommended section: related");
    }

    #[test]
    fn oversized_file_is_flagged() {
        let warning = BestPractices::default()
            .check_file_size(150 * 1024)
            .expect("150KB exceeds the default limit");
        assert_eq!(warning.kind, WarningKind::FileSize);
        assert_eq!(warning.severity, Severity::Moderate);
        assert_eq!(warning.path, "/");
        assert_eq!(warning.message, "File size 150.0KB exceeds recommended 100KB");
    }

    #[test]
    fn file_size_at_or_below_limit_is_accepted() {
        let linter = BestPractices::default();
        assert!(linter.check_file_size(50 * 1024).is_none());
        assert!(linter.check_file_size(100 * 1024).is_none());
        assert!(linter.check_file_size(0).is_none());
    }

    #[test]
    fn fractional_limit_is_rendered_with_one_decimal() {
        let config = LintConfig {
            max_file_size: 1536,
            ..LintConfig::default()
        };
        let warning = BestPractices::new(config).check_file_size(2048).unwrap();
        assert_eq!(warning.message, "File size 2.0KB exceeds recommended 1.5KB");
    }

    #[test]
    fn line_counting() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("one"), 1);
        assert_eq!(count_lines("one\ntwo"), 2);
        assert_eq!(count_lines("one\ntwo\n"), 3);
        assert_eq!(count_lines("one\n\n"), 3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Checks never panic, whatever shape a field has.
            #[test]
            fn arbitrary_field_shapes_do_not_panic(
                usage in prop::collection::vec("[a-z\n]{0,40}", 0..5),
                solution in prop::option::of("[a-z]{0,5}"),
                depth in 0usize..12,
            ) {
                let mut tree = json!(1);
                for _ in 0..depth {
                    let mut level = serde_json::Map::new();
                    level.insert("k".to_string(), tree);
                    tree = Value::Object(level);
                }
                let mut doc = json!({
                    "quick_usage": usage.iter().map(|c| json!({"code": c})).collect::<Vec<_>>(),
                    "error_handling": [{"error": "E", "solution": solution}],
                });
                doc["decision_tree"] = tree;
                let warnings = BestPractices::default().check(&doc);
                let deep = warnings.iter().any(|w| w.kind == WarningKind::DeepNesting);
                prop_assert_eq!(deep, depth > DEFAULT_DEPTH);
            }
        }

        const DEFAULT_DEPTH: usize = llmyml_core::config::DEFAULT_MAX_DECISION_TREE_DEPTH;
    }
}
