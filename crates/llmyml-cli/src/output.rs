//! # Output Formatting
//!
//! Renders per-file outcomes either as colored human-readable text or as a
//! single JSON report for the whole run.
//!
//! Renderers write to any `io::Write` so tests can capture output. Color is
//! controlled by `colored`, which honours `NO_COLOR` and `CLICOLOR`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use colored::Colorize;
use llmyml_core::{
    BestPracticeWarning, LoadError, SchemaViolation, Severity, ValidationResult,
};
use serde::Serialize;

/// Output format options for CLI results.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Human,
    /// One JSON report for the whole run.
    Json,
}

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was parsed and validated.
    Checked {
        path: PathBuf,
        result: ValidationResult,
    },
    /// The file could not be read or parsed.
    Failed { error: LoadError },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Checked { path, .. } => path,
            Self::Failed { error } => error.path(),
        }
    }

    /// True only for a parsed, schema-valid file.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Checked { result, .. } if result.is_valid())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Counts over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            if outcome.is_failure() {
                summary.failed += 1;
            } else if outcome.is_valid() {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
            }
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// Human output
// ---------------------------------------------------------------------------

/// Header printed before a directory sweep.
pub fn write_scan_header(out: &mut impl Write, dir: &Path) -> io::Result<()> {
    writeln!(out, "{} {}", "Scanning directory:".blue(), dir.display())
}

/// Notice for a sweep that found nothing.
pub fn write_no_files(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "No LLM.yml files found".yellow())
}

/// Render one file's outcome.
pub fn write_outcome(out: &mut impl Write, outcome: &FileOutcome) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", "Validating:".blue(), outcome.path().display())?;

    match outcome {
        FileOutcome::Checked { result, .. } if result.is_valid() => {
            writeln!(out, "{}", "✓ Valid LLM.yml file".green())?;
            if !result.warnings().is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", "⚠ Best Practice Warnings:".yellow())?;
                for warning in result.warnings() {
                    write_warning(out, warning)?;
                }
            }
        }
        FileOutcome::Checked { result, .. } => {
            writeln!(out, "{}", "✗ Schema Validation Failed:".red())?;
            for violation in result.errors() {
                write_violation(out, violation)?;
            }
        }
        FileOutcome::Failed { error } => match error.parse_error() {
            Some(parse) => {
                writeln!(out, "{} {}", "✗ Parse Error:".red(), parse.message)?;
                if let Some((line, column)) = parse.location() {
                    writeln!(
                        out,
                        "  {}",
                        format!("at line {line}, column {column}").dimmed()
                    )?;
                }
            }
            None => writeln!(out, "{} {}", "✗ Error:".red(), error)?,
        },
    }
    Ok(())
}

/// Closing line of a directory sweep.
pub fn write_summary(out: &mut impl Write, summary: &Summary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {}/{} file(s) valid",
        "Summary:".blue(),
        summary.valid,
        summary.total
    )
}

fn write_violation(out: &mut impl Write, violation: &SchemaViolation) -> io::Result<()> {
    writeln!(out, "  {}: {}", violation.path.yellow(), violation.message)?;
    if let Some(params) = &violation.params {
        let details = serde_json::to_string(params).map_err(io::Error::other)?;
        writeln!(out, "  {}", format!("Details: {details}").dimmed())?;
    }
    Ok(())
}

fn write_warning(out: &mut impl Write, warning: &BestPracticeWarning) -> io::Result<()> {
    let tag = format!("[{}]", warning.severity);
    let tag = match warning.severity {
        Severity::Moderate => tag.yellow(),
        Severity::Minor => tag.dimmed(),
    };
    writeln!(out, "  {} {}", tag, warning.message)
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

/// Machine-readable report for a whole run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// True iff at least one file was checked and every file parsed and
    /// passed schema validation.
    pub valid: bool,
    pub files: Vec<JsonFile<'a>>,
    pub summary: Summary,
}

/// One file in a [`JsonReport`].
#[derive(Debug, Serialize)]
pub struct JsonFile<'a> {
    pub path: String,
    pub valid: bool,
    pub errors: &'a [SchemaViolation],
    pub warnings: &'a [BestPracticeWarning],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<JsonFailure>,
}

/// Why a file could not be validated.
#[derive(Debug, Serialize)]
pub struct JsonFailure {
    /// `io` or `parse`.
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl<'a> JsonReport<'a> {
    pub fn new(outcomes: &'a [FileOutcome]) -> Self {
        let summary = Summary::from_outcomes(outcomes);
        Self {
            valid: summary.total > 0 && summary.valid == summary.total,
            files: outcomes.iter().map(JsonFile::from_outcome).collect(),
            summary,
        }
    }
}

impl<'a> JsonFile<'a> {
    fn from_outcome(outcome: &'a FileOutcome) -> Self {
        let path = outcome.path().display().to_string();
        match outcome {
            FileOutcome::Checked { result, .. } => Self {
                path,
                valid: result.is_valid(),
                errors: result.errors(),
                warnings: result.warnings(),
                failure: None,
            },
            FileOutcome::Failed { error } => {
                let failure = match error.parse_error() {
                    Some(parse) => JsonFailure {
                        kind: "parse",
                        message: parse.message.clone(),
                        line: parse.line,
                        column: parse.column,
                    },
                    None => JsonFailure {
                        kind: "io",
                        message: error.to_string(),
                        line: None,
                        column: None,
                    },
                };
                Self {
                    path,
                    valid: false,
                    errors: &[],
                    warnings: &[],
                    failure: Some(failure),
                }
            }
        }
    }
}

/// Pretty-print the report for a run.
pub fn write_json_report(out: &mut impl Write, outcomes: &[FileOutcome]) -> io::Result<()> {
    let report = JsonReport::new(outcomes);
    serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::other)?;
    writeln!(out)
}
