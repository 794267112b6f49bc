//! # Validate Command
//!
//! Validates one LLM.yml file or every LLM.yml file in a directory.
//!
//! ## Exit codes
//!
//! - `0`: every file parsed and passed schema validation.
//! - `1`: at least one file failed schema validation, or a directory sweep
//!   found no files.
//! - `2`: a file could not be read or parsed. A sweep keeps going so every
//!   file is reported, and `2` wins over `1`.
//!
//! Setup failures (missing target, bad schema, bad config) are returned as
//! errors; the entry point maps them to `2`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use llmyml_core::LintConfig;
use llmyml_schema::CompiledSchema;
use llmyml_validator::{ValidateOptions, Validator};

use crate::discover::find_llm_files;
use crate::output::{self, FileOutcome, OutputFormat, Summary};

/// Every file valid.
pub const EXIT_VALID: u8 = 0;
/// Schema failure, or nothing to validate.
pub const EXIT_INVALID: u8 = 1;
/// Operational error.
pub const EXIT_ERROR: u8 = 2;

/// Arguments for `llm-yml`.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// LLM.yml file, or directory to scan for LLM.yml files.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Search every level below TARGET, not just its immediate subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Only show errors, no warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip best-practice checks.
    #[arg(long)]
    pub no_best_practices: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Lint thresholds file (YAML or JSON).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON Schema to validate against instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,
}

/// Execute a validation run, writing the report to stdout.
///
/// Returns exit code: 0 on success, 1 on validation failure, 2 on operational error.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = run_validate_to(args, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(code)
}

/// Execute a validation run, writing the report to `out`.
pub fn run_validate_to(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let validator = build_validator(args)?;
    let options = ValidateOptions {
        best_practices: !args.no_best_practices,
    };

    let target = &args.target;
    if !target.exists() {
        bail!("path does not exist: {}", target.display());
    }

    let human = args.format == OutputFormat::Human;
    let sweep = target.is_dir();

    let files = if sweep {
        if human {
            output::write_scan_header(out, target)?;
        }
        let files = find_llm_files(target, args.recursive);
        tracing::info!(dir = %target.display(), count = files.len(), "discovered files");
        if files.is_empty() {
            match args.format {
                OutputFormat::Human => output::write_no_files(out)?,
                OutputFormat::Json => output::write_json_report(out, &[])?,
            }
            return Ok(EXIT_INVALID);
        }
        files
    } else {
        vec![target.clone()]
    };

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let outcome = match validator.validate_file_with_options(&path, options) {
            Ok(mut result) => {
                if args.quiet {
                    result.clear_warnings();
                }
                FileOutcome::Checked { path, result }
            }
            Err(error) => {
                tracing::debug!(path = %path.display(), error = %error, "failed to load document");
                FileOutcome::Failed { error }
            }
        };
        if human {
            output::write_outcome(out, &outcome)?;
        }
        outcomes.push(outcome);
    }

    let summary = Summary::from_outcomes(&outcomes);
    match args.format {
        OutputFormat::Human if sweep => output::write_summary(out, &summary)?,
        OutputFormat::Human => {}
        OutputFormat::Json => output::write_json_report(out, &outcomes)?,
    }

    Ok(exit_code(&summary))
}

/// Exit code for a completed run.
pub fn exit_code(summary: &Summary) -> u8 {
    if summary.failed > 0 {
        EXIT_ERROR
    } else if summary.invalid > 0 {
        EXIT_INVALID
    } else {
        EXIT_VALID
    }
}

fn build_validator(args: &ValidateArgs) -> Result<Validator> {
    let schema = match &args.schema {
        Some(path) => CompiledSchema::from_path(path)
            .with_context(|| format!("failed to load schema {}", path.display()))?,
        None => CompiledSchema::builtin().context("failed to compile built-in schema")?,
    };
    let config = match &args.config {
        Some(path) => LintConfig::from_path(path).context("failed to load lint config")?,
        None => LintConfig::default(),
    };
    let validator = Validator::with_config(schema, config);
    tracing::debug!(
        schema_id = ?validator.schema().schema_id(),
        max_code_lines = validator.linter().config().max_code_lines,
        "validator ready"
    );
    Ok(validator)
}
