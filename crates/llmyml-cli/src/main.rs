//! # llm-yml CLI entry point
//!
//! Parses command-line arguments, initializes logging and runs validation.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use llmyml_cli::validate::{run_validate, ValidateArgs, EXIT_ERROR};

/// LLM.yml Validator
///
/// Validates LLM.yml files against the LLM.yml JSON Schema and reports
/// best-practice warnings for files that pass.
///
/// Exit codes: 0 all files valid, 1 validation errors found (or no files
/// found), 2 other errors.
#[derive(Parser, Debug)]
#[command(name = "llm-yml", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    args: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "llm-yml starting");

    match run_validate(&cli.args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
