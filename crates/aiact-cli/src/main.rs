//! # aiact CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aiact_cli::assess::{run_assess, AssessArgs};
use aiact_cli::config::CliConfig;
use aiact_cli::questions::{run_questions, QuestionsArgs};
use aiact_cli::verify::{run_verify, VerifyArgs};

/// EU AI Act risk assessment.
///
/// Walks the questionnaire, classifies the answers against the AI Act risk
/// tiers, and exports a SHA-256 sealed compliance report.
#[derive(Parser, Debug)]
#[command(name = "aiact", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the questionnaire catalog.
    Questions(QuestionsArgs),

    /// Run an assessment and export the sealed report.
    Assess(AssessArgs),

    /// Verify the integrity digest of a sealed JSON report.
    Verify(VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

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

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "aiact CLI starting");

    let config = match CliConfig::load_optional(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Questions(args) => run_questions(&args, &mut stdout),
        Commands::Assess(args) => {
            let mut stdin = std::io::stdin().lock();
            run_assess(&args, &config, &mut stdin, &mut stdout)
        }
        Commands::Verify(args) => run_verify(&args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
