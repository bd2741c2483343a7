//! Authorship CLI - Command-line interface for the authorship governance engine
//!
//! This CLI gives pipeline operators a terminal interface to:
//! - Classify extracted image signals and record the decision
//! - Apply an uploader's authorship declaration
//! - Inspect the permissions table and build provenance blocks
//! - Sanitize candidate metadata and lint generated text
//! - Gate a proposed export (exit code 2 when blocked)

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authorship_engine::AuthorshipEngine;

mod commands;
mod config;
mod error;
mod output;

use commands::{classify, declare, export, filter, lint, permissions, prompt, provenance};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Authorship CLI application
#[derive(Parser)]
#[command(name = "authorship")]
#[command(about = "Authorship - evidence-based authorship claims for images", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "AUTHORSHIP_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Classify extracted image signals
    Classify(classify::ClassifyArgs),

    /// Apply the uploader's answer to the authorship question
    Declare(declare::DeclareArgs),

    /// Show metadata permissions for one or all statuses
    Permissions(permissions::PermissionsArgs),

    /// Build the provenance block for a status
    Provenance(provenance::ProvenanceArgs),

    /// Strip metadata fields a status may not carry
    Filter(filter::FilterArgs),

    /// Check text items for forbidden authorship phrases
    Lint(lint::LintArgs),

    /// Print the constraint text for a text generator
    Prompt(prompt::PromptArgs),

    /// Validate a proposed export payload
    Export(export::ExportArgs),
}

/// How a command finished. A blocked export or failed lint is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Blocked,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Blocked => ExitCode::from(2),
        }
    }
}

/// Run using the current process arguments.
pub fn run() -> CliResult<Outcome> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.output.or(config.output).unwrap_or_default();
    let engine = AuthorshipEngine::new(config.engine)?;

    match cli.command {
        Commands::Classify(args) => classify::execute(args, &engine, format),
        Commands::Declare(args) => declare::execute(args, &engine, format),
        Commands::Permissions(args) => permissions::execute(args, &engine, format),
        Commands::Provenance(args) => provenance::execute(args, &engine, format),
        Commands::Filter(args) => filter::execute(args, &engine, format),
        Commands::Lint(args) => lint::execute(args, &engine, format),
        Commands::Prompt(args) => prompt::execute(args, &engine, format),
        Commands::Export(args) => export::execute(args, &engine, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_flag_is_optional_so_config_can_supply_it() {
        let cli = Cli::parse_from(["authorship", "prompt", "unverified"]);
        assert!(cli.output.is_none());
        let cli = Cli::parse_from(["authorship", "-o", "json", "prompt", "unverified"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
