//! Metadata filter command

use std::collections::BTreeMap;
use std::path::PathBuf;

use authorship_engine::{AuthorshipEngine, AuthorshipStatus};
use clap::Args;
use colored::Colorize;

use super::{parse_status, read_json};
use crate::error::CliResult;
use crate::output::{print_header, print_structured, OutputFormat};
use crate::Outcome;

/// Arguments for `filter`
#[derive(Args, Debug)]
pub struct FilterArgs {
    #[arg(value_parser = parse_status)]
    pub status: AuthorshipStatus,

    /// JSON object of candidate metadata fields (`-` for stdin)
    pub fields: PathBuf,

    /// Declared creator name, written as `creator` for verified originals
    #[arg(long)]
    pub declared_name: Option<String>,
}

/// Execute `filter`
pub fn execute(
    args: FilterArgs,
    engine: &AuthorshipEngine,
    format: OutputFormat,
) -> CliResult<Outcome> {
    let candidate: BTreeMap<String, String> = read_json(&args.fields)?;
    let filtered = engine.filter_metadata(&candidate, args.status, args.declared_name.as_deref());

    if !print_structured(&filtered, format)? {
        print_header("Filtered Metadata");
        for (key, value) in &filtered.fields {
            println!("  {:<24} {}", key.bold(), value);
        }
        if !filtered.removed.is_empty() {
            println!();
            println!("  {} {}", "Removed:".red().bold(), filtered.removed.join(", "));
        }
    }
    Ok(Outcome::Success)
}
