//! Provenance block command

use authorship_engine::{AuthorshipEngine, AuthorshipStatus, ProvenanceOptions};
use clap::Args;
use colored::Colorize;

use super::parse_status;
use crate::error::CliResult;
use crate::output::{print_header, print_structured, OutputFormat};
use crate::Outcome;

/// Arguments for `provenance`
#[derive(Args, Debug)]
pub struct ProvenanceArgs {
    #[arg(value_parser = parse_status)]
    pub status: AuthorshipStatus,

    /// Verified creator or self-declared author
    #[arg(long)]
    pub author: Option<String>,

    /// Human role, for synthetic images
    #[arg(long)]
    pub role: Option<String>,

    /// Generation tool, for synthetic images
    #[arg(long)]
    pub tool: Option<String>,
}

/// Execute `provenance`
pub fn execute(
    args: ProvenanceArgs,
    engine: &AuthorshipEngine,
    format: OutputFormat,
) -> CliResult<Outcome> {
    let options = ProvenanceOptions {
        declared_author: args.author,
        human_role: args.role,
        generation_tool: args.tool,
        classified_at: None,
    };
    let block = engine.build_provenance_block(args.status, &options);

    if !print_structured(&block, format)? {
        print_header("Provenance Block");
        for (key, value) in &block {
            println!("  {:<20} {}", key.bold(), value);
        }
    }
    Ok(Outcome::Success)
}
