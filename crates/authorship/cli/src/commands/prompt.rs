//! Prompt constraint command

use authorship_engine::language::{allowed_phrases, forbidden_phrases};
use authorship_engine::{AuthorshipEngine, AuthorshipStatus};
use clap::Args;
use serde::Serialize;

use super::parse_status;
use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};
use crate::Outcome;

/// Arguments for `prompt`
#[derive(Args, Debug)]
pub struct PromptArgs {
    #[arg(value_parser = parse_status)]
    pub status: AuthorshipStatus,
}

#[derive(Debug, Serialize)]
struct PromptView {
    status: AuthorshipStatus,
    instruction: String,
    allowed_phrases: &'static [&'static str],
    forbidden_phrases: Vec<&'static str>,
}

/// Execute `prompt`
pub fn execute(
    args: PromptArgs,
    engine: &AuthorshipEngine,
    format: OutputFormat,
) -> CliResult<Outcome> {
    let view = PromptView {
        status: args.status,
        instruction: engine.prompt_instruction(args.status),
        allowed_phrases: allowed_phrases(args.status),
        forbidden_phrases: forbidden_phrases(args.status),
    };

    // Plain text in table mode so it can be piped into a generator
    if !print_structured(&view, format)? {
        println!("{}", view.instruction);
    }
    Ok(Outcome::Success)
}
