//! Language lint command

use authorship_engine::{AuthorshipEngine, AuthorshipStatus};
use clap::Args;

use super::parse_status;
use crate::error::CliResult;
use crate::output::{print_blocked, print_header, print_structured, print_success, OutputFormat};
use crate::Outcome;

/// Arguments for `lint`
#[derive(Args, Debug)]
pub struct LintArgs {
    #[arg(value_parser = parse_status)]
    pub status: AuthorshipStatus,

    /// Text items to check
    #[arg(required = true, num_args = 1..)]
    pub texts: Vec<String>,
}

/// Execute `lint`
pub fn execute(
    args: LintArgs,
    engine: &AuthorshipEngine,
    format: OutputFormat,
) -> CliResult<Outcome> {
    let report = engine.validate_texts(&args.texts, args.status);

    if !print_structured(&report, format)? {
        print_header("Language Check");
        for (index, text) in args.texts.iter().enumerate() {
            let found: Vec<_> = report
                .violations
                .iter()
                .filter(|v| v.item_index == index)
                .collect();
            if found.is_empty() {
                print_success(text);
            } else {
                print_blocked(text);
                for v in found {
                    println!("      {}", v.message);
                }
            }
        }
    }

    Ok(if report.valid {
        Outcome::Success
    } else {
        Outcome::Blocked
    })
}
