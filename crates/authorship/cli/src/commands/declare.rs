//! Declaration command

use std::path::PathBuf;

use authorship_engine::{
    AuditEvent, AuditLogger, AuthorshipEngine, AuthorshipStatus, ImageSignals, TracingAuditLogger,
};
use clap::{ArgAction, Args};

use super::{classify, parse_status, read_json};
use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};
use crate::Outcome;

/// Arguments for `declare`
#[derive(Args, Debug)]
pub struct DeclareArgs {
    /// Current status of the image
    #[arg(value_parser = parse_status)]
    pub status: AuthorshipStatus,

    /// JSON file with the image's extracted signals (`-` for stdin)
    pub signals: PathBuf,

    /// Whether the uploader declared authorship
    #[arg(long, action = ArgAction::Set)]
    pub declared: bool,

    /// Asset identifier recorded in the audit trail
    #[arg(long)]
    pub asset_id: Option<String>,
}

/// Execute `declare`
pub fn execute(
    args: DeclareArgs,
    engine: &AuthorshipEngine,
    format: OutputFormat,
) -> CliResult<Outcome> {
    let signals: ImageSignals = read_json(&args.signals)?;
    let result = engine.apply_user_declaration(args.status, args.declared, &signals);
    TracingAuditLogger.record(AuditEvent::declaration(
        args.asset_id.as_deref(),
        args.status,
        args.declared,
        &result,
    ));

    if !print_structured(&result, format)? {
        classify::render("Authorship Declaration", &result);
        println!("  Previous: {}", args.status.label());
    }
    Ok(Outcome::Success)
}
