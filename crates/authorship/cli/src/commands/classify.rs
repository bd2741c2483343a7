//! Classification command

use std::path::PathBuf;

use authorship_engine::{
    AuditEvent, AuditLogger, AuthorshipEngine, ClassificationResult, ImageSignals,
    TracingAuditLogger,
};
use clap::Args;

use super::{join_reasons, read_json};
use crate::error::CliResult;
use crate::output::{print_header, print_structured, print_warning, status_label, OutputFormat};
use crate::Outcome;

/// Arguments for `classify`
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON file with extracted image signals (`-` for stdin)
    pub signals: PathBuf,

    /// Creator name the uploader supplied
    #[arg(long)]
    pub declared_name: Option<String>,

    /// Asset identifier recorded in the audit trail
    #[arg(long)]
    pub asset_id: Option<String>,
}

/// Execute `classify`
pub fn execute(
    args: ClassifyArgs,
    engine: &AuthorshipEngine,
    format: OutputFormat,
) -> CliResult<Outcome> {
    let signals: ImageSignals = read_json(&args.signals)?;
    let result = engine.classify(&signals, args.declared_name.as_deref());
    TracingAuditLogger.record(AuditEvent::classified(args.asset_id.as_deref(), &result));

    if !print_structured(&result, format)? {
        render("Authorship Classification", &result);
    }
    Ok(Outcome::Success)
}

pub(crate) fn render(title: &str, result: &ClassificationResult) {
    print_header(title);
    println!("  Status:   {}", status_label(result.status));
    println!("  Reasons:  {}", join_reasons(&result.evidence.reasons));
    println!("  Summary:  {}", result.evidence.summary);
    if result.needs_user_declaration {
        println!();
        print_warning("Authorship must be declared by the uploader (see `authorship declare`)");
    }
}
