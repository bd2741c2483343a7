//! Export gate command

use std::path::PathBuf;

use authorship_engine::{
    AuditEvent, AuditLogger, AuthorshipEngine, ExportValidationResult, RawExportPayload,
    TracingAuditLogger,
};
use clap::Args;
use colored::Colorize;

use super::{join_reasons, read_json};
use crate::error::CliResult;
use crate::output::{print_blocked, print_header, print_structured, print_success, OutputFormat};
use crate::Outcome;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// JSON export payload (`-` for stdin)
    pub payload: PathBuf,

    /// Asset identifier recorded in the audit trail
    #[arg(long)]
    pub asset_id: Option<String>,
}

/// Execute `export`. Exits with [`Outcome::Blocked`] when the guard refuses.
pub fn execute(
    args: ExportArgs,
    engine: &AuthorshipEngine,
    format: OutputFormat,
) -> CliResult<Outcome> {
    let raw: RawExportPayload = read_json(&args.payload)?;
    let result = engine.validate_raw_export(&raw);
    TracingAuditLogger.record(AuditEvent::export(
        args.asset_id.as_deref(),
        raw.parse_status().ok(),
        raw.kind,
        &result,
    ));

    if !print_structured(&result, format)? {
        render(&raw, &result);
    }

    Ok(if result.allowed {
        Outcome::Success
    } else {
        Outcome::Blocked
    })
}

fn render(raw: &RawExportPayload, result: &ExportValidationResult) {
    print_header("Export Validation");
    println!("  Status:   {}", raw.status);
    println!("  Kind:     {}", raw.kind);
    println!();
    if result.allowed {
        print_success("Export allowed");
        return;
    }
    print_blocked("Export blocked");
    println!("  Reasons:  {}", join_reasons(&result.reason_codes));
    for message in &result.violations {
        println!("    - {}", message);
    }
    if !result.filtered_fields.is_empty() {
        println!(
            "  {} {}",
            "Strip before retrying:".yellow(),
            result.filtered_fields.join(", ")
        );
    }
}
