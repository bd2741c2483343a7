//! Permissions table command

use authorship_engine::{permissions_for_tag, AuthorshipEngine, AuthorshipStatus, MetadataPermissions};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::error::CliResult;
use crate::output::{flag, print_header, print_structured, print_warning, OutputFormat};
use crate::Outcome;

/// Arguments for `permissions`
#[derive(Args, Debug)]
pub struct PermissionsArgs {
    /// Status tag; all rows are shown when omitted. Unrecognized tags resolve
    /// to the most restrictive row.
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
struct PermissionRow {
    status: String,
    recognized: bool,
    #[serde(flatten)]
    permissions: MetadataPermissions,
}

/// Execute `permissions`
pub fn execute(
    args: PermissionsArgs,
    engine: &AuthorshipEngine,
    format: OutputFormat,
) -> CliResult<Outcome> {
    let rows: Vec<PermissionRow> = match args.status.as_deref() {
        Some(tag) => match engine.permissions_for_tag_strict(tag) {
            Ok((status, permissions)) => vec![row(status, permissions)],
            Err(e) => {
                debug!(tag, error = %e, "Showing fail-closed row for unrecognized tag");
                vec![PermissionRow {
                    status: tag.to_string(),
                    recognized: false,
                    permissions: permissions_for_tag(tag),
                }]
            }
        },
        None => AuthorshipStatus::ALL
            .into_iter()
            .map(|status| row(status, engine.permissions_for(status)))
            .collect(),
    };

    if !print_structured(&rows, format)? {
        render(&rows);
    }
    Ok(Outcome::Success)
}

fn row(status: AuthorshipStatus, permissions: MetadataPermissions) -> PermissionRow {
    PermissionRow {
        status: status.as_str().to_string(),
        recognized: true,
        permissions,
    }
}

fn render(rows: &[PermissionRow]) {
    print_header("Metadata Permissions");
    println!(
        "  {:<20} {:^8} {:^10} {:^11} {:^9} {:^9}",
        "STATUS".bold(),
        "CREATOR".bold(),
        "COPYRIGHT".bold(),
        "PROVENANCE".bold(),
        "FORCE AI".bold(),
        "PRESERVE".bold()
    );
    for r in rows {
        let p = &r.permissions;
        println!(
            "  {:<20} {:^8} {:^10} {:^11} {:^9} {:^9}",
            r.status,
            flag(p.allow_creator),
            flag(p.allow_copyright_overwrite),
            flag(p.allow_full_provenance),
            flag(p.force_ai_source_type),
            flag(p.preserve_originals)
        );
        if !r.recognized {
            print_warning("Unrecognized status; most restrictive permissions apply");
        }
    }
}
