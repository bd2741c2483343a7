//! Command implementations

pub mod classify;
pub mod declare;
pub mod export;
pub mod filter;
pub mod lint;
pub mod permissions;
pub mod prompt;
pub mod provenance;

use std::io::Read;
use std::path::Path;

use authorship_engine::{AuthorshipStatus, ReasonCode};
use serde::de::DeserializeOwned;

use crate::error::{CliError, CliResult};

/// Read and parse a JSON document; `-` reads stdin.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            CliError::InvalidArgument(format!("cannot read {}: {}", path.display(), e))
        })?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// clap value parser for a status tag.
pub(crate) fn parse_status(raw: &str) -> Result<AuthorshipStatus, String> {
    AuthorshipStatus::parse_tag(raw).map_err(|e| e.to_string())
}

pub(crate) fn join_reasons(reasons: &[ReasonCode]) -> String {
    if reasons.is_empty() {
        return "-".to_string();
    }
    reasons
        .iter()
        .map(ReasonCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
