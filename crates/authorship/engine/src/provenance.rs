//! Provenance block construction and metadata sanitizing.
//!
//! [`filter_metadata`] is the single point where upstream-generated metadata
//! is sanitized before it reaches any writer.

use std::collections::BTreeMap;

use authorship_types::fields::{self, is_field};
use authorship_types::AuthorshipStatus;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::permissions::permissions_for;

pub const KEY_STATUS: &str = "authorship_status";
pub const KEY_CLASSIFIED_AT: &str = "classified_at";
pub const KEY_ENGINE_VERSION: &str = "engine_version";
pub const KEY_VERIFICATION_LEVEL: &str = "verification_level";
pub const KEY_VERIFIED_CREATOR: &str = "verified_creator";
pub const KEY_DECLARED_AUTHOR: &str = "declared_author";
pub const KEY_HUMAN_ROLE: &str = "human_role";
pub const KEY_GENERATION_TOOL: &str = "generation_tool";

/// Optional inputs to a provenance block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvenanceOptions {
    /// Author name: verified creator or self-declared author
    pub declared_author: Option<String>,
    /// Human role for synthetic images
    pub human_role: Option<String>,
    /// Generation tool for synthetic images
    pub generation_tool: Option<String>,
    /// Classification time; now when absent
    pub classified_at: Option<DateTime<Utc>>,
}

impl ProvenanceOptions {
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.declared_author = Some(author.into());
        self
    }

    pub fn with_human_role(mut self, role: impl Into<String>) -> Self {
        self.human_role = Some(role.into());
        self
    }

    pub fn with_generation_tool(mut self, tool: impl Into<String>) -> Self {
        self.generation_tool = Some(tool.into());
        self
    }

    pub fn classified_at(mut self, at: DateTime<Utc>) -> Self {
        self.classified_at = Some(at);
        self
    }
}

/// Build the provenance tag map with the default configuration.
pub fn build_provenance_block(
    status: AuthorshipStatus,
    options: &ProvenanceOptions,
) -> BTreeMap<String, String> {
    build_provenance_block_with(status, options, &EngineConfig::default())
}

/// Build the structured provenance fields embedded downstream.
pub fn build_provenance_block_with(
    status: AuthorshipStatus,
    options: &ProvenanceOptions,
    config: &EngineConfig,
) -> BTreeMap<String, String> {
    let mut block = BTreeMap::new();
    let classified_at = options.classified_at.unwrap_or_else(Utc::now);

    block.insert(KEY_STATUS.to_string(), status.as_str().to_string());
    block.insert(
        KEY_CLASSIFIED_AT.to_string(),
        classified_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    );
    block.insert(KEY_ENGINE_VERSION.to_string(), config.engine_version.clone());

    let author = non_blank(options.declared_author.as_deref());

    match status {
        AuthorshipStatus::VerifiedOriginal => {
            block.insert(KEY_VERIFICATION_LEVEL.to_string(), "machine-verified".to_string());
            if let Some(author) = author {
                block.insert(KEY_VERIFIED_CREATOR.to_string(), author.to_string());
            }
        }
        AuthorshipStatus::DeclaredByUser => {
            block.insert(KEY_VERIFICATION_LEVEL.to_string(), "not-verified".to_string());
            if let Some(author) = author {
                block.insert(KEY_DECLARED_AUTHOR.to_string(), author.to_string());
            }
        }
        AuthorshipStatus::Unverified => {
            block.insert(KEY_VERIFICATION_LEVEL.to_string(), "unverified".to_string());
        }
        AuthorshipStatus::SyntheticAi => {
            let role = non_blank(options.human_role.as_deref())
                .unwrap_or(config.default_human_role.as_str());
            block.insert(KEY_HUMAN_ROLE.to_string(), role.to_string());
            if let Some(tool) = non_blank(options.generation_tool.as_deref()) {
                block.insert(KEY_GENERATION_TOOL.to_string(), tool.to_string());
            }
        }
    }

    block
}

/// Result of sanitizing a candidate metadata map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredMetadata {
    pub fields: BTreeMap<String, String>,
    /// Names of candidate fields the status does not permit
    pub removed: Vec<String>,
}

/// Sanitize metadata with the default configuration.
pub fn filter_metadata(
    candidate: &BTreeMap<String, String>,
    status: AuthorshipStatus,
    declared_creator: Option<&str>,
) -> FilteredMetadata {
    filter_metadata_with(candidate, status, declared_creator, &EngineConfig::default())
}

/// Strip fields the status may not carry and force the fields it must.
///
/// - `creator` / `copyright` are removed unless permitted.
/// - `SyntheticAi` always gets the AI source-type marker, whatever the input.
/// - `VerifiedOriginal` gets `creator` set to the declared name when given.
pub fn filter_metadata_with(
    candidate: &BTreeMap<String, String>,
    status: AuthorshipStatus,
    declared_creator: Option<&str>,
    config: &EngineConfig,
) -> FilteredMetadata {
    let permissions = permissions_for(status);
    let mut out = FilteredMetadata::default();

    for (name, value) in candidate {
        let blocked = (is_field(name, fields::CREATOR) && !permissions.allow_creator)
            || (is_field(name, fields::COPYRIGHT) && !permissions.allow_copyright_overwrite);
        if blocked {
            out.removed.push(name.clone());
            continue;
        }
        if permissions.force_ai_source_type && is_field(name, fields::DIGITAL_SOURCE_TYPE) {
            continue;
        }
        out.fields.insert(name.clone(), value.clone());
    }

    if permissions.force_ai_source_type {
        out.fields.insert(
            fields::DIGITAL_SOURCE_TYPE.to_string(),
            config.ai_source_type_marker.clone(),
        );
    }

    if status == AuthorshipStatus::VerifiedOriginal {
        if let Some(declared) = non_blank(declared_creator) {
            out.fields.retain(|name, _| !is_field(name, fields::CREATOR));
            out.fields
                .insert(fields::CREATOR.to_string(), declared.to_string());
        }
    }

    if !out.removed.is_empty() {
        debug!(status = %status, removed = ?out.removed, "Metadata fields stripped");
    }

    out
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
