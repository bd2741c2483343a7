//! Export guard: the final gate before any outbound artifact.
//!
//! Stateless: each call inspects one proposed export. Checks run
//! independently and accumulate so the caller sees every reason in one pass:
//!
//! 1. `creator` metadata without creator rights → `CREATOR_FIELD_BLOCKED`
//! 2. `copyright` metadata without overwrite rights → `COPYRIGHT_OVERWRITE_BLOCKED`
//! 3. explicit claimed creator without creator rights → `AUTHORSHIP_CLAIM_BLOCKED`
//! 4. copyright flag without overwrite rights → `COPYRIGHT_OVERWRITE_BLOCKED`
//! 5. forbidden phrases in any text item → `LANGUAGE_VIOLATION`
//! 6. synthetic image declaring a non-AI source type → `SOURCE_TYPE_MISREPRESENTED`
//!
//! A block is a normal return value. Retrying an unchanged payload yields
//! the same verdict.

use std::collections::BTreeMap;

use authorship_types::fields::{self, is_field};
use authorship_types::{
    AuthorshipStatus, ExportKind, ExportPayload, ExportValidationResult, LanguageViolation,
    MetadataPermissions, RawExportPayload, ReasonCode,
};
use tracing::{debug, warn};

use crate::classifier::is_ai_source_type;
use crate::language;
use crate::permissions::permissions_for;

/// Validate a typed export payload.
pub fn validate_export(payload: &ExportPayload) -> ExportValidationResult {
    evaluate(
        Some(payload.status),
        &ExportParts {
            kind: payload.kind,
            metadata: payload.metadata.as_ref(),
            text_content: payload.text_content.as_deref(),
            claimed_creator: payload.claimed_creator.as_deref(),
            setting_copyright: payload.setting_copyright.unwrap_or(false),
        },
    )
}

/// Validate a payload whose status is still an untyped tag.
///
/// An unrecognized tag is blocked with `UNRECOGNIZED_STATUS` and every other
/// check runs against the most restrictive permissions and the strictest
/// language table.
pub fn validate_raw_export(raw: &RawExportPayload) -> ExportValidationResult {
    let status = match raw.parse_status() {
        Ok(status) => Some(status),
        Err(e) => {
            warn!(tag = %raw.status, error = %e, "Export payload carries unrecognized status");
            None
        }
    };
    evaluate(
        status,
        &ExportParts {
            kind: raw.kind,
            metadata: raw.metadata.as_ref(),
            text_content: raw.text_content.as_deref(),
            claimed_creator: raw.claimed_creator.as_deref(),
            setting_copyright: raw.setting_copyright.unwrap_or(false),
        },
    )
}

struct ExportParts<'a> {
    kind: ExportKind,
    metadata: Option<&'a BTreeMap<String, String>>,
    text_content: Option<&'a [String]>,
    claimed_creator: Option<&'a str>,
    setting_copyright: bool,
}

#[derive(Default)]
struct Verdict {
    reason_codes: Vec<ReasonCode>,
    violations: Vec<String>,
    language_violations: Vec<LanguageViolation>,
}

impl Verdict {
    fn block(&mut self, code: ReasonCode, message: String) {
        if !self.reason_codes.contains(&code) {
            self.reason_codes.push(code);
        }
        if !self.violations.contains(&message) {
            self.violations.push(message);
        }
    }
}

fn evaluate(status: Option<AuthorshipStatus>, parts: &ExportParts<'_>) -> ExportValidationResult {
    let permissions = status
        .map(permissions_for)
        .unwrap_or_else(MetadataPermissions::most_restrictive);
    let subject = status
        .map(|s| format!("{} images", s.label().to_lowercase()))
        .unwrap_or_else(|| "images with an unrecognized status".to_string());

    let mut verdict = Verdict::default();

    if status.is_none() {
        verdict.block(
            ReasonCode::UnrecognizedStatus,
            "Authorship status is not recognized; nothing may be exported until the image is reclassified.".to_string(),
        );
    }

    if let Some(metadata) = parts.metadata {
        for name in metadata.keys() {
            if is_field(name, fields::CREATOR) && !permissions.allow_creator {
                verdict.block(
                    ReasonCode::CreatorFieldBlocked,
                    format!("Metadata field \"{}\" may not be written for {}.", name, subject),
                );
            }
            if is_field(name, fields::COPYRIGHT) && !permissions.allow_copyright_overwrite {
                verdict.block(
                    ReasonCode::CopyrightOverwriteBlocked,
                    format!("Metadata field \"{}\" may not be overwritten for {}.", name, subject),
                );
            }
        }
    }

    if let Some(claimed) = parts.claimed_creator {
        if !permissions.allow_creator {
            verdict.block(
                ReasonCode::AuthorshipClaimBlocked,
                format!("Claiming \"{}\" as creator is not permitted for {}.", claimed, subject),
            );
        }
    }

    if parts.setting_copyright
        && !permissions.allow_copyright_overwrite
        && !verdict.reason_codes.contains(&ReasonCode::CopyrightOverwriteBlocked)
    {
        verdict.block(
            ReasonCode::CopyrightOverwriteBlocked,
            format!("Setting copyright is not permitted for {}.", subject),
        );
    }

    if let Some(texts) = parts.text_content {
        let language_status = status.unwrap_or(AuthorshipStatus::SyntheticAi);
        let report = language::validate_all(texts, language_status);
        if !report.valid {
            for violation in &report.violations {
                verdict.block(
                    ReasonCode::LanguageViolation,
                    format!("Text item {}: {}", violation.item_index, violation.message),
                );
            }
            verdict.language_violations = report.violations;
        }
    }

    if status == Some(AuthorshipStatus::SyntheticAi) {
        if let Some(metadata) = parts.metadata {
            let misrepresented = metadata.iter().find(|(name, value)| {
                is_field(name, fields::DIGITAL_SOURCE_TYPE) && !is_ai_source_type(value)
            });
            if let Some((_, value)) = misrepresented {
                verdict.block(
                    ReasonCode::SourceTypeMisrepresented,
                    format!(
                        "Source type \"{}\" does not disclose AI generation for a synthetic image.",
                        value
                    ),
                );
            }
        }
    }

    let filtered_fields = parts
        .metadata
        .map(|metadata| disallowed_fields(metadata, &permissions))
        .unwrap_or_default();

    let allowed = verdict.reason_codes.is_empty();
    if allowed {
        debug!(status = ?status, kind = %parts.kind, "Export allowed");
    } else {
        warn!(
            status = ?status,
            kind = %parts.kind,
            reasons = ?verdict.reason_codes,
            "Export blocked"
        );
    }

    ExportValidationResult {
        allowed,
        reason_codes: verdict.reason_codes,
        violations: verdict.violations,
        filtered_fields,
        language_violations: verdict.language_violations,
    }
}

fn disallowed_fields(
    metadata: &BTreeMap<String, String>,
    permissions: &MetadataPermissions,
) -> Vec<String> {
    metadata
        .keys()
        .filter(|name| {
            (is_field(name, fields::CREATOR) && !permissions.allow_creator)
                || (is_field(name, fields::COPYRIGHT) && !permissions.allow_copyright_overwrite)
        })
        .cloned()
        .collect()
}
