//! Authorship classifier.
//!
//! A strict, ordered, first-match-wins rule list:
//!
//! 1. **synthetic**: AI signature, AI digital-source-type, or confidence at
//!    or above the threshold. Every matching signal is recorded.
//! 2. **verified_original**: capture evidence, a declared name and an
//!    embedded creator that names the same person.
//! 3. **needs_declaration**: no embedded creator at all; the user must be
//!    asked.
//! 4. **fallback**: anything else is `Unverified` with a conflicting creator.
//!
//! Classification is a pure function of signals and the declared name.

use authorship_types::{
    AuthorshipEvidence, AuthorshipStatus, ClassificationResult, ImageSignals, ReasonCode,
    UsedSignals,
};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;

/// Normalized digital-source-type values that indicate AI origin.
pub const AI_SOURCE_TYPES: &[&str] = &[
    "trainedalgorithmicmedia",
    "compositewithtrainedalgorithmicmedia",
    "algorithmicmedia",
    "compositesynthetic",
    "aigenerated",
    "syntheticmedia",
];

/// Inputs visible to every rule.
pub struct RuleInput<'a> {
    pub signals: &'a ImageSignals,
    pub declared_creator: Option<&'a str>,
    pub config: &'a EngineConfig,
}

/// One step of the priority chain. Returns `Some` when it decides.
pub struct ClassificationRule {
    pub name: &'static str,
    evaluate: fn(&RuleInput<'_>) -> Option<ClassificationResult>,
}

impl ClassificationRule {
    pub fn evaluate(&self, input: &RuleInput<'_>) -> Option<ClassificationResult> {
        (self.evaluate)(input)
    }
}

const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "synthetic",
        evaluate: synthetic_rule,
    },
    ClassificationRule {
        name: "verified_original",
        evaluate: verified_original_rule,
    },
    ClassificationRule {
        name: "needs_declaration",
        evaluate: needs_declaration_rule,
    },
    ClassificationRule {
        name: "fallback",
        evaluate: fallback_rule,
    },
];

/// The priority chain, in evaluation order.
pub fn classification_rules() -> &'static [ClassificationRule] {
    RULES
}

/// Classify with the default configuration.
pub fn classify(signals: &ImageSignals, declared_creator: Option<&str>) -> ClassificationResult {
    classify_with(signals, declared_creator, &EngineConfig::default())
}

/// Classify with an explicit configuration.
pub fn classify_with(
    signals: &ImageSignals,
    declared_creator: Option<&str>,
    config: &EngineConfig,
) -> ClassificationResult {
    let input = RuleInput {
        signals,
        declared_creator,
        config,
    };

    for rule in RULES {
        debug!(rule = rule.name, "Evaluating classification rule");
        if let Some(result) = rule.evaluate(&input) {
            info!(
                rule = rule.name,
                status = %result.status,
                reasons = ?result.evidence.reasons,
                needs_user_declaration = result.needs_user_declaration,
                "Image classified"
            );
            return result;
        }
    }

    conflicting(signals)
}

/// Apply a user's answer to the authorship question, default configuration.
pub fn apply_user_declaration(
    current_status: AuthorshipStatus,
    declared: bool,
    signals: &ImageSignals,
) -> ClassificationResult {
    apply_user_declaration_with(current_status, declared, signals, &EngineConfig::default())
}

/// Apply a user's answer to the authorship question.
///
/// A declaration can move `Unverified` to `DeclaredByUser` (or back). It can
/// never produce `VerifiedOriginal` and never alters `SyntheticAi`.
pub fn apply_user_declaration_with(
    current_status: AuthorshipStatus,
    declared: bool,
    signals: &ImageSignals,
    config: &EngineConfig,
) -> ClassificationResult {
    match current_status {
        AuthorshipStatus::SyntheticAi => {
            info!(declared, "Declaration ignored for synthetic image");
            let (mut used, detected) = synthetic_signals(signals, config);
            used.exif_present = Some(signals.exif_present);
            let mut reasons = vec![ReasonCode::SyntheticOverridesDeclaration];
            reasons.extend(detected);
            ClassificationResult::new(
                AuthorshipStatus::SyntheticAi,
                AuthorshipEvidence::new(
                    used,
                    reasons,
                    "AI-generated content was detected, so a creator declaration cannot change the status.",
                ),
            )
        }
        AuthorshipStatus::VerifiedOriginal => {
            warn!(declared, "Declaration received for machine-verified image; status unchanged");
            ClassificationResult::new(
                AuthorshipStatus::VerifiedOriginal,
                AuthorshipEvidence::new(
                    UsedSignals::capture(signals),
                    vec![ReasonCode::DeclarationNotApplicable],
                    "The image is already machine-verified; a declaration does not change it.",
                ),
            )
        }
        AuthorshipStatus::Unverified | AuthorshipStatus::DeclaredByUser => {
            if declared {
                info!(from = %current_status, "User declared authorship");
                ClassificationResult::new(
                    AuthorshipStatus::DeclaredByUser,
                    AuthorshipEvidence::new(
                        UsedSignals::capture(signals),
                        vec![ReasonCode::UserDeclared],
                        "The creator declared authorship; it has not been machine-verified.",
                    ),
                )
            } else {
                info!(from = %current_status, "User did not declare authorship");
                ClassificationResult::new(
                    AuthorshipStatus::Unverified,
                    AuthorshipEvidence::new(
                        UsedSignals::capture(signals),
                        vec![ReasonCode::UserDeclinedDeclaration],
                        "Authorship was not declared, so no authorship claim is permitted.",
                    ),
                )
            }
        }
    }
}

/// Lower-case and strip whitespace, `_` and `-`.
pub fn normalize_source_type(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a digital-source-type value denotes AI-origin media.
///
/// Matches a bare code or an IPTC NewsCodes URI ending in one.
pub fn is_ai_source_type(raw: &str) -> bool {
    let normalized = normalize_source_type(raw);
    AI_SOURCE_TYPES.iter().any(|entry| {
        normalized == *entry
            || normalized
                .strip_suffix(entry)
                .is_some_and(|prefix| prefix.ends_with('/'))
    })
}

/// Lower-case and collapse runs of whitespace.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Copyright conflict test used by the verified-original rule.
///
/// An existing copyright conflicts only when it does not mention the
/// declared name *and* the existing creator names a different party.
/// Containment is a substring test on normalized names.
pub fn copyright_conflicts(copyright: &str, existing_creator: &str, declared: &str) -> bool {
    let declared = normalize_name(declared);
    let mentions_declared = normalize_name(copyright).contains(&declared);
    let creator_differs = normalize_name(existing_creator) != declared;
    !mentions_declared && creator_differs
}

fn synthetic_signals(
    signals: &ImageSignals,
    config: &EngineConfig,
) -> (UsedSignals, Vec<ReasonCode>) {
    let mut used = UsedSignals::default();
    let mut reasons = Vec::new();

    let signatures: Vec<String> = signals.signatures().map(str::to_string).collect();
    if !signatures.is_empty() {
        used.ai_signatures = signatures;
        reasons.push(ReasonCode::AiMetadataSignature);
    }

    if let Some(source_type) = signals.source_type() {
        if is_ai_source_type(source_type) {
            used.digital_source_type = Some(source_type.to_string());
            reasons.push(ReasonCode::AiSourceType);
        }
    }

    if let Some(confidence) = signals.synthetic_confidence {
        if confidence >= config.synthetic_confidence_threshold {
            used.synthetic_confidence = Some(confidence);
            reasons.push(ReasonCode::SyntheticConfidence);
        }
    }

    (used, reasons)
}

fn synthetic_rule(input: &RuleInput<'_>) -> Option<ClassificationResult> {
    let (used, reasons) = synthetic_signals(input.signals, input.config);
    if reasons.is_empty() {
        return None;
    }

    let detail = reasons
        .iter()
        .map(|r| r.label().to_lowercase())
        .collect::<Vec<_>>()
        .join("; ");
    let summary = format!("AI-generated content detected: {}.", detail);

    Some(ClassificationResult::new(
        AuthorshipStatus::SyntheticAi,
        AuthorshipEvidence::new(used, reasons, summary),
    ))
}

fn verified_original_rule(input: &RuleInput<'_>) -> Option<ClassificationResult> {
    let signals = input.signals;
    if !signals.exif_present {
        return None;
    }
    let declared = input
        .declared_creator
        .map(str::trim)
        .filter(|d| !d.is_empty())?;
    let existing = signals.creator()?;

    if normalize_name(existing) != normalize_name(declared) {
        debug!("Embedded creator does not match declared creator");
        return None;
    }

    if let Some(copyright) = signals.copyright() {
        if copyright_conflicts(copyright, existing, declared) {
            debug!("Embedded copyright conflicts with declared creator");
            return None;
        }
    }

    Some(ClassificationResult::new(
        AuthorshipStatus::VerifiedOriginal,
        AuthorshipEvidence::new(
            UsedSignals::capture(signals),
            vec![ReasonCode::ExifCreatorMatch],
            format!(
                "Capture metadata names \"{}\" as creator, matching the declared creator.",
                existing
            ),
        ),
    ))
}

fn needs_declaration_rule(input: &RuleInput<'_>) -> Option<ClassificationResult> {
    let signals = input.signals;
    if signals.creator().is_some() {
        return None;
    }

    let (reason, summary) = if signals.exif_present {
        (
            ReasonCode::NoCreatorInMetadata,
            "Capture metadata is present but names no creator; authorship must be declared.",
        )
    } else {
        (
            ReasonCode::ExifMissingNoConflict,
            "No capture metadata or embedded creator was found; authorship must be declared.",
        )
    };

    Some(
        ClassificationResult::new(
            AuthorshipStatus::Unverified,
            AuthorshipEvidence::new(UsedSignals::capture(signals), vec![reason], summary),
        )
        .requiring_declaration(),
    )
}

fn fallback_rule(input: &RuleInput<'_>) -> Option<ClassificationResult> {
    Some(conflicting(input.signals))
}

fn conflicting(signals: &ImageSignals) -> ClassificationResult {
    ClassificationResult::new(
        AuthorshipStatus::Unverified,
        AuthorshipEvidence::new(
            UsedSignals::capture(signals),
            vec![ReasonCode::ConflictingCreatorFound],
            "Embedded creator information conflicts with, or cannot be matched to, the declared creator.",
        ),
    )
}
