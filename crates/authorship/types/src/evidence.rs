use serde::{Deserialize, Serialize};

use crate::reason::ReasonCode;
use crate::signals::ImageSignals;
use crate::status::AuthorshipStatus;

/// The subset of signals a decision actually rested on.
///
/// Only the fields a rule consulted are populated; raw metadata dumps are
/// never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsedSignals {
    pub exif_present: Option<bool>,
    pub camera_make: Option<String>,
    pub camera_model: Option<String>,
    pub existing_creator: Option<String>,
    pub existing_copyright: Option<String>,
    pub digital_source_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ai_signatures: Vec<String>,
    pub synthetic_confidence: Option<f64>,
}

impl UsedSignals {
    /// Capture-side fields: presence flag, camera and embedded creator/copyright.
    pub fn capture(signals: &ImageSignals) -> Self {
        Self {
            exif_present: Some(signals.exif_present),
            camera_make: signals.camera_make.clone(),
            camera_model: signals.camera_model.clone(),
            existing_creator: signals.creator().map(str::to_string),
            existing_copyright: signals.copyright().map(str::to_string),
            ..Default::default()
        }
    }
}

/// Immutable snapshot explaining a status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorshipEvidence {
    pub signals_used: UsedSignals,
    /// Ordered reason codes; the first is the primary reason
    pub reasons: Vec<ReasonCode>,
    /// One human-readable sentence
    pub summary: String,
}

impl AuthorshipEvidence {
    pub fn new(signals_used: UsedSignals, reasons: Vec<ReasonCode>, summary: impl Into<String>) -> Self {
        Self {
            signals_used,
            reasons,
            summary: summary.into(),
        }
    }

    pub fn has_reason(&self, code: ReasonCode) -> bool {
        self.reasons.contains(&code)
    }

    pub fn primary_reason(&self) -> Option<ReasonCode> {
        self.reasons.first().copied()
    }
}

/// Outcome of classifying an image or applying a declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub status: AuthorshipStatus,
    pub evidence: AuthorshipEvidence,
    /// The user must be asked whether they created the image
    pub needs_user_declaration: bool,
}

impl ClassificationResult {
    pub fn new(status: AuthorshipStatus, evidence: AuthorshipEvidence) -> Self {
        Self {
            status,
            evidence,
            needs_user_declaration: false,
        }
    }

    pub fn requiring_declaration(mut self) -> Self {
        self.needs_user_declaration = true;
        self
    }
}
