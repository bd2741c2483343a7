use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::reason::ReasonCode;
use crate::status::AuthorshipStatus;

/// What kind of outbound artifact an export produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// Metadata embedded into the image container
    #[default]
    EmbeddedMetadata,
    Caption,
    AltText,
    CaseStudy,
    SocialPost,
    WebPublish,
    Other,
}

impl ExportKind {
    pub const ALL: [ExportKind; 7] = [
        ExportKind::EmbeddedMetadata,
        ExportKind::Caption,
        ExportKind::AltText,
        ExportKind::CaseStudy,
        ExportKind::SocialPost,
        ExportKind::WebPublish,
        ExportKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::EmbeddedMetadata => "embedded_metadata",
            ExportKind::Caption => "caption",
            ExportKind::AltText => "alt_text",
            ExportKind::CaseStudy => "case_study",
            ExportKind::SocialPost => "social_post",
            ExportKind::WebPublish => "web_publish",
            ExportKind::Other => "other",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| TypesError::UnknownExportKind(s.to_string()))
    }
}

/// A proposed export, assembled by the export pipeline from the asset's
/// persisted status and the fields/text it intends to write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub status: AuthorshipStatus,
    #[serde(default)]
    pub kind: ExportKind,
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub text_content: Option<Vec<String>>,
    #[serde(default)]
    pub claimed_creator: Option<String>,
    #[serde(default)]
    pub setting_copyright: Option<bool>,
}

impl ExportPayload {
    pub fn new(status: AuthorshipStatus, kind: ExportKind) -> Self {
        Self {
            status,
            kind,
            metadata: None,
            text_content: None,
            claimed_creator: None,
            setting_copyright: None,
        }
    }

    pub fn with_metadata<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = self.metadata.get_or_insert_with(BTreeMap::new);
        for (k, v) in fields {
            map.insert(k.into(), v.into());
        }
        self
    }

    pub fn with_text<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.text_content
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    pub fn claiming_creator(mut self, creator: impl Into<String>) -> Self {
        self.claimed_creator = Some(creator.into());
        self
    }

    pub fn setting_copyright(mut self, setting: bool) -> Self {
        self.setting_copyright = Some(setting);
        self
    }
}

/// An export payload whose status has not been parsed yet.
///
/// Used at process boundaries (JSON files, queues) where the status arrives
/// as a string. The engine resolves unrecognized tags fail-closed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawExportPayload {
    pub status: String,
    #[serde(default)]
    pub kind: ExportKind,
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub text_content: Option<Vec<String>>,
    #[serde(default)]
    pub claimed_creator: Option<String>,
    #[serde(default)]
    pub setting_copyright: Option<bool>,
}

impl RawExportPayload {
    pub fn parse_status(&self) -> Result<AuthorshipStatus, TypesError> {
        AuthorshipStatus::parse_tag(&self.status)
    }

    /// Attach a status to the remaining fields.
    pub fn with_status(self, status: AuthorshipStatus) -> ExportPayload {
        ExportPayload {
            status,
            kind: self.kind,
            metadata: self.metadata,
            text_content: self.text_content,
            claimed_creator: self.claimed_creator,
            setting_copyright: self.setting_copyright,
        }
    }
}

/// One forbidden phrase found in a text item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageViolation {
    /// Index of the text item within its batch
    #[serde(default)]
    pub item_index: usize,
    /// The matched substring, as written
    pub matched: String,
    /// Character (not byte) offset of the match within the item
    pub offset: usize,
    pub reason: ReasonCode,
    pub message: String,
}

/// Verdict of the export guard.
///
/// A block is an expected outcome, not an error: callers surface
/// `violations` to the operator and do not retry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportValidationResult {
    pub allowed: bool,
    /// De-duplicated, in first-seen order
    pub reason_codes: Vec<ReasonCode>,
    /// Human-readable messages, derived from the reason codes
    pub violations: Vec<String>,
    /// Metadata fields the status does not permit
    pub filtered_fields: Vec<String>,
    /// Per-phrase detail behind any `LANGUAGE_VIOLATION`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language_violations: Vec<LanguageViolation>,
}

impl ExportValidationResult {
    pub fn is_blocked(&self) -> bool {
        !self.allowed
    }

    pub fn has_reason(&self, code: ReasonCode) -> bool {
        self.reason_codes.contains(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_builder_accumulates() {
        let payload = ExportPayload::new(AuthorshipStatus::VerifiedOriginal, ExportKind::Caption)
            .with_metadata([("creator", "Ana Ruiz")])
            .with_metadata([("copyright", "© 2026 Ana Ruiz")])
            .with_text(["first"])
            .with_text(vec!["second".to_string()])
            .claiming_creator("Ana Ruiz")
            .setting_copyright(true);

        assert_eq!(payload.metadata.as_ref().map(|m| m.len()), Some(2));
        assert_eq!(payload.text_content.as_ref().map(|t| t.len()), Some(2));
        assert_eq!(payload.setting_copyright, Some(true));
    }

    #[test]
    fn raw_payload_parses_with_defaults() {
        let raw: RawExportPayload =
            serde_json::from_str(r#"{"status": "UNVERIFIED", "metadata": {"creator": "x"}}"#)
                .unwrap();
        assert_eq!(raw.kind, ExportKind::EmbeddedMetadata);
        assert_eq!(raw.parse_status().unwrap(), AuthorshipStatus::Unverified);

        let typed = raw.with_status(AuthorshipStatus::Unverified);
        assert!(typed.metadata.unwrap().contains_key("creator"));
    }

    #[test]
    fn raw_payload_keeps_unknown_status_as_text() {
        let raw: RawExportPayload = serde_json::from_str(r#"{"status": "trusted"}"#).unwrap();
        assert!(raw.parse_status().is_err());
    }

    #[test]
    fn export_kind_parse() {
        assert_eq!("alt-text".parse::<ExportKind>().unwrap(), ExportKind::AltText);
        assert!("fax".parse::<ExportKind>().is_err());
    }
}
