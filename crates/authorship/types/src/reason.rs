use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypesError;

/// Stable machine-readable reason for a classification or export decision.
///
/// Reason codes are the primary explanation of every decision; human
/// messages are derived from them and never the other way round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    // Classification
    AiMetadataSignature,
    AiSourceType,
    SyntheticConfidence,
    ExifCreatorMatch,
    ExifMissingNoConflict,
    NoCreatorInMetadata,
    ConflictingCreatorFound,
    // Declarations
    UserDeclared,
    UserDeclinedDeclaration,
    SyntheticOverridesDeclaration,
    DeclarationNotApplicable,
    // Export blocking
    CreatorFieldBlocked,
    CopyrightOverwriteBlocked,
    AuthorshipClaimBlocked,
    LanguageViolation,
    SourceTypeMisrepresented,
    UnrecognizedStatus,
}

impl ReasonCode {
    pub const ALL: [ReasonCode; 17] = [
        ReasonCode::AiMetadataSignature,
        ReasonCode::AiSourceType,
        ReasonCode::SyntheticConfidence,
        ReasonCode::ExifCreatorMatch,
        ReasonCode::ExifMissingNoConflict,
        ReasonCode::NoCreatorInMetadata,
        ReasonCode::ConflictingCreatorFound,
        ReasonCode::UserDeclared,
        ReasonCode::UserDeclinedDeclaration,
        ReasonCode::SyntheticOverridesDeclaration,
        ReasonCode::DeclarationNotApplicable,
        ReasonCode::CreatorFieldBlocked,
        ReasonCode::CopyrightOverwriteBlocked,
        ReasonCode::AuthorshipClaimBlocked,
        ReasonCode::LanguageViolation,
        ReasonCode::SourceTypeMisrepresented,
        ReasonCode::UnrecognizedStatus,
    ];

    /// Stable token, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::AiMetadataSignature => "AI_METADATA_SIGNATURE",
            ReasonCode::AiSourceType => "AI_SOURCE_TYPE",
            ReasonCode::SyntheticConfidence => "SYNTHETIC_CONFIDENCE",
            ReasonCode::ExifCreatorMatch => "EXIF_CREATOR_MATCH",
            ReasonCode::ExifMissingNoConflict => "EXIF_MISSING_NO_CONFLICT",
            ReasonCode::NoCreatorInMetadata => "NO_CREATOR_IN_METADATA",
            ReasonCode::ConflictingCreatorFound => "CONFLICTING_CREATOR_FOUND",
            ReasonCode::UserDeclared => "USER_DECLARED",
            ReasonCode::UserDeclinedDeclaration => "USER_DECLINED_DECLARATION",
            ReasonCode::SyntheticOverridesDeclaration => "SYNTHETIC_OVERRIDES_DECLARATION",
            ReasonCode::DeclarationNotApplicable => "DECLARATION_NOT_APPLICABLE",
            ReasonCode::CreatorFieldBlocked => "CREATOR_FIELD_BLOCKED",
            ReasonCode::CopyrightOverwriteBlocked => "COPYRIGHT_OVERWRITE_BLOCKED",
            ReasonCode::AuthorshipClaimBlocked => "AUTHORSHIP_CLAIM_BLOCKED",
            ReasonCode::LanguageViolation => "LANGUAGE_VIOLATION",
            ReasonCode::SourceTypeMisrepresented => "SOURCE_TYPE_MISREPRESENTED",
            ReasonCode::UnrecognizedStatus => "UNRECOGNIZED_STATUS",
        }
    }

    /// Fixed human label for this code.
    pub fn label(&self) -> &'static str {
        match self {
            ReasonCode::AiMetadataSignature => "AI tool signature found in metadata",
            ReasonCode::AiSourceType => "Digital source type indicates AI generation",
            ReasonCode::SyntheticConfidence => "Synthetic-content confidence above threshold",
            ReasonCode::ExifCreatorMatch => "Capture metadata creator matches the declared creator",
            ReasonCode::ExifMissingNoConflict => "No capture metadata and no conflicting creator",
            ReasonCode::NoCreatorInMetadata => "Capture metadata present but no creator recorded",
            ReasonCode::ConflictingCreatorFound => "Embedded creator conflicts with the declared creator",
            ReasonCode::UserDeclared => "Creator declared by the user",
            ReasonCode::UserDeclinedDeclaration => "User did not declare authorship",
            ReasonCode::SyntheticOverridesDeclaration => {
                "Declaration ignored: synthetic detection cannot be overridden"
            }
            ReasonCode::DeclarationNotApplicable => {
                "Declaration not applicable to the current status"
            }
            ReasonCode::CreatorFieldBlocked => "Creator field not permitted for this status",
            ReasonCode::CopyrightOverwriteBlocked => "Copyright overwrite not permitted for this status",
            ReasonCode::AuthorshipClaimBlocked => "Authorship claim not permitted for this status",
            ReasonCode::LanguageViolation => "Text contains a forbidden authorship phrase",
            ReasonCode::SourceTypeMisrepresented => "Source type does not disclose AI generation",
            ReasonCode::UnrecognizedStatus => "Authorship status not recognized",
        }
    }

    /// Whether this code explains a synthetic detection.
    pub fn is_synthetic_signal(&self) -> bool {
        matches!(
            self,
            ReasonCode::AiMetadataSignature
                | ReasonCode::AiSourceType
                | ReasonCode::SyntheticConfidence
        )
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasonCode {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| TypesError::UnknownReasonCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_and_labels_are_unique() {
        let tokens: HashSet<_> = ReasonCode::ALL.iter().map(|c| c.as_str()).collect();
        let labels: HashSet<_> = ReasonCode::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(tokens.len(), ReasonCode::ALL.len());
        assert_eq!(labels.len(), ReasonCode::ALL.len());
    }

    #[test]
    fn serde_matches_token() {
        for code in ReasonCode::ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn parse_round_trips_tokens() {
        assert_eq!(
            "language_violation".parse::<ReasonCode>().unwrap(),
            ReasonCode::LanguageViolation
        );
        assert!("NOT_A_CODE".parse::<ReasonCode>().is_err());
    }

    #[test]
    fn synthetic_signal_codes() {
        let synthetic: Vec<_> = ReasonCode::ALL
            .into_iter()
            .filter(ReasonCode::is_synthetic_signal)
            .collect();
        assert_eq!(synthetic.len(), 3);
    }
}
