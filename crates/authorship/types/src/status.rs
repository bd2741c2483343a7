use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypesError;

/// What can truthfully be claimed about who created an image.
///
/// Exactly one status is associated with an image at any moment. It is
/// assigned by the classifier at ingest and is otherwise immutable, except
/// that a user declaration may advance `Unverified` to `DeclaredByUser`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorshipStatus {
    /// Capture evidence present and matches the declared creator, no conflicts
    VerifiedOriginal,
    /// Creator self-declared, not machine-verified
    DeclaredByUser,
    /// Evidence missing or conflicting; no authorship claim permitted
    Unverified,
    /// AI-generated content detected
    SyntheticAi,
}

impl AuthorshipStatus {
    /// All statuses, in table order.
    pub const ALL: [AuthorshipStatus; 4] = [
        AuthorshipStatus::VerifiedOriginal,
        AuthorshipStatus::DeclaredByUser,
        AuthorshipStatus::Unverified,
        AuthorshipStatus::SyntheticAi,
    ];

    /// Stable machine tag, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorshipStatus::VerifiedOriginal => "verified_original",
            AuthorshipStatus::DeclaredByUser => "declared_by_user",
            AuthorshipStatus::Unverified => "unverified",
            AuthorshipStatus::SyntheticAi => "synthetic_ai",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AuthorshipStatus::VerifiedOriginal => "Verified original",
            AuthorshipStatus::DeclaredByUser => "Declared by user",
            AuthorshipStatus::Unverified => "Unverified",
            AuthorshipStatus::SyntheticAi => "Synthetic (AI-generated)",
        }
    }

    /// Parse an untyped tag. Case-insensitive; `-` and spaces are read as `_`.
    pub fn parse_tag(tag: &str) -> Result<Self, TypesError> {
        let normalized: String = tag
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| TypesError::UnknownStatus(tag.to_string()))
    }
}

impl fmt::Display for AuthorshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorshipStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tag(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&AuthorshipStatus::SyntheticAi).unwrap();
        assert_eq!(json, "\"synthetic_ai\"");

        let parsed: AuthorshipStatus = serde_json::from_str("\"declared_by_user\"").unwrap();
        assert_eq!(parsed, AuthorshipStatus::DeclaredByUser);
    }

    #[test]
    fn parse_tag_accepts_loose_spellings() {
        assert_eq!(
            AuthorshipStatus::parse_tag("VERIFIED_ORIGINAL").unwrap(),
            AuthorshipStatus::VerifiedOriginal
        );
        assert_eq!(
            "synthetic-ai".parse::<AuthorshipStatus>().unwrap(),
            AuthorshipStatus::SyntheticAi
        );
        assert_eq!(
            AuthorshipStatus::parse_tag("  unverified ").unwrap(),
            AuthorshipStatus::Unverified
        );
    }

    #[test]
    fn parse_tag_rejects_unknown() {
        let err = AuthorshipStatus::parse_tag("verified").unwrap_err();
        assert_eq!(err, TypesError::UnknownStatus("verified".into()));
    }

    #[test]
    fn display_matches_tag() {
        for status in AuthorshipStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
        }
    }
}
