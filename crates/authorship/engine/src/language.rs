//! Language governor: keeps generated text within what the status supports.
//!
//! Each status has a fixed set of forbidden phrase patterns (case-insensitive)
//! and a list of allowed phrases for prompt construction. The matcher itself
//! is generic; a status only contributes table rows.

use std::sync::LazyLock;

use authorship_types::{AuthorshipStatus, LanguageViolation, ReasonCode};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const CAPTURED_BY: &str = r"(?i)\b(?:captured|photographed|shot|taken)\s+by\b";
const PHOTOGRAPHY_BY: &str = r"(?i)\bphotography\s+by\b";
const PHOTO_BY: &str = r"(?i)\bphoto\s+by\b";
const PROVIDED_BY: &str = r"(?i)\b(?:supplied|processed|provided)\s+by\b";
const PHOTOGRAPHER: &str = r"(?i)\bphotographers?\b";
const ORIGINAL_PHOTO: &str = r"(?i)\boriginal\s+(?:photograph|photo|image)s?\b";

const DECLARED_PATTERNS: &[&str] = &[CAPTURED_BY, PHOTOGRAPHY_BY, PHOTO_BY];
const UNVERIFIED_PATTERNS: &[&str] = &[CAPTURED_BY, PHOTOGRAPHY_BY, PHOTO_BY, PROVIDED_BY];
const SYNTHETIC_PATTERNS: &[&str] = &[
    CAPTURED_BY,
    PHOTOGRAPHY_BY,
    PHOTO_BY,
    PROVIDED_BY,
    PHOTOGRAPHER,
    ORIGINAL_PHOTO,
];

const CAPTURE_PHRASES: &[&str] = &[
    "captured by",
    "photographed by",
    "shot by",
    "taken by",
    "photography by",
    "photo by",
];
const PROVENANCE_PHRASES: &[&str] = &["supplied by", "processed by", "provided by"];
const ORIGINALITY_PHRASES: &[&str] = &[
    "photographer",
    "original photo",
    "original image",
    "original photograph",
];

/// Forbidden phrase patterns for a status.
pub fn forbidden_patterns(status: AuthorshipStatus) -> &'static [&'static str] {
    match status {
        AuthorshipStatus::VerifiedOriginal => &[],
        AuthorshipStatus::DeclaredByUser => DECLARED_PATTERNS,
        AuthorshipStatus::Unverified => UNVERIFIED_PATTERNS,
        AuthorshipStatus::SyntheticAi => SYNTHETIC_PATTERNS,
    }
}

/// Forbidden phrases for a status, as plain words for prompts and messages.
pub fn forbidden_phrases(status: AuthorshipStatus) -> Vec<&'static str> {
    let groups: &[&[&str]] = match status {
        AuthorshipStatus::VerifiedOriginal => &[],
        AuthorshipStatus::DeclaredByUser => &[CAPTURE_PHRASES],
        AuthorshipStatus::Unverified => &[CAPTURE_PHRASES, PROVENANCE_PHRASES],
        AuthorshipStatus::SyntheticAi => {
            &[CAPTURE_PHRASES, PROVENANCE_PHRASES, ORIGINALITY_PHRASES]
        }
    };
    groups.iter().flat_map(|g| g.iter().copied()).collect()
}

/// Phrases a text generator may use for a status. `{creator}` and `{tool}`
/// are placeholders for the caller to fill.
pub fn allowed_phrases(status: AuthorshipStatus) -> &'static [&'static str] {
    match status {
        AuthorshipStatus::VerifiedOriginal => &[
            "Photographed by {creator}",
            "Captured by {creator}",
            "Original photograph by {creator}",
            "© {creator}",
        ],
        AuthorshipStatus::DeclaredByUser => &[
            "Creator-declared image",
            "Declared by {creator}",
            "Credited to {creator} (self-declared)",
        ],
        AuthorshipStatus::Unverified => &["Image", "Uploaded image", "Authorship not verified"],
        AuthorshipStatus::SyntheticAi => &[
            "AI-generated image",
            "Created with AI",
            "Prompt by {creator}",
            "Generated with {tool}",
        ],
    }
}

/// A phrase found by a [`PhraseMatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseMatch {
    pub matched: String,
    /// Character offset
    pub offset: usize,
}

/// Case-insensitive forbidden-phrase matcher over a list of patterns.
///
/// A pattern that fails to compile is kept as a defect and makes every
/// check fail rather than silently weakening the table.
#[derive(Debug)]
pub struct PhraseMatcher {
    patterns: Vec<Regex>,
    defects: Vec<String>,
}

impl PhraseMatcher {
    pub fn compile(patterns: &[&str]) -> Self {
        let mut compiled = Vec::with_capacity(patterns.len());
        let mut defects = Vec::new();
        for pattern in patterns {
            match Regex::new(pattern) {
                Ok(regex) => compiled.push(regex),
                Err(e) => {
                    error!(pattern, error = %e, "Forbidden-phrase pattern failed to compile");
                    defects.push((*pattern).to_string());
                }
            }
        }
        Self {
            patterns: compiled,
            defects,
        }
    }

    pub fn is_sound(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn defects(&self) -> &[String] {
        &self.defects
    }

    /// All matches in `text`, ordered by offset.
    pub fn find_all(&self, text: &str) -> Vec<PhraseMatch> {
        let mut found: Vec<(usize, PhraseMatch)> = self
            .patterns
            .iter()
            .flat_map(|regex| regex.find_iter(text))
            .map(|m| {
                (
                    m.start(),
                    PhraseMatch {
                        matched: m.as_str().to_string(),
                        offset: text[..m.start()].chars().count(),
                    },
                )
            })
            .collect();
        found.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.matched.cmp(&b.1.matched)));
        found.into_iter().map(|(_, m)| m).collect()
    }
}

struct PhraseTables {
    verified_original: PhraseMatcher,
    declared_by_user: PhraseMatcher,
    unverified: PhraseMatcher,
    synthetic_ai: PhraseMatcher,
}

impl PhraseTables {
    fn get(&self, status: AuthorshipStatus) -> &PhraseMatcher {
        match status {
            AuthorshipStatus::VerifiedOriginal => &self.verified_original,
            AuthorshipStatus::DeclaredByUser => &self.declared_by_user,
            AuthorshipStatus::Unverified => &self.unverified,
            AuthorshipStatus::SyntheticAi => &self.synthetic_ai,
        }
    }
}

static TABLES: LazyLock<PhraseTables> = LazyLock::new(|| PhraseTables {
    verified_original: PhraseMatcher::compile(forbidden_patterns(AuthorshipStatus::VerifiedOriginal)),
    declared_by_user: PhraseMatcher::compile(forbidden_patterns(AuthorshipStatus::DeclaredByUser)),
    unverified: PhraseMatcher::compile(forbidden_patterns(AuthorshipStatus::Unverified)),
    synthetic_ai: PhraseMatcher::compile(forbidden_patterns(AuthorshipStatus::SyntheticAi)),
});

/// Outcome of validating one or more text items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageReport {
    pub valid: bool,
    pub violations: Vec<LanguageViolation>,
}

impl LanguageReport {
    fn from_violations(violations: Vec<LanguageViolation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }
}

/// Validate one text item against the status's forbidden phrases.
pub fn validate(text: &str, status: AuthorshipStatus) -> LanguageReport {
    LanguageReport::from_violations(violations_in(0, text, status))
}

/// Validate independent text items; any violating item fails the batch.
pub fn validate_all<S: AsRef<str>>(items: &[S], status: AuthorshipStatus) -> LanguageReport {
    let violations = items
        .iter()
        .enumerate()
        .flat_map(|(index, item)| violations_in(index, item.as_ref(), status))
        .collect();
    LanguageReport::from_violations(violations)
}

fn violations_in(item_index: usize, text: &str, status: AuthorshipStatus) -> Vec<LanguageViolation> {
    let matcher = TABLES.get(status);

    if !matcher.is_sound() {
        return vec![LanguageViolation {
            item_index,
            matched: String::new(),
            offset: 0,
            reason: ReasonCode::LanguageViolation,
            message: format!(
                "Language rules for {} images are unavailable; text cannot be approved.",
                status.label().to_lowercase()
            ),
        }];
    }

    let violations: Vec<_> = matcher
        .find_all(text)
        .into_iter()
        .map(|m| LanguageViolation {
            item_index,
            message: violation_message(&m.matched, status),
            matched: m.matched,
            offset: m.offset,
            reason: ReasonCode::LanguageViolation,
        })
        .collect();

    if !violations.is_empty() {
        debug!(status = %status, item_index, count = violations.len(), "Forbidden phrases found");
    }
    violations
}

fn violation_message(matched: &str, status: AuthorshipStatus) -> String {
    format!(
        "\"{}\" is not permitted for {} images; use instead: {}",
        matched,
        status.label().to_lowercase(),
        quoted(allowed_phrases(status)),
    )
}

/// Deterministic constraint text for any text generator. Advisory only;
/// [`validate`] is the enforcement point.
pub fn prompt_instruction(status: AuthorshipStatus) -> String {
    let allowed = quoted(allowed_phrases(status));
    match status {
        AuthorshipStatus::VerifiedOriginal => format!(
            "Authorship of this image is machine-verified. You may attribute it to the creator, \
             for example: {}.",
            allowed
        ),
        _ => format!(
            "Authorship status: {}. When referring to who made this image, use only phrasing \
             such as: {}. Never use: {}.",
            status.label(),
            allowed,
            quoted(&forbidden_phrases(status)),
        ),
    }
}

fn quoted(phrases: &[&str]) -> String {
    phrases
        .iter()
        .map(|p| format!("\"{}\"", p))
        .collect::<Vec<_>>()
        .join(", ")
}
