#![deny(unsafe_code)]
//! # authorship-types
//!
//! Shared vocabulary for the authorship governance engine.
//!
//! Every ingested image carries exactly one [`AuthorshipStatus`]. The status
//! is assigned by the classifier from an [`ImageSignals`] bundle and recorded
//! together with an immutable [`AuthorshipEvidence`] snapshot. Everything a
//! downstream writer, text generator or export pipeline may claim is derived
//! from that status alone.
//!
//! ## Key Types
//!
//! - [`AuthorshipStatus`]: closed four-variant status
//! - [`ImageSignals`]: capture and synthetic signals from an external extractor
//! - [`AuthorshipEvidence`] / [`UsedSignals`]: what the decision rested on
//! - [`ClassificationResult`]: status + evidence + declaration flag
//! - [`ReasonCode`]: stable machine tokens explaining decisions and blocks
//! - [`MetadataPermissions`]: what a status may write
//! - [`ExportPayload`] / [`ExportValidationResult`]: the export gate contract
//!
//! This crate has no behavior beyond constructors, labels and parsing.

pub mod error;
pub mod evidence;
pub mod export;
pub mod fields;
pub mod permissions;
pub mod reason;
pub mod signals;
pub mod status;

pub use error::TypesError;
pub use evidence::{AuthorshipEvidence, ClassificationResult, UsedSignals};
pub use export::{
    ExportKind, ExportPayload, ExportValidationResult, LanguageViolation, RawExportPayload,
};
pub use permissions::MetadataPermissions;
pub use reason::ReasonCode;
pub use signals::ImageSignals;
pub use status::AuthorshipStatus;
