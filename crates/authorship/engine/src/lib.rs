#![deny(unsafe_code)]
//! # authorship-engine
//!
//! Decides, for every ingested image, what can truthfully be claimed about
//! who created it, and blocks any outbound artifact whose claims exceed
//! what the evidence supports.
//!
//! ## Invariants
//!
//! - Exactly one status per image, assigned only by the classifier.
//! - A user declaration never produces `VerifiedOriginal` and never alters
//!   `SyntheticAi`.
//! - Permissions are a pure, total function of status; unrecognized input
//!   resolves to the most restrictive row.
//! - Classification and export validation are deterministic.
//! - A blocked export is a normal result, never an error.
//!
//! ## Components
//!
//! - [`classifier`]: ordered first-match-wins rule list
//! - [`permissions`]: status → metadata rights
//! - [`provenance`]: provenance block and metadata sanitizing
//! - [`language`]: forbidden-phrase governor and prompt constraints
//! - [`guard`]: the export gate
//! - [`audit`]: audit-event contract for pipelines
//! - [`AuthorshipEngine`]: facade carrying validated [`EngineConfig`]

pub mod audit;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod guard;
pub mod language;
pub mod permissions;
pub mod provenance;

pub use audit::{AuditEvent, AuditEventKind, AuditLogger, MemoryAuditLogger, TracingAuditLogger};
pub use classifier::{
    apply_user_declaration, apply_user_declaration_with, classification_rules, classify,
    classify_with, is_ai_source_type,
};
pub use config::EngineConfig;
pub use engine::AuthorshipEngine;
pub use error::EngineError;
pub use guard::{validate_export, validate_raw_export};
pub use language::{prompt_instruction, LanguageReport};
pub use permissions::{permission_table, permissions_for, permissions_for_tag};
pub use provenance::{
    build_provenance_block, build_provenance_block_with, filter_metadata, filter_metadata_with,
    FilteredMetadata, ProvenanceOptions,
};

pub use authorship_types::{
    AuthorshipEvidence, AuthorshipStatus, ClassificationResult, ExportKind, ExportPayload,
    ExportValidationResult, ImageSignals, LanguageViolation, MetadataPermissions,
    RawExportPayload, ReasonCode, UsedSignals,
};
