//! Audit-event contract for classification and export outcomes.
//!
//! The engine only returns data. Pipelines build an [`AuditEvent`] from
//! each outcome and hand it to whatever [`AuditLogger`] persists their
//! trail. Persistence itself lives outside this crate.

use authorship_types::{
    AuthorshipStatus, ClassificationResult, ExportKind, ExportValidationResult, ReasonCode,
};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// What happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuditEventKind {
    Classified {
        status: AuthorshipStatus,
        reasons: Vec<ReasonCode>,
        needs_user_declaration: bool,
    },
    DeclarationApplied {
        from: AuthorshipStatus,
        to: AuthorshipStatus,
        declared: bool,
        reasons: Vec<ReasonCode>,
    },
    ExportAllowed {
        status: Option<AuthorshipStatus>,
        export_kind: ExportKind,
    },
    ExportBlocked {
        status: Option<AuthorshipStatus>,
        export_kind: ExportKind,
        reason_codes: Vec<ReasonCode>,
    },
}

/// One entry for the audit trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub asset_id: Option<String>,
    pub kind: AuditEventKind,
}

impl AuditEvent {
    fn new(asset_id: Option<&str>, kind: AuditEventKind) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            asset_id: asset_id.map(str::to_string),
            kind,
        }
    }

    pub fn classified(asset_id: Option<&str>, result: &ClassificationResult) -> Self {
        Self::new(
            asset_id,
            AuditEventKind::Classified {
                status: result.status,
                reasons: result.evidence.reasons.clone(),
                needs_user_declaration: result.needs_user_declaration,
            },
        )
    }

    pub fn declaration(
        asset_id: Option<&str>,
        from: AuthorshipStatus,
        declared: bool,
        result: &ClassificationResult,
    ) -> Self {
        Self::new(
            asset_id,
            AuditEventKind::DeclarationApplied {
                from,
                to: result.status,
                declared,
                reasons: result.evidence.reasons.clone(),
            },
        )
    }

    pub fn export(
        asset_id: Option<&str>,
        status: Option<AuthorshipStatus>,
        export_kind: ExportKind,
        result: &ExportValidationResult,
    ) -> Self {
        let kind = if result.allowed {
            AuditEventKind::ExportAllowed {
                status,
                export_kind,
            }
        } else {
            AuditEventKind::ExportBlocked {
                status,
                export_kind,
                reason_codes: result.reason_codes.clone(),
            }
        };
        Self::new(asset_id, kind)
    }

    pub fn is_block(&self) -> bool {
        matches!(self.kind, AuditEventKind::ExportBlocked { .. })
    }
}

/// Sink for audit events.
pub trait AuditLogger: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// In-memory audit logger for testing.
#[derive(Default)]
pub struct MemoryAuditLogger {
    events: RwLock<Vec<AuditEvent>>,
}

impl MemoryAuditLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.read().clone()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl AuditLogger for MemoryAuditLogger {
    fn record(&self, event: AuditEvent) {
        self.events.write().push(event);
    }
}

/// Emits each event as a structured `tracing` record on the
/// `authorship::audit` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAuditLogger;

impl AuditLogger for TracingAuditLogger {
    fn record(&self, event: AuditEvent) {
        match serde_json::to_string(&event.kind) {
            Ok(kind) => info!(
                target: "authorship::audit",
                event_id = %event.event_id,
                occurred_at = %event.occurred_at.to_rfc3339(),
                asset_id = event.asset_id.as_deref().unwrap_or("-"),
                kind = %kind,
                "Audit event"
            ),
            Err(e) => warn!(
                target: "authorship::audit",
                event_id = %event.event_id,
                error = %e,
                "Audit event could not be serialized"
            ),
        }
    }
}
