//! End-to-end scenarios: ingest → classify → (declare) → export.

use std::collections::BTreeMap;

use authorship_engine::*;

fn john_smith_camera() -> ImageSignals {
    ImageSignals {
        exif_present: true,
        camera_make: Some("Nikon".into()),
        camera_model: Some("Z8".into()),
        existing_creator: Some("John Smith".into()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn ai_signature_wins_over_matching_exif() {
    let mut signals = john_smith_camera();
    signals.ai_signatures = vec!["midjourney".into()];

    let result = classify(&signals, Some("John Smith"));
    assert_eq!(result.status, AuthorshipStatus::SyntheticAi);
    assert!(!result.needs_user_declaration);
}

#[test]
fn no_exif_no_creator_asks_for_declaration() {
    let signals = ImageSignals {
        exif_present: false,
        existing_creator: None,
        ..Default::default()
    };

    let result = classify(&signals, Some("John Smith"));
    assert_eq!(result.status, AuthorshipStatus::Unverified);
    assert!(result.needs_user_declaration);
}

#[test]
fn matching_exif_is_verified_and_exports_freely() {
    let result = classify(&john_smith_camera(), Some("John Smith"));
    assert_eq!(result.status, AuthorshipStatus::VerifiedOriginal);

    let payload = ExportPayload::new(result.status, ExportKind::EmbeddedMetadata)
        .with_metadata([("creator", "John Smith"), ("copyright", "© 2026 John Smith")])
        .with_text(["Photographed by John Smith."]);
    let verdict = validate_export(&payload);
    assert!(verdict.allowed);
    assert!(verdict.reason_codes.is_empty());
}

// ---------------------------------------------------------------------------
// Declaration flow
// ---------------------------------------------------------------------------

#[test]
fn declared_image_may_not_claim_capture() {
    let signals = ImageSignals::default();
    let ingest = classify(&signals, Some("Ana Ruiz"));
    assert!(ingest.needs_user_declaration);

    let declared = apply_user_declaration(ingest.status, true, &signals);
    assert_eq!(declared.status, AuthorshipStatus::DeclaredByUser);
    assert!(!permissions_for(declared.status).allow_creator);

    let caption = ExportPayload::new(declared.status, ExportKind::Caption)
        .with_text(["Declared by Ana Ruiz", "Photo by Ana Ruiz"]);
    let verdict = validate_export(&caption);
    assert!(!verdict.allowed);
    assert_eq!(verdict.reason_codes, vec![ReasonCode::LanguageViolation]);
    assert_eq!(verdict.language_violations[0].item_index, 1);

    let clean = ExportPayload::new(declared.status, ExportKind::Caption)
        .with_text(["Declared by Ana Ruiz"]);
    assert!(validate_export(&clean).allowed);
}

#[test]
fn declared_provenance_records_author_without_verification() {
    let block = build_provenance_block(
        AuthorshipStatus::DeclaredByUser,
        &ProvenanceOptions::default().with_author("Ana Ruiz"),
    );
    assert_eq!(block["verification_level"], "not-verified");
    assert_eq!(block["declared_author"], "Ana Ruiz");
}

// ---------------------------------------------------------------------------
// Synthetic flow
// ---------------------------------------------------------------------------

#[test]
fn synthetic_export_is_sanitized_then_allowed() {
    let signals = ImageSignals {
        digital_source_type: Some(
            "http://cv.iptc.org/newscodes/digitalsourcetype/trainedAlgorithmicMedia".into(),
        ),
        ..Default::default()
    };
    let result = classify(&signals, Some("Ana Ruiz"));
    assert_eq!(result.status, AuthorshipStatus::SyntheticAi);

    let candidate = BTreeMap::from([
        ("creator".to_string(), "Ana Ruiz".to_string()),
        ("digital_source_type".to_string(), "digitalCapture".to_string()),
        ("title".to_string(), "Neon harbour".to_string()),
    ]);

    let raw_verdict = validate_export(
        &ExportPayload::new(result.status, ExportKind::EmbeddedMetadata)
            .with_metadata(candidate.clone()),
    );
    assert!(!raw_verdict.allowed);
    assert!(raw_verdict.has_reason(ReasonCode::CreatorFieldBlocked));
    assert!(raw_verdict.has_reason(ReasonCode::SourceTypeMisrepresented));

    let filtered = filter_metadata(&candidate, result.status, Some("Ana Ruiz"));
    let sanitized = validate_export(
        &ExportPayload::new(result.status, ExportKind::EmbeddedMetadata)
            .with_metadata(filtered.fields)
            .with_text(["AI-generated image. Prompt by Ana Ruiz."]),
    );
    assert!(sanitized.allowed, "{:?}", sanitized.violations);
}

#[test]
fn engine_facade_matches_free_functions() {
    let engine = AuthorshipEngine::default();
    let signals = john_smith_camera();
    assert_eq!(
        engine.classify(&signals, Some("John Smith")),
        classify(&signals, Some("John Smith"))
    );
    for status in AuthorshipStatus::ALL {
        assert_eq!(engine.permissions_for(status), permissions_for(status));
        assert_eq!(engine.prompt_instruction(status), prompt_instruction(status));
    }
}

#[test]
fn audit_trail_captures_each_step() {
    let logger = MemoryAuditLogger::new();
    let signals = ImageSignals::default();

    let ingest = classify(&signals, None);
    logger.record(AuditEvent::classified(Some("asset-7"), &ingest));

    let declared = apply_user_declaration(ingest.status, true, &signals);
    logger.record(AuditEvent::declaration(Some("asset-7"), ingest.status, true, &declared));

    let payload = ExportPayload::new(declared.status, ExportKind::WebPublish)
        .with_metadata([("creator", "Ana")]);
    let verdict = validate_export(&payload);
    logger.record(AuditEvent::export(
        Some("asset-7"),
        Some(payload.status),
        payload.kind,
        &verdict,
    ));

    let events = logger.events();
    assert_eq!(events.len(), 3);
    assert!(events[2].is_block());
}
