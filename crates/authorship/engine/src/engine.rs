use std::collections::BTreeMap;

use authorship_types::{
    AuthorshipStatus, ClassificationResult, ExportPayload, ExportValidationResult, ImageSignals,
    MetadataPermissions, RawExportPayload,
};
use tracing::info;

use crate::classifier;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::guard;
use crate::language::{self, LanguageReport};
use crate::permissions;
use crate::provenance::{self, FilteredMetadata, ProvenanceOptions};

/// The authorship governance engine.
///
/// Holds only validated configuration; every operation is a pure function
/// of its inputs, so one engine may be shared across any number of ingest
/// and export workers.
#[derive(Clone, Debug, Default)]
pub struct AuthorshipEngine {
    config: EngineConfig,
}

impl AuthorshipEngine {
    /// Create an engine, rejecting configurations that relax governance.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        info!(
            engine_version = %config.engine_version,
            synthetic_confidence_threshold = config.synthetic_confidence_threshold,
            "Authorship engine configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classify(
        &self,
        signals: &ImageSignals,
        declared_creator: Option<&str>,
    ) -> ClassificationResult {
        classifier::classify_with(signals, declared_creator, &self.config)
    }

    pub fn apply_user_declaration(
        &self,
        current_status: AuthorshipStatus,
        declared: bool,
        signals: &ImageSignals,
    ) -> ClassificationResult {
        classifier::apply_user_declaration_with(current_status, declared, signals, &self.config)
    }

    pub fn permissions_for(&self, status: AuthorshipStatus) -> MetadataPermissions {
        permissions::permissions_for(status)
    }

    /// Resolve an untyped status tag, failing on an unrecognized tag instead
    /// of falling back to the most restrictive row.
    pub fn permissions_for_tag_strict(
        &self,
        tag: &str,
    ) -> Result<(AuthorshipStatus, MetadataPermissions), EngineError> {
        let status = AuthorshipStatus::parse_tag(tag)?;
        Ok((status, permissions::permissions_for(status)))
    }

    pub fn build_provenance_block(
        &self,
        status: AuthorshipStatus,
        options: &ProvenanceOptions,
    ) -> BTreeMap<String, String> {
        provenance::build_provenance_block_with(status, options, &self.config)
    }

    pub fn filter_metadata(
        &self,
        candidate: &BTreeMap<String, String>,
        status: AuthorshipStatus,
        declared_creator: Option<&str>,
    ) -> FilteredMetadata {
        provenance::filter_metadata_with(candidate, status, declared_creator, &self.config)
    }

    pub fn validate_text(&self, text: &str, status: AuthorshipStatus) -> LanguageReport {
        language::validate(text, status)
    }

    pub fn validate_texts<S: AsRef<str>>(
        &self,
        items: &[S],
        status: AuthorshipStatus,
    ) -> LanguageReport {
        language::validate_all(items, status)
    }

    pub fn prompt_instruction(&self, status: AuthorshipStatus) -> String {
        language::prompt_instruction(status)
    }

    pub fn validate_export(&self, payload: &ExportPayload) -> ExportValidationResult {
        guard::validate_export(payload)
    }

    pub fn validate_raw_export(&self, raw: &RawExportPayload) -> ExportValidationResult {
        guard::validate_raw_export(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authorship_types::fields;

    #[test]
    fn rejects_relaxed_threshold() {
        let config = EngineConfig {
            synthetic_confidence_threshold: 0.95,
            ..Default::default()
        };
        assert!(matches!(
            AuthorshipEngine::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn configured_marker_flows_into_filter() {
        let engine = AuthorshipEngine::new(EngineConfig {
            ai_source_type_marker: "http://cv.iptc.org/newscodes/digitalsourcetype/trainedAlgorithmicMedia".into(),
            ..Default::default()
        })
        .unwrap();
        let filtered = engine.filter_metadata(&BTreeMap::new(), AuthorshipStatus::SyntheticAi, None);
        assert!(filtered.fields[fields::DIGITAL_SOURCE_TYPE].starts_with("http://cv.iptc.org"));
    }

    #[test]
    fn configured_role_and_version_flow_into_provenance() {
        let engine = AuthorshipEngine::new(EngineConfig {
            default_human_role: "curator".into(),
            engine_version: "2026.10".into(),
            ..Default::default()
        })
        .unwrap();
        let block =
            engine.build_provenance_block(AuthorshipStatus::SyntheticAi, &ProvenanceOptions::default());
        assert_eq!(block[provenance::KEY_HUMAN_ROLE], "curator");
        assert_eq!(block[provenance::KEY_ENGINE_VERSION], "2026.10");
    }

    #[test]
    fn configured_threshold_flows_into_declaration() {
        let engine = AuthorshipEngine::new(EngineConfig {
            synthetic_confidence_threshold: 0.4,
            ..Default::default()
        })
        .unwrap();
        let signals = ImageSignals {
            synthetic_confidence: Some(0.45),
            ..Default::default()
        };
        assert_eq!(engine.classify(&signals, None).status, AuthorshipStatus::SyntheticAi);
        let result = engine.apply_user_declaration(AuthorshipStatus::SyntheticAi, true, &signals);
        assert_eq!(result.evidence.reasons.len(), 2);
    }

    #[test]
    fn strict_tag_lookup_surfaces_unknown_status() {
        let engine = AuthorshipEngine::default();
        let (status, permissions) = engine.permissions_for_tag_strict("Declared-By-User").unwrap();
        assert_eq!(status, AuthorshipStatus::DeclaredByUser);
        assert_eq!(permissions, MetadataPermissions::most_restrictive());

        let err = engine.permissions_for_tag_strict("verified").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Types(authorship_types::TypesError::UnknownStatus(_))
        ));
    }

    #[test]
    fn rejects_non_ai_marker() {
        let config = EngineConfig {
            ai_source_type_marker: "digitalCapture".into(),
            ..Default::default()
        };
        assert!(matches!(
            AuthorshipEngine::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn synthetic_filter_output_passes_the_guard() {
        let markers = [
            "trainedAlgorithmicMedia",
            "compositeSynthetic",
            "http://cv.iptc.org/newscodes/digitalsourcetype/algorithmicMedia",
        ];
        let candidate = BTreeMap::from([
            ("creator".to_string(), "Ana".to_string()),
            ("Copyright".to_string(), "© Ana".to_string()),
            ("Digital_Source_Type".to_string(), "digitalCapture".to_string()),
            ("title".to_string(), "Neon harbour".to_string()),
        ]);
        for marker in markers {
            let engine = AuthorshipEngine::new(EngineConfig {
                ai_source_type_marker: marker.into(),
                ..Default::default()
            })
            .unwrap();
            let filtered =
                engine.filter_metadata(&candidate, AuthorshipStatus::SyntheticAi, Some("Ana"));
            let mut payload = ExportPayload::new(
                AuthorshipStatus::SyntheticAi,
                authorship_types::ExportKind::EmbeddedMetadata,
            );
            payload.metadata = Some(filtered.fields);
            let verdict = engine.validate_export(&payload);
            assert!(verdict.allowed, "marker {}: {:?}", marker, verdict.reason_codes);
        }
    }
}
