use serde::{Deserialize, Serialize};

use crate::classifier::is_ai_source_type;
use crate::error::EngineError;

/// Confidence at or above which an image is classified as synthetic.
pub const SYNTHETIC_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// IPTC digital-source-type code for AI-generated media.
pub const AI_SOURCE_TYPE_MARKER: &str = "trainedAlgorithmicMedia";

/// Human role recorded in provenance blocks of synthetic images.
pub const DEFAULT_HUMAN_ROLE: &str = "prompt-author";

/// Engine version stamped into provenance blocks.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the authorship engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Synthetic confidence threshold (default: 0.7). May only be tightened.
    pub synthetic_confidence_threshold: f64,
    /// Version written into provenance blocks
    pub engine_version: String,
    /// Human role for synthetic provenance when none is supplied
    pub default_human_role: String,
    /// Source-type value forced onto synthetic metadata
    pub ai_source_type_marker: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            synthetic_confidence_threshold: SYNTHETIC_CONFIDENCE_THRESHOLD,
            engine_version: ENGINE_VERSION.to_string(),
            default_human_role: DEFAULT_HUMAN_ROLE.to_string(),
            ai_source_type_marker: AI_SOURCE_TYPE_MARKER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Reject configurations that would relax governance.
    pub fn validate(&self) -> Result<(), EngineError> {
        let t = self.synthetic_confidence_threshold;
        if t.is_nan() || t <= 0.0 || t > SYNTHETIC_CONFIDENCE_THRESHOLD {
            return Err(EngineError::InvalidConfig(format!(
                "synthetic_confidence_threshold must be in (0.0, {}], got {}",
                SYNTHETIC_CONFIDENCE_THRESHOLD, t
            )));
        }
        if self.ai_source_type_marker.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "ai_source_type_marker must not be empty".into(),
            ));
        }
        if !is_ai_source_type(&self.ai_source_type_marker) {
            return Err(EngineError::InvalidConfig(format!(
                "ai_source_type_marker must be an AI-origin source type, got \"{}\"",
                self.ai_source_type_marker
            )));
        }
        if self.default_human_role.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "default_human_role must not be empty".into(),
            ));
        }
        if self.engine_version.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "engine_version must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.synthetic_confidence_threshold, 0.7);
        assert_eq!(config.default_human_role, "prompt-author");
    }

    #[test]
    fn threshold_can_be_tightened() {
        let config = EngineConfig {
            synthetic_confidence_threshold: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_cannot_be_relaxed() {
        for t in [0.71, 1.0, 0.0, -0.2, f64::NAN] {
            let config = EngineConfig {
                synthetic_confidence_threshold: t,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "threshold {} accepted", t);
        }
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"synthetic_confidence_threshold": 0.6}"#).unwrap();
        assert_eq!(config.synthetic_confidence_threshold, 0.6);
        assert_eq!(config.ai_source_type_marker, AI_SOURCE_TYPE_MARKER);
    }

    #[test]
    fn blank_marker_rejected() {
        let config = EngineConfig {
            ai_source_type_marker: " ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_ai_marker_rejected() {
        for marker in ["digitalCapture", "negativeFilm", "http://cv.iptc.org/newscodes/digitalsourcetype/digitalCapture"] {
            let config = EngineConfig {
                ai_source_type_marker: marker.into(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(EngineError::InvalidConfig(_))),
                "marker {} accepted",
                marker
            );
        }
    }

    #[test]
    fn iptc_uri_marker_accepted() {
        let config = EngineConfig {
            ai_source_type_marker:
                "http://cv.iptc.org/newscodes/digitalsourcetype/compositeWithTrainedAlgorithmicMedia"
                    .into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_human_role_rejected() {
        for role in ["", "   "] {
            let config = EngineConfig {
                default_human_role: role.into(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "role {:?} accepted", role);
        }
    }
}
