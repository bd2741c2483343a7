use serde::{Deserialize, Serialize};

/// Signals extracted from an image by an external metadata/vision extractor.
///
/// The engine never reads image bytes; this bundle is its only view of the
/// file. Blank strings are treated the same as absent values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSignals {
    /// Camera capture evidence (EXIF) is present
    pub exif_present: bool,
    pub camera_make: Option<String>,
    pub camera_model: Option<String>,
    /// Capture timestamp as found in the container
    pub capture_timestamp: Option<String>,
    /// Creator string already embedded in the file
    pub existing_creator: Option<String>,
    /// Copyright string already embedded in the file
    pub existing_copyright: Option<String>,
    /// Digital-source-type value, raw as found
    pub digital_source_type: Option<String>,
    /// Known AI-tool signatures matched in the metadata
    pub ai_signatures: Vec<String>,
    /// Synthetic-content confidence in [0, 1]
    pub synthetic_confidence: Option<f64>,
}

impl ImageSignals {
    /// Existing creator, trimmed, if non-blank.
    pub fn creator(&self) -> Option<&str> {
        non_blank(self.existing_creator.as_deref())
    }

    /// Existing copyright, trimmed, if non-blank.
    pub fn copyright(&self) -> Option<&str> {
        non_blank(self.existing_copyright.as_deref())
    }

    /// Digital-source-type, trimmed, if non-blank.
    pub fn source_type(&self) -> Option<&str> {
        non_blank(self.digital_source_type.as_deref())
    }

    /// AI signatures with blank entries dropped.
    pub fn signatures(&self) -> impl Iterator<Item = &str> {
        self.ai_signatures
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
