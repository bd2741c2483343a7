use serde::{Deserialize, Serialize};

/// What metadata a status may carry. Derived from status alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataPermissions {
    /// May set the creator field
    pub allow_creator: bool,
    /// May overwrite the copyright field
    pub allow_copyright_overwrite: bool,
    /// May embed the full provenance block
    pub allow_full_provenance: bool,
    /// Must tag the digital source type as AI-generated
    pub force_ai_source_type: bool,
    /// Existing authorship fields must be left untouched
    pub preserve_originals: bool,
}

impl MetadataPermissions {
    /// The fail-closed row: no claims, nothing overwritten.
    pub const fn most_restrictive() -> Self {
        Self {
            allow_creator: false,
            allow_copyright_overwrite: false,
            allow_full_provenance: false,
            force_ai_source_type: false,
            preserve_originals: true,
        }
    }

    /// Whether any authorship claim at all is permitted.
    pub fn permits_claims(&self) -> bool {
        self.allow_creator || self.allow_copyright_overwrite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_restrictive_permits_nothing() {
        let p = MetadataPermissions::most_restrictive();
        assert!(!p.permits_claims());
        assert!(!p.allow_full_provenance);
        assert!(p.preserve_originals);
    }
}
