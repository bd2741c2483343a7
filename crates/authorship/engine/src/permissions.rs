//! Permissions table: a total function from status to metadata rights.

use authorship_types::{AuthorshipStatus, MetadataPermissions};
use tracing::warn;

/// Metadata rights for a status.
pub fn permissions_for(status: AuthorshipStatus) -> MetadataPermissions {
    match status {
        AuthorshipStatus::VerifiedOriginal => MetadataPermissions {
            allow_creator: true,
            allow_copyright_overwrite: true,
            allow_full_provenance: true,
            force_ai_source_type: false,
            preserve_originals: false,
        },
        AuthorshipStatus::DeclaredByUser | AuthorshipStatus::Unverified => {
            MetadataPermissions::most_restrictive()
        }
        AuthorshipStatus::SyntheticAi => MetadataPermissions {
            allow_creator: false,
            allow_copyright_overwrite: false,
            allow_full_provenance: false,
            force_ai_source_type: true,
            preserve_originals: false,
        },
    }
}

/// Metadata rights for an untyped status tag.
///
/// Unrecognized tags resolve to the most restrictive row.
pub fn permissions_for_tag(tag: &str) -> MetadataPermissions {
    match AuthorshipStatus::parse_tag(tag) {
        Ok(status) => permissions_for(status),
        Err(_) => {
            warn!(tag, "Unrecognized authorship status; applying most restrictive permissions");
            MetadataPermissions::most_restrictive()
        }
    }
}

/// The full table, one row per status.
pub fn permission_table() -> Vec<(AuthorshipStatus, MetadataPermissions)> {
    AuthorshipStatus::ALL
        .into_iter()
        .map(|status| (status, permissions_for(status)))
        .collect()
}
