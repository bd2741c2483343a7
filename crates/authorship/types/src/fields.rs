//! Metadata field names shared by the permissions table, the metadata
//! filter and the export guard. Lookups compare names ASCII
//! case-insensitively.

pub const CREATOR: &str = "creator";
pub const COPYRIGHT: &str = "copyright";
pub const DIGITAL_SOURCE_TYPE: &str = "digital_source_type";

/// Case-insensitive field-name comparison.
pub fn is_field(name: &str, field: &str) -> bool {
    name.trim().eq_ignore_ascii_case(field)
}
