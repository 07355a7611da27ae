//! Report schema versioning.

/// Schema version stamped into every JSON report.
///
/// Bumped in the major position whenever a field is removed or changes type.
pub const SCHEMA_VERSION: &str = "1.0.0";

fn major(version: &str) -> Option<u32> {
    version.split('.').next()?.parse().ok()
}

/// Whether a report written with `version` can be read by this build.
///
/// Unparsable versions are never compatible.
pub fn is_compatible(version: &str) -> bool {
    match (major(SCHEMA_VERSION), major(version)) {
        (Some(current), Some(other)) => current == other,
        _ => false,
    }
}
