//! Startup-time guard for the linked SQLite engine version.

use crate::error::QueryError;

/// Minimum engine version with RETURNING-clause support.
pub const MIN_SQLITE_VERSION: (u32, u32, u32) = (3, 35, 0);

/// Validates the version string reported by the linked SQLite engine.
///
/// Expected before any query compiles against the SQLite dialect; a failure
/// is fatal at startup, not per query.
pub fn validate_sqlite_version(version: &str) -> Result<(), QueryError> {
    let reported = parse_version(version)
        .ok_or_else(|| QueryError::InvalidVersionString(version.to_string()))?;

    if reported < MIN_SQLITE_VERSION {
        return Err(QueryError::UnsupportedSqliteVersion(version.to_string()));
    }
    Ok(())
}

fn parse_version(version: &str) -> Option<(u32, u32, u32)> {
    let mut parts = version.trim().splitn(3, '.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = match parts.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    Some((major, minor, patch))
}
