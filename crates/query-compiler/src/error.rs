use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("SQLite engine version {0} is below the 3.35 minimum required for RETURNING")]
    UnsupportedSqliteVersion(String),

    #[error("unrecognized SQLite version string: {0}")]
    InvalidVersionString(String),
}
