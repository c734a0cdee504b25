//! Error types for hive operations.
//!
//! Resource shortfalls are not errors: a bee that cannot pay for its shift
//! simply skips it. Only requests the colony cannot make sense of end up here.

use thiserror::Error;

/// Result type for hive operations.
pub type Result<T> = std::result::Result<T, HiveError>;

/// Errors that can occur while managing a hive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HiveError {
    /// Assignment requested for a job the queen does not know.
    #[error("Unknown job: {0}")]
    UnknownJob(String),

    /// A configuration value is out of its allowed range.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

impl HiveError {
    pub fn unknown_job(label: impl Into<String>) -> Self {
        HiveError::UnknownJob(label.into())
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        HiveError::InvalidConfig {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
