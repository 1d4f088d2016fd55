//! Business day error types.

use thiserror::Error;

/// Errors that can occur while resolving a business day.
#[derive(Debug, Error)]
pub enum BusinessDayError {
    /// The configured time zone is not a known IANA zone.
    #[error("unknown time zone: {0}")]
    InvalidTimezone(String),

    /// The report store failed.
    #[error("report store error: {0}")]
    Store(String),
}

impl BusinessDayError {
    /// Create a report store error.
    #[must_use]
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
