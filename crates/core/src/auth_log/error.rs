//! Auth log errors.

use thiserror::Error;

/// Errors from recording a login.
#[derive(Debug, Error)]
pub enum AuthLogError {
    /// The transaction date is not a date or timestamp.
    #[error("invalid transaction date: {0}")]
    InvalidTransactionDate(String),

    /// The auth log store failed.
    #[error("auth log store error: {0}")]
    Store(String),
}

impl AuthLogError {
    /// Create a store error.
    #[must_use]
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
