//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while authenticating an employee.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username, archived employee, or wrong password.
    ///
    /// The three cases are deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The directory, the hash comparison or the token issuer failed.
    #[error("authentication unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
