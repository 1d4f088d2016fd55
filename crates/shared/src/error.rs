//! Application-wide error types.
//!
//! Every failure leaving the service is a malformed request, a caller that
//! could not be authenticated or is not allowed to act, or a failure behind
//! the service. Internal causes are kept in the error for server-side
//! logging; [`AppError::public_message`] is what clients get to see.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request fields.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown username, archived employee, or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, invalid or expired session.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The session may not act on the requested resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// A dependency (hashing, token signing, storage) failed.
    #[error("Service error: {0}")]
    Service(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::InvalidCredentials | Self::Forbidden(_) => 403,
            Self::Unauthorized(_) => 401,
            Self::Database(_) | Self::Service(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Service(_) => "SERVICE_ERROR",
        }
    }

    /// Returns the message that is safe to show to clients.
    ///
    /// Validation messages are passed through; everything else is generic.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::InvalidCredentials => "Invalid username or password".to_string(),
            Self::Unauthorized(_) => "Authentication required".to_string(),
            Self::Forbidden(_) => "Not allowed for this session".to_string(),
            Self::Database(_) | Self::Service(_) => {
                "The service is temporarily unavailable".to_string()
            }
        }
    }

    /// Returns true when the error is caused by something behind the service.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}
