//! Shift login errors.

use thiserror::Error;

use crate::auth::AuthError;
use crate::business_day::BusinessDayError;

/// Errors from a shift login.
#[derive(Debug, Error)]
pub enum LoginError {
    /// Credential verification failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Business day resolution or the initial cash lookup failed.
    #[error(transparent)]
    BusinessDay(#[from] BusinessDayError),
}

impl LoginError {
    /// Returns true if the caller supplied bad credentials.
    #[must_use]
    pub const fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::Auth(AuthError::InvalidCredentials))
    }
}
