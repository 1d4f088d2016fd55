//! Credential verification against the employee directory.

use std::sync::Arc;

use chrono::Duration;
use shiftgate_shared::JwtService;
use shiftgate_shared::types::EmployeeId;

use super::error::AuthError;
use super::password::{burn_verification, verify_password};
use super::types::Employee;

/// Lifetime of a session token.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Lookup of employees by login name.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait EmployeeDirectory: Send + Sync {
    /// Find an employee by username, archived or not.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<Employee>, AuthError>> + Send;
}

/// What a session token asserts about its holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// The authenticated employee.
    pub employee_id: EmployeeId,
    /// The employee's full name.
    pub full_name: String,
}

impl SessionClaims {
    /// Builds the claims for an employee.
    #[must_use]
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id,
            full_name: employee.full_name(),
        }
    }
}

/// Mints opaque session tokens.
pub trait TokenIssuer: Send + Sync {
    /// Signs `claims` into a token valid for `ttl`.
    fn sign(&self, claims: &SessionClaims, ttl: Duration) -> Result<String, AuthError>;
}

impl TokenIssuer for JwtService {
    fn sign(&self, claims: &SessionClaims, ttl: Duration) -> Result<String, AuthError> {
        self.sign_session(claims.employee_id.into_inner(), &claims.full_name, ttl)
            .map_err(|e| AuthError::unavailable(e.to_string()))
    }
}

/// A successfully verified employee and their session token.
#[derive(Debug, Clone)]
pub struct Authenticated {
    /// The employee record.
    pub employee: Employee,
    /// Signed session token, valid for [`SESSION_TTL_HOURS`].
    pub token: String,
}

/// Verifies username/password pairs and issues session tokens.
pub struct CredentialVerifier<D: EmployeeDirectory, T: TokenIssuer> {
    directory: Arc<D>,
    issuer: Arc<T>,
}

impl<D: EmployeeDirectory, T: TokenIssuer> CredentialVerifier<D, T> {
    /// Create a new credential verifier.
    #[must_use]
    pub fn new(directory: Arc<D>, issuer: Arc<T>) -> Self {
        Self { directory, issuer }
    }

    /// Verifies credentials and issues a 24-hour session token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username is unknown, the
    /// employee is archived, or the password does not match.
    /// Returns `AuthError::Unavailable` if the directory, the hash comparison or
    /// the token issuer fails.
    pub async fn verify(&self, username: &str, password: &str) -> Result<Authenticated, AuthError> {
        let found = self.directory.find_by_username(username).await?;

        let Some(employee) = found.filter(|e| !e.is_archived) else {
            burn_verification(password);
            return Err(AuthError::InvalidCredentials);
        };

        match verify_password(password, &employee.password_hash) {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(AuthError::unavailable(e.to_string())),
        }

        let token = self.issuer.sign(
            &SessionClaims::for_employee(&employee),
            Duration::hours(SESSION_TTL_HOURS),
        )?;

        Ok(Authenticated { employee, token })
    }
}
