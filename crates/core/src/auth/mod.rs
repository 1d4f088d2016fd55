//! Authentication and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Employee roles
//! - Credential verification against the employee directory

mod credentials;
mod error;
mod password;
mod types;

pub use credentials::{
    Authenticated, CredentialVerifier, EmployeeDirectory, SESSION_TTL_HOURS, SessionClaims,
    TokenIssuer,
};
pub use error::AuthError;
pub use password::{PasswordError, burn_verification, hash_password, verify_password};
pub use types::{Employee, Role, UnknownRole};
