//! Session middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use shiftgate_shared::types::EmployeeId;
use shiftgate_shared::{AppError, Claims};
use tracing::info;

use crate::{AppState, error::ApiError};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Finds the session token, preferring the Authorization header over the cookie.
fn session_token(request: &Request) -> Option<String> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token);

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(request.headers())
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Session middleware that validates session tokens.
///
/// This middleware:
/// 1. Takes the token from a Bearer header or the `session` cookie
/// 2. Validates the token using the JWT service
/// 3. Stores the claims in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(&request) else {
        return ApiError::from(AppError::Unauthorized("missing session token".to_string()))
            .into_response();
    };

    match state.jwt_service.validate_token(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            info!(error = %e, uri = %request.uri(), "Rejected session token");
            ApiError::from(e).into_response()
        }
    }
}

/// Extractor for the employee behind the session.
#[derive(Debug, Clone)]
pub struct AuthEmployee(pub Claims);

impl AuthEmployee {
    /// Returns the employee ID from the claims.
    #[must_use]
    pub fn employee_id(&self) -> EmployeeId {
        EmployeeId::from_uuid(self.0.employee_id())
    }

    /// Returns the employee's full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl<S> FromRequestParts<S> for AuthEmployee
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthEmployee)
            .ok_or_else(|| AppError::Unauthorized("no session".to_string()).into())
    }
}
