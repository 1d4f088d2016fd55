//! API error responses.
//!
//! Every failure is rendered as `{"message": ...}` with the status code of its
//! [`AppError`] kind. Validation failures add an `errors` object keyed by
//! request field. Causes of server errors are logged and never sent.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use shiftgate_core::auth::AuthError;
use shiftgate_core::auth_log::AuthLogError;
use shiftgate_core::business_day::BusinessDayError;
use shiftgate_core::login::LoginError;
use shiftgate_shared::{AppError, JwtError};
use tracing::error;
use validator::ValidationErrors;

/// An error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    fields: Option<Map<String, Value>>,
}

impl ApiError {
    /// A validation error on a single request field.
    #[must_use]
    pub fn invalid_field(field: &str, message: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(field.to_string(), json!([message]));
        Self {
            error: AppError::Validation(message.to_string()),
            fields: Some(fields),
        }
    }

    /// The underlying application error.
    #[must_use]
    pub const fn kind(&self) -> &AppError {
        &self.error
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            fields: None,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::InvalidCredentials.into(),
            AuthError::Unavailable(msg) => AppError::Service(msg).into(),
        }
    }
}

impl From<BusinessDayError> for ApiError {
    fn from(err: BusinessDayError) -> Self {
        match err {
            BusinessDayError::Store(msg) => AppError::Database(msg).into(),
            BusinessDayError::InvalidTimezone(_) => AppError::Service(err.to_string()).into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::Auth(e) => e.into(),
            LoginError::BusinessDay(e) => e.into(),
        }
    }
}

impl From<AuthLogError> for ApiError {
    fn from(err: AuthLogError) -> Self {
        match err {
            AuthLogError::InvalidTransactionDate(_) => {
                Self::invalid_field(
                    "transactionDate",
                    "must be a date or an RFC 3339 timestamp",
                )
            }
            AuthLogError::Store(msg) => AppError::Database(msg).into(),
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        AppError::Unauthorized(err.to_string()).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text()).into()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map_or_else(|| e.code.to_string(), ToString::to_string)
                    })
                    .collect::<Vec<_>>();
                (camel_case(&field), json!(messages))
            })
            .collect();

        Self {
            error: AppError::Validation("The request is missing required fields".to_string()),
            fields: Some(fields),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.error.is_server_error() {
            error!(error = %self.error, code = self.error.error_code(), "Request failed");
        }

        let mut body = json!({ "message": self.error.public_message() });
        if let Some(fields) = self.fields {
            body["errors"] = Value::Object(fields);
        }

        (status, Json(body)).into_response()
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
