//! Shift login route.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize, Serializer};
use shiftgate_core::auth::SESSION_TTL_HOURS;
use shiftgate_core::business_day::ClosingReport;
use shiftgate_core::login::{ShiftLogin, ShiftLoginRequest, ShiftLoginService};
use shiftgate_db::{EmployeeRepository, ReportRepository};
use shiftgate_shared::AppError;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState, error::ApiError, extractors::ValidatedJson, middleware::auth::SESSION_COOKIE,
};

/// Shift login request body.
#[derive(Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    /// Login name.
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Store the terminal belongs to.
    #[validate(length(min = 1, message = "storeCode is required"))]
    pub store_code: String,
    /// The terminal's current date.
    #[validate(length(min = 1, message = "posDate is required"))]
    pub pos_date: String,
}

/// The employee part of a login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInfo {
    /// Employee ID.
    pub employee_id: Uuid,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// True for managers and IT administrators.
    pub is_admin: bool,
}

/// Shift login response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The authenticated employee.
    pub data: EmployeeInfo,
    /// True if the employee already declared initial cash for the business day.
    pub initial_cash: bool,
    /// The store's latest closing report, or `false` before the first closing.
    #[serde(serialize_with = "report_or_false")]
    pub transaction_date: Option<ClosingReport>,
    /// The resolved business day.
    pub business_date: String,
}

impl From<ShiftLogin> for LoginResponse {
    fn from(login: ShiftLogin) -> Self {
        Self {
            data: EmployeeInfo {
                employee_id: login.employee.id.into_inner(),
                is_admin: login.employee.is_admin(),
                firstname: login.employee.first_name,
                lastname: login.employee.last_name,
            },
            initial_cash: login.initial_cash,
            business_date: login.business_day.date.to_string(),
            transaction_date: login.business_day.previous_closing,
        }
    }
}

#[allow(clippy::ref_option)]
fn report_or_false<S: Serializer>(
    report: &Option<ClosingReport>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match report {
        Some(report) => report.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

/// Builds the `session` cookie carrying the token.
fn session_cookie(token: &str) -> Result<Cookie<'static>, ApiError> {
    let max_age = SESSION_TTL_HOURS * 3600;
    Cookie::parse(format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}"
    ))
    .map_err(|e| ApiError::from(AppError::Service(format!("invalid session cookie: {e}"))))
}

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// POST /auth/login - Start a shift.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    let db = (*state.db).clone();
    let service = ShiftLoginService::new(
        Arc::new(EmployeeRepository::new(db.clone())),
        state.jwt_service.clone(),
        Arc::new(ReportRepository::new(db)),
        state.calendar,
    );

    let request = ShiftLoginRequest {
        username: payload.username,
        password: payload.password,
        store_code: payload.store_code,
        pos_date: payload.pos_date,
    };

    let login = match service.login(&request).await {
        Ok(login) => login,
        Err(e) if e.is_invalid_credentials() => {
            info!(
                username = %request.username,
                store_code = %request.store_code,
                "Failed login attempt"
            );
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        employee_id = %login.employee.id,
        store_code = %request.store_code,
        business_date = %login.business_day.date,
        initial_cash = login.initial_cash,
        "Employee logged in"
    );

    let cookie = session_cookie(&login.token)?;
    Ok((jar.add(cookie), Json(login.into())))
}
