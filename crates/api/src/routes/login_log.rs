//! Daily login log route.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use shiftgate_core::auth_log::AuthLogLedger;
use shiftgate_db::AuthLogRepository;
use shiftgate_shared::{AppError, types::EmployeeId};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::{AppState, error::ApiError, extractors::ValidatedJson, middleware::auth::AuthEmployee};

/// Login log request body.
#[derive(Debug, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginLogRequest {
    /// The employee who logged in.
    #[validate(required(message = "employeeId is required"))]
    pub employee_id: Option<Uuid>,
    /// The store the login happened at.
    #[validate(length(min = 1, message = "storeCode is required"))]
    pub store_code: String,
    /// The business day's transaction date.
    #[validate(length(min = 1, message = "transactionDate is required"))]
    pub transaction_date: String,
}

/// Login log response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginLogResponse {
    /// The transaction date of the day's entry, as RFC 3339.
    pub transaction_date: String,
}

/// Creates the login log router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login-log", post(record_login))
}

/// POST /auth/login-log - Record the day's login for an employee.
async fn record_login(
    State(state): State<AppState>,
    session: AuthEmployee,
    ValidatedJson(payload): ValidatedJson<LoginLogRequest>,
) -> Result<Json<LoginLogResponse>, ApiError> {
    let Some(employee_id) = payload.employee_id.map(EmployeeId::from_uuid) else {
        return Err(ApiError::invalid_field(
            "employeeId",
            "employeeId is required",
        ));
    };

    if employee_id != session.employee_id() {
        warn!(
            session_employee_id = %session.employee_id(),
            employee_id = %employee_id,
            "Rejected login log for a different employee"
        );
        return Err(AppError::Forbidden(format!(
            "session {} cannot record logins for {employee_id}",
            session.employee_id()
        ))
        .into());
    }

    let ledger = AuthLogLedger::new(
        Arc::new(AuthLogRepository::new((*state.db).clone())),
        state.calendar,
    );
    let recorded = ledger
        .record(employee_id, &payload.store_code, &payload.transaction_date)
        .await?;

    info!(
        employee_id = %employee_id,
        store_code = %payload.store_code,
        business_day = %recorded.business_day,
        created = recorded.created,
        "Login recorded"
    );

    Ok(Json(LoginLogResponse {
        transaction_date: recorded
            .logged_for
            .to_rfc3339_opts(SecondsFormat::AutoSi, true),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION, header::COOKIE},
        middleware::from_fn_with_state,
    };
    use chrono::{DateTime, Duration, NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;
    use shiftgate_db::entities::auth_logs;
    use tower::ServiceExt;

    use crate::middleware::auth::auth_middleware;
    use crate::routes::test_support::{json_body, post_json, state_with};

    fn app(db: MockDatabase) -> (Router, AppState) {
        let state = state_with(db);
        let router = Router::new()
            .merge(routes())
            .layer(from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state.clone());
        (router, state)
    }

    fn token(state: &AppState, employee_id: Uuid) -> String {
        state
            .jwt_service
            .sign_session(employee_id, "Ada Lovelace", Duration::hours(24))
            .unwrap()
    }

    fn request(employee_id: Uuid, transaction_date: &str) -> serde_json::Value {
        json!({
            "employeeId": employee_id,
            "storeCode": "S1",
            "transactionDate": transaction_date
        })
    }

    fn with_bearer(mut req: Request<Body>, token: &str) -> Request<Body> {
        req.headers_mut()
            .insert(AUTHORIZATION, format!("Bearer {token}").parse().unwrap());
        req
    }

    #[tokio::test]
    async fn test_first_login_of_day_is_recorded() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<auth_logs::Model>::new()])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }]);
        let (app, state) = app(db);
        let employee_id = Uuid::now_v7();
        let token = token(&state, employee_id);

        let body = request(employee_id, "2024-02-01T09:15:00Z");
        let response = app
            .oneshot(with_bearer(post_json("/auth/login-log", &body), &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["transactionDate"],
            "2024-02-01T09:15:00Z"
        );
    }

    #[tokio::test]
    async fn test_repeat_login_returns_first_transaction_date() {
        let employee_id = Uuid::now_v7();
        let first: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-02-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let existing = auth_logs::Model {
            id: Uuid::now_v7(),
            employee_id,
            store_code: "S1".to_string(),
            logged_for: first.into(),
            business_day: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            created_at: first.into(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]]);
        let (app, state) = app(db);
        let token = token(&state, employee_id);

        let body = request(employee_id, "2024-02-01T17:30:00Z");
        let mut req = post_json("/auth/login-log", &body);
        req.headers_mut()
            .insert(COOKIE, format!("session={token}").parse().unwrap());
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["transactionDate"],
            "2024-02-01T08:00:00Z"
        );
    }

    #[tokio::test]
    async fn test_missing_session_is_unauthorized() {
        let (app, _) = app(MockDatabase::new(DatabaseBackend::Postgres));

        let body = request(Uuid::now_v7(), "2024-02-01");
        let response = app
            .oneshot(post_json("/auth/login-log", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(json_body(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn test_expired_session_is_unauthorized() {
        let (app, state) = app(MockDatabase::new(DatabaseBackend::Postgres));
        let employee_id = Uuid::now_v7();
        let expired = state
            .jwt_service
            .sign_session(employee_id, "Ada Lovelace", Duration::hours(-2))
            .unwrap();

        let body = request(employee_id, "2024-02-01");
        let response = app
            .oneshot(with_bearer(post_json("/auth/login-log", &body), &expired))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_for_another_employee_is_forbidden() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);
        let (app, state) = app(db);
        let token = token(&state, Uuid::now_v7());
        let other_employee = Uuid::now_v7();

        let body = request(other_employee, "2024-02-01T09:15:00Z");
        let response = app
            .oneshot(with_bearer(post_json("/auth/login-log", &body), &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Not allowed for this session");
        assert!(json.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_unparseable_transaction_date_is_unprocessable() {
        let (app, state) = app(MockDatabase::new(DatabaseBackend::Postgres));
        let employee_id = Uuid::now_v7();
        let token = token(&state, employee_id);

        let body = request(employee_id, "next tuesday");
        let response = app
            .oneshot(with_bearer(post_json("/auth/login-log", &body), &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert!(json["errors"]["transactionDate"].is_array());
    }

    #[tokio::test]
    async fn test_missing_fields_are_unprocessable() {
        let (app, state) = app(MockDatabase::new(DatabaseBackend::Postgres));
        let token = token(&state, Uuid::now_v7());

        let body = json!({});
        let response = app
            .oneshot(with_bearer(post_json("/auth/login-log", &body), &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert!(json["errors"]["employeeId"].is_array());
        assert!(json["errors"]["storeCode"].is_array());
        assert!(json["errors"]["transactionDate"].is_array());
    }
}
