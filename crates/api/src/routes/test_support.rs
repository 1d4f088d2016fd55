//! Helpers for route tests.

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response};
use chrono::Utc;
use http_body_util::BodyExt;
use sea_orm::MockDatabase;
use serde_json::Value;
use shiftgate_core::auth::hash_password;
use shiftgate_core::business_day::BusinessCalendar;
use shiftgate_db::entities::{employees, sea_orm_active_enums::EmployeeRole};
use shiftgate_shared::{JwtConfig, JwtService};
use uuid::Uuid;

use crate::AppState;

pub fn state_with(db: MockDatabase) -> AppState {
    AppState {
        db: Arc::new(db.into_connection()),
        jwt_service: Arc::new(JwtService::new(&JwtConfig::default())),
        calendar: BusinessCalendar::default(),
    }
}

pub fn employee_row(username: &str, password: &str, role: EmployeeRole) -> employees::Model {
    let now = Utc::now().into();
    employees::Model {
        id: Uuid::now_v7(),
        username: username.to_string(),
        password_hash: hash_password(password).unwrap(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role,
        is_archived: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
