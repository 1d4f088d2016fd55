//! Closing report and cash declaration types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shiftgate_shared::types::{CashDeclarationId, ClosingReportId, EmployeeId};

/// Type tag of an end-of-day closing report.
pub const CLOSING_REPORT_TYPE: &str = "z-read";

/// Type tag of a start-of-shift cash declaration.
pub const INITIAL_DECLARATION_TYPE: &str = "initial";

/// An end-of-day report that closed a store's business day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosingReport {
    /// Unique identifier.
    pub id: ClosingReportId,
    /// Store the report belongs to.
    pub store_code: String,
    /// Report type tag (`z-read`).
    #[serde(rename = "type")]
    pub report_type: String,
    /// The business day that was closed.
    pub business_date: DateTime<Utc>,
    /// Report contents, opaque to this service.
    pub payload: serde_json::Value,
}

/// A cash declaration made by an employee for a business day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashDeclaration {
    /// Unique identifier.
    pub id: CashDeclarationId,
    /// Employee who declared the cash.
    pub employee_id: EmployeeId,
    /// Store the declaration was made at.
    pub store_code: String,
    /// Declaration type tag (`initial`).
    #[serde(rename = "type")]
    pub declaration_type: String,
    /// The business day the declaration is for.
    pub business_date: DateTime<Utc>,
    /// Declaration contents, opaque to this service.
    pub payload: serde_json::Value,
}
