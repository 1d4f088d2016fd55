//! Auth log types.

use chrono::{DateTime, NaiveDate, Utc};
use shiftgate_shared::types::{AuthLogId, EmployeeId};

/// A stored auth log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthLogEntry {
    /// Entry ID.
    pub id: AuthLogId,
    /// The employee who logged in.
    pub employee_id: EmployeeId,
    /// The store the login happened at.
    pub store_code: String,
    /// The transaction date the login was reported for.
    pub logged_for: DateTime<Utc>,
    /// The store-local calendar day of `logged_for`; unique per employee.
    pub business_day: NaiveDate,
}

/// An entry to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthLogEntry {
    /// The employee who logged in.
    pub employee_id: EmployeeId,
    /// The store the login happened at.
    pub store_code: String,
    /// The reported transaction date.
    pub logged_for: DateTime<Utc>,
    /// The store-local calendar day of `logged_for`.
    pub business_day: NaiveDate,
}

/// Outcome of recording a login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedLogin {
    /// The transaction date stored for the day, which is the first one reported.
    pub logged_for: DateTime<Utc>,
    /// The business day the entry belongs to.
    pub business_day: NaiveDate,
    /// True if this call created the entry.
    pub created: bool,
}
