//! Auth log storage abstraction.

use chrono::NaiveDate;
use shiftgate_shared::types::EmployeeId;

use super::error::AuthLogError;
use super::types::{AuthLogEntry, NewAuthLogEntry};

/// Persistence for auth log entries.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait AuthLogStore: Send + Sync {
    /// Find the entry for an employee on a business day.
    fn find_entry(
        &self,
        employee_id: EmployeeId,
        business_day: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Option<AuthLogEntry>, AuthLogError>> + Send;

    /// Insert the entry unless one already exists for its employee and day.
    ///
    /// Must be atomic: of any number of concurrent calls for the same key,
    /// exactly one returns `true`.
    fn insert_if_absent(
        &self,
        entry: NewAuthLogEntry,
    ) -> impl std::future::Future<Output = Result<bool, AuthLogError>> + Send;
}
