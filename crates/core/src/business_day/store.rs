//! Report store abstraction.

use std::future::Future;

use shiftgate_shared::types::EmployeeId;

use super::calendar::DayWindow;
use super::error::BusinessDayError;
use super::types::{CashDeclaration, ClosingReport};

/// Read access to closing reports and cash declarations.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait ReportStore: Send + Sync {
    /// Find the closing report with the latest business date for a store.
    fn find_latest_closing_report(
        &self,
        store_code: &str,
    ) -> impl Future<Output = Result<Option<ClosingReport>, BusinessDayError>> + Send;

    /// Find an initial cash declaration by the employee dated inside `window`.
    fn find_declaration(
        &self,
        employee_id: EmployeeId,
        window: DayWindow,
    ) -> impl Future<Output = Result<Option<CashDeclaration>, BusinessDayError>> + Send;
}
