//! Initial cash declaration lookup.

use std::sync::Arc;

use shiftgate_shared::types::EmployeeId;

use super::calendar::{BusinessCalendar, BusinessDate};
use super::error::BusinessDayError;
use super::store::ReportStore;

/// Answers whether an employee already declared their starting cash for a day.
pub struct InitialCashChecker<R: ReportStore> {
    reports: Arc<R>,
    calendar: BusinessCalendar,
}

impl<R: ReportStore> InitialCashChecker<R> {
    /// Create a new checker.
    #[must_use]
    pub fn new(reports: Arc<R>, calendar: BusinessCalendar) -> Self {
        Self { reports, calendar }
    }

    /// Returns true if a declaration by `employee_id` falls within the local
    /// calendar day of `date`.
    ///
    /// An unrecognized date matches nothing and yields `false` without a lookup.
    ///
    /// # Errors
    ///
    /// Returns `BusinessDayError::Store` if the report store fails.
    pub async fn has_initial_cash(
        &self,
        employee_id: EmployeeId,
        date: &BusinessDate,
    ) -> Result<bool, BusinessDayError> {
        let Some(day) = date.calendar_date() else {
            return Ok(false);
        };

        let window = self.calendar.day_window(day);
        let declaration = self.reports.find_declaration(employee_id, window).await?;

        Ok(declaration.is_some())
    }
}
