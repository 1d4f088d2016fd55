//! Once-per-day login ledger.

use std::sync::Arc;

use shiftgate_shared::types::EmployeeId;

use super::error::AuthLogError;
use super::store::AuthLogStore;
use super::types::{NewAuthLogEntry, RecordedLogin};
use crate::business_day::BusinessCalendar;

/// Records that an employee logged in for a business day.
pub struct AuthLogLedger<S: AuthLogStore> {
    store: Arc<S>,
    calendar: BusinessCalendar,
}

impl<S: AuthLogStore> AuthLogLedger<S> {
    /// Create a new ledger.
    #[must_use]
    pub fn new(store: Arc<S>, calendar: BusinessCalendar) -> Self {
        Self { store, calendar }
    }

    /// Records a login for `employee_id` on the day of `transaction_date`.
    ///
    /// Repeated and concurrent calls for the same employee and day leave a
    /// single entry; every caller gets back the transaction date of that entry.
    ///
    /// # Errors
    ///
    /// Returns `AuthLogError::InvalidTransactionDate` if the date cannot be parsed.
    /// Returns `AuthLogError::Store` if the store fails.
    pub async fn record(
        &self,
        employee_id: EmployeeId,
        store_code: &str,
        transaction_date: &str,
    ) -> Result<RecordedLogin, AuthLogError> {
        let logged_for = self
            .calendar
            .parse_instant(transaction_date)
            .ok_or_else(|| AuthLogError::InvalidTransactionDate(transaction_date.to_string()))?;
        let business_day = self.calendar.local_date(logged_for);

        if let Some(existing) = self.store.find_entry(employee_id, business_day).await? {
            return Ok(RecordedLogin {
                logged_for: existing.logged_for,
                business_day,
                created: false,
            });
        }

        let created = self
            .store
            .insert_if_absent(NewAuthLogEntry {
                employee_id,
                store_code: store_code.to_string(),
                logged_for,
                business_day,
            })
            .await?;

        if created {
            return Ok(RecordedLogin {
                logged_for,
                business_day,
                created: true,
            });
        }

        // Lost the race; report the winner's entry.
        let winner = self
            .store
            .find_entry(employee_id, business_day)
            .await?
            .ok_or_else(|| AuthLogError::store("auth log entry vanished after conflict"))?;

        Ok(RecordedLogin {
            logged_for: winner.logged_for,
            business_day,
            created: false,
        })
    }
}
