//! Business day resolver.

use std::sync::Arc;

use super::calendar::{BusinessCalendar, BusinessDate};
use super::error::BusinessDayError;
use super::store::ReportStore;
use super::types::ClosingReport;

/// The business day a login session runs under.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBusinessDay {
    /// The authoritative transaction date.
    pub date: BusinessDate,
    /// The store's latest closing report, if it ever closed a day.
    pub previous_closing: Option<ClosingReport>,
}

impl ResolvedBusinessDay {
    /// Returns true if the store has never closed a day.
    #[must_use]
    pub const fn is_first_day(&self) -> bool {
        self.previous_closing.is_none()
    }
}

/// Resolves the active business day of a store from its closing history.
pub struct BusinessDayResolver<R: ReportStore> {
    reports: Arc<R>,
    calendar: BusinessCalendar,
}

impl<R: ReportStore> BusinessDayResolver<R> {
    /// Create a new resolver.
    #[must_use]
    pub fn new(reports: Arc<R>, calendar: BusinessCalendar) -> Self {
        Self { reports, calendar }
    }

    /// Resolves the business day for `store_code`.
    ///
    /// If the store has closed a day before, the active day is the one after
    /// the latest closing report. Otherwise the client's `pos_date` is taken
    /// verbatim; it is not validated here.
    ///
    /// # Errors
    ///
    /// Returns `BusinessDayError::Store` if the report store fails.
    pub async fn resolve(
        &self,
        store_code: &str,
        pos_date: &str,
    ) -> Result<ResolvedBusinessDay, BusinessDayError> {
        let previous_closing = self.reports.find_latest_closing_report(store_code).await?;

        let date = match &previous_closing {
            Some(report) => BusinessDate::Calendar(self.calendar.day_after(report.business_date)),
            None => self.calendar.parse_business_date(pos_date),
        };

        Ok(ResolvedBusinessDay {
            date,
            previous_closing,
        })
    }
}
