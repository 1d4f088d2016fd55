//! Business day resolution.
//!
//! A store's "today" is derived from its own closing history rather than the
//! wall clock: closing a day activates the next one. This module provides:
//! - The store calendar (local days, day windows, date parsing)
//! - The resolver that picks the active business day for a login
//! - The initial cash checker

pub mod calendar;
pub mod error;
pub mod initial_cash;
pub mod resolver;
pub mod store;
pub mod types;

#[cfg(test)]
mod calendar_props;

pub use calendar::{BusinessCalendar, BusinessDate, DayWindow};
pub use error::BusinessDayError;
pub use initial_cash::InitialCashChecker;
pub use resolver::{BusinessDayResolver, ResolvedBusinessDay};
pub use store::ReportStore;
pub use types::{CLOSING_REPORT_TYPE, CashDeclaration, ClosingReport, INITIAL_DECLARATION_TYPE};
