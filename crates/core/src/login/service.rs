//! Shift login service.

use std::sync::Arc;

use super::error::LoginError;
use super::types::{ShiftLogin, ShiftLoginRequest};
use crate::auth::{CredentialVerifier, EmployeeDirectory, TokenIssuer};
use crate::business_day::{BusinessCalendar, BusinessDayResolver, InitialCashChecker, ReportStore};

/// Runs a shift login end to end.
pub struct ShiftLoginService<D: EmployeeDirectory, T: TokenIssuer, R: ReportStore> {
    verifier: CredentialVerifier<D, T>,
    resolver: BusinessDayResolver<R>,
    checker: InitialCashChecker<R>,
}

impl<D: EmployeeDirectory, T: TokenIssuer, R: ReportStore> ShiftLoginService<D, T, R> {
    /// Create a new shift login service.
    #[must_use]
    pub fn new(
        directory: Arc<D>,
        issuer: Arc<T>,
        reports: Arc<R>,
        calendar: BusinessCalendar,
    ) -> Self {
        Self {
            verifier: CredentialVerifier::new(directory, issuer),
            resolver: BusinessDayResolver::new(reports.clone(), calendar),
            checker: InitialCashChecker::new(reports, calendar),
        }
    }

    /// Logs an employee in at a store.
    ///
    /// Nothing past credential verification runs when the credentials are bad.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Auth` if verification fails.
    /// Returns `LoginError::BusinessDay` if the report store fails.
    pub async fn login(&self, request: &ShiftLoginRequest) -> Result<ShiftLogin, LoginError> {
        let authenticated = self
            .verifier
            .verify(&request.username, &request.password)
            .await?;

        let business_day = self
            .resolver
            .resolve(&request.store_code, &request.pos_date)
            .await?;

        let initial_cash = self
            .checker
            .has_initial_cash(authenticated.employee.id, &business_day.date)
            .await?;

        Ok(ShiftLogin {
            employee: authenticated.employee,
            token: authenticated.token,
            business_day,
            initial_cash,
        })
    }
}
