//! Shift login request and result.

use crate::auth::Employee;
use crate::business_day::ResolvedBusinessDay;

/// What a terminal sends to start a shift.
#[derive(Debug, Clone)]
pub struct ShiftLoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Store the terminal belongs to.
    pub store_code: String,
    /// The terminal's idea of today, used only before the store's first closing.
    pub pos_date: String,
}

/// A successful shift login.
#[derive(Debug, Clone)]
pub struct ShiftLogin {
    /// The authenticated employee.
    pub employee: Employee,
    /// Session token for follow-up calls.
    pub token: String,
    /// The business day the shift runs under.
    pub business_day: ResolvedBusinessDay,
    /// True if the employee already declared initial cash for that day.
    pub initial_cash: bool,
}
