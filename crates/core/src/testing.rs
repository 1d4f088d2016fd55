//! In-memory collaborators for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use shiftgate_shared::types::{AuthLogId, CashDeclarationId, ClosingReportId, EmployeeId};

use crate::auth::{AuthError, Employee, EmployeeDirectory, Role, hash_password};
use crate::auth_log::{AuthLogEntry, AuthLogError, AuthLogStore, NewAuthLogEntry};
use crate::business_day::{
    BusinessDayError, CLOSING_REPORT_TYPE, CashDeclaration, ClosingReport, DayWindow,
    INITIAL_DECLARATION_TYPE, ReportStore,
};

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn employee(username: &str, password: &str, role: Role) -> Employee {
    Employee {
        id: EmployeeId::new(),
        username: username.to_string(),
        password_hash: hash_password(password).unwrap(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role,
        is_archived: false,
    }
}

/// Mock employee directory.
#[derive(Default)]
pub struct MockDirectory {
    pub employees: Mutex<HashMap<String, Employee>>,
    pub fail: bool,
}

impl MockDirectory {
    pub fn with(employees: impl IntoIterator<Item = Employee>) -> Self {
        let directory = Self::default();
        for employee in employees {
            directory
                .employees
                .lock()
                .unwrap()
                .insert(employee.username.clone(), employee);
        }
        directory
    }
}

impl EmployeeDirectory for MockDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AuthError> {
        if self.fail {
            return Err(AuthError::unavailable("directory offline"));
        }
        Ok(self.employees.lock().unwrap().get(username).cloned())
    }
}

/// Mock report store.
#[derive(Default)]
pub struct MockReportStore {
    pub closings: Mutex<Vec<ClosingReport>>,
    pub declarations: Mutex<Vec<CashDeclaration>>,
    pub fail: bool,
    pub declaration_lookups: AtomicUsize,
}

impl MockReportStore {
    pub fn add_closing(&self, store_code: &str, business_date: DateTime<Utc>) -> ClosingReport {
        let report = ClosingReport {
            id: ClosingReportId::new(),
            store_code: store_code.to_string(),
            report_type: CLOSING_REPORT_TYPE.to_string(),
            business_date,
            payload: serde_json::json!({ "total": 0 }),
        };
        self.closings.lock().unwrap().push(report.clone());
        report
    }

    pub fn add_declaration(&self, employee_id: EmployeeId, business_date: DateTime<Utc>) {
        self.declarations.lock().unwrap().push(CashDeclaration {
            id: CashDeclarationId::new(),
            employee_id,
            store_code: "S1".to_string(),
            declaration_type: INITIAL_DECLARATION_TYPE.to_string(),
            business_date,
            payload: serde_json::json!({ "amount": "150.00" }),
        });
    }
}

impl ReportStore for MockReportStore {
    async fn find_latest_closing_report(
        &self,
        store_code: &str,
    ) -> Result<Option<ClosingReport>, BusinessDayError> {
        if self.fail {
            return Err(BusinessDayError::store("report store offline"));
        }
        Ok(self
            .closings
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.store_code == store_code)
            .max_by_key(|r| r.business_date)
            .cloned())
    }

    async fn find_declaration(
        &self,
        employee_id: EmployeeId,
        window: DayWindow,
    ) -> Result<Option<CashDeclaration>, BusinessDayError> {
        if self.fail {
            return Err(BusinessDayError::store("report store offline"));
        }
        self.declaration_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .declarations
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.employee_id == employee_id && window.contains(d.business_date))
            .cloned())
    }
}

/// Mock auth log store; the mutex makes insert-if-absent atomic.
#[derive(Default)]
pub struct MockAuthLogStore {
    pub entries: Mutex<HashMap<(EmployeeId, NaiveDate), AuthLogEntry>>,
    pub fail: bool,
    pub inserts_attempted: AtomicUsize,
}

impl MockAuthLogStore {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl AuthLogStore for MockAuthLogStore {
    async fn find_entry(
        &self,
        employee_id: EmployeeId,
        business_day: NaiveDate,
    ) -> Result<Option<AuthLogEntry>, AuthLogError> {
        if self.fail {
            return Err(AuthLogError::store("auth log offline"));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(employee_id, business_day))
            .cloned())
    }

    async fn insert_if_absent(&self, entry: NewAuthLogEntry) -> Result<bool, AuthLogError> {
        if self.fail {
            return Err(AuthLogError::store("auth log offline"));
        }
        self.inserts_attempted.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        let key = (entry.employee_id, entry.business_day);
        if entries.contains_key(&key) {
            return Ok(false);
        }
        entries.insert(
            key,
            AuthLogEntry {
                id: AuthLogId::new(),
                employee_id: entry.employee_id,
                store_code: entry.store_code,
                logged_for: entry.logged_for,
                business_day: entry.business_day,
            },
        );
        Ok(true)
    }
}
