//! Repository abstractions for data access.
//!
//! Repositories implement the storage traits of `shiftgate-core`, hiding the
//! `SeaORM` implementation details from the rest of the application.

pub mod auth_log;
pub mod employee;
pub mod report;

pub use auth_log::AuthLogRepository;
pub use employee::{CreateEmployeeInput, EmployeeRepository};
pub use report::ReportRepository;
