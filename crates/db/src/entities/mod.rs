//! `SeaORM` entity definitions.

pub mod auth_logs;
pub mod cash_declarations;
pub mod closing_reports;
pub mod employees;
pub mod sea_orm_active_enums;

pub mod prelude {
    //! Entity re-exports.
    pub use super::auth_logs::Entity as AuthLogs;
    pub use super::cash_declarations::Entity as CashDeclarations;
    pub use super::closing_reports::Entity as ClosingReports;
    pub use super::employees::Entity as Employees;
}
