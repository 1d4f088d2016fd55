//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use shiftgate_core::auth::Role;

/// The `employee_role` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "employee_role")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Cashier.
    #[sea_orm(string_value = "cashier")]
    Cashier,
    /// Supervisor.
    #[sea_orm(string_value = "supervisor")]
    Supervisor,
    /// IT administrator.
    #[sea_orm(string_value = "it_admin")]
    ItAdmin,
    /// Store manager.
    #[sea_orm(string_value = "manager")]
    Manager,
}

impl From<EmployeeRole> for Role {
    fn from(role: EmployeeRole) -> Self {
        match role {
            EmployeeRole::Cashier => Self::Cashier,
            EmployeeRole::Supervisor => Self::Supervisor,
            EmployeeRole::ItAdmin => Self::ItAdmin,
            EmployeeRole::Manager => Self::Manager,
        }
    }
}

impl From<Role> for EmployeeRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Cashier => Self::Cashier,
            Role::Supervisor => Self::Supervisor,
            Role::ItAdmin => Self::ItAdmin,
            Role::Manager => Self::Manager,
        }
    }
}
