//! `SeaORM` Entity for employees table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::EmployeeRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: EmployeeRole,
    pub is_archived: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cash_declarations::Entity")]
    CashDeclarations,
    #[sea_orm(has_many = "super::auth_logs::Entity")]
    AuthLogs,
}

impl Related<super::cash_declarations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CashDeclarations.def()
    }
}

impl Related<super::auth_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
