//! Employee repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use shiftgate_core::auth::{AuthError, Employee, EmployeeDirectory, Role};
use shiftgate_shared::types::EmployeeId;
use uuid::Uuid;

use crate::entities::employees;

/// Input for creating an employee.
#[derive(Debug, Clone)]
pub struct CreateEmployeeInput {
    /// Login name; must be unique.
    pub username: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role at the store.
    pub role: Role,
}

/// Employee repository.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    db: DatabaseConnection,
}

impl EmployeeRepository {
    /// Creates a new employee repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including on a duplicate username.
    pub async fn create(&self, input: CreateEmployeeInput) -> Result<Employee, DbErr> {
        let now = Utc::now().into();

        let employee = employees::ActiveModel {
            id: Set(Uuid::now_v7()),
            username: Set(input.username),
            password_hash: Set(input.password_hash),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            role: Set(input.role.into()),
            is_archived: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        employee.insert(&self.db).await.map(to_employee)
    }

    /// Marks an employee as archived or active again.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn set_archived(&self, id: EmployeeId, archived: bool) -> Result<(), DbErr> {
        employees::ActiveModel {
            id: Set(id.into_inner()),
            is_archived: Set(archived),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        Ok(())
    }
}

impl EmployeeDirectory for EmployeeRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AuthError> {
        let model = employees::Entity::find()
            .filter(employees::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::unavailable(e.to_string()))?;

        Ok(model.map(to_employee))
    }
}

fn to_employee(model: employees::Model) -> Employee {
    Employee {
        id: EmployeeId::from_uuid(model.id),
        username: model.username,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        role: model.role.into(),
        is_archived: model.is_archived,
    }
}
