//! Auth log repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, sea_query::OnConflict,
};
use shiftgate_core::auth_log::{AuthLogEntry, AuthLogError, AuthLogStore, NewAuthLogEntry};
use shiftgate_shared::types::{AuthLogId, EmployeeId};
use tracing::debug;
use uuid::Uuid;

use crate::entities::auth_logs;

/// Auth log repository.
#[derive(Debug, Clone)]
pub struct AuthLogRepository {
    db: DatabaseConnection,
}

impl AuthLogRepository {
    /// Creates a new auth log repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AuthLogStore for AuthLogRepository {
    async fn find_entry(
        &self,
        employee_id: EmployeeId,
        business_day: NaiveDate,
    ) -> Result<Option<AuthLogEntry>, AuthLogError> {
        let model = auth_logs::Entity::find()
            .filter(auth_logs::Column::EmployeeId.eq(employee_id.into_inner()))
            .filter(auth_logs::Column::BusinessDay.eq(business_day))
            .one(&self.db)
            .await
            .map_err(|e| AuthLogError::store(e.to_string()))?;

        Ok(model.map(to_entry))
    }

    async fn insert_if_absent(&self, entry: NewAuthLogEntry) -> Result<bool, AuthLogError> {
        let model = auth_logs::ActiveModel {
            id: Set(Uuid::now_v7()),
            employee_id: Set(entry.employee_id.into_inner()),
            store_code: Set(entry.store_code),
            logged_for: Set(entry.logged_for.into()),
            business_day: Set(entry.business_day),
            created_at: Set(Utc::now().into()),
        };

        // ON CONFLICT DO NOTHING leaves zero affected rows when the day is taken.
        let one_per_day = [
            auth_logs::Column::EmployeeId,
            auth_logs::Column::BusinessDay,
        ];
        let inserted = auth_logs::Entity::insert(model)
            .on_conflict(OnConflict::columns(one_per_day).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| AuthLogError::store(e.to_string()))?;

        if inserted == 0 {
            debug!(
                employee_id = %entry.employee_id,
                business_day = %entry.business_day,
                "Auth log entry already present"
            );
        }

        Ok(inserted > 0)
    }
}

fn to_entry(model: auth_logs::Model) -> AuthLogEntry {
    AuthLogEntry {
        id: AuthLogId::from_uuid(model.id),
        employee_id: EmployeeId::from_uuid(model.employee_id),
        store_code: model.store_code,
        logged_for: model.logged_for.with_timezone(&Utc),
        business_day: model.business_day,
    }
}
