//! Auth log migration.
//!
//! One row per employee per business day; the unique constraint is what
//! keeps concurrent login reports from writing duplicates.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(AUTH_LOGS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS auth_logs CASCADE;")
            .await?;
        Ok(())
    }
}

const AUTH_LOGS_SQL: &str = r"
CREATE TABLE auth_logs (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    employee_id UUID NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
    store_code VARCHAR(50) NOT NULL,
    logged_for TIMESTAMPTZ NOT NULL,
    business_day DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_auth_logs_employee_day UNIQUE (employee_id, business_day)
);

CREATE INDEX idx_auth_logs_store_day ON auth_logs(store_code, business_day DESC);
";
