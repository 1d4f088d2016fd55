//! Initial schema: employees, closing reports and cash declarations.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r"
            DROP TABLE IF EXISTS cash_declarations CASCADE;
            DROP TABLE IF EXISTS closing_reports CASCADE;
            DROP TABLE IF EXISTS employees CASCADE;
            DROP TYPE IF EXISTS employee_role;
            ",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
CREATE TYPE employee_role AS ENUM ('cashier', 'supervisor', 'it_admin', 'manager');

CREATE TABLE employees (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(100) NOT NULL,
    password_hash VARCHAR(255) NOT NULL,
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    role employee_role NOT NULL DEFAULT 'cashier',
    is_archived BOOLEAN NOT NULL DEFAULT false,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_employees_username UNIQUE (username)
);

-- End-of-day (z-read) reports; the latest one per store defines the active business day
CREATE TABLE closing_reports (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    store_code VARCHAR(50) NOT NULL,
    report_type VARCHAR(20) NOT NULL DEFAULT 'z-read',
    business_date TIMESTAMPTZ NOT NULL,
    payload JSONB NOT NULL DEFAULT '{}'::jsonb,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_closing_reports_store_date ON closing_reports(store_code, business_date DESC);

CREATE TABLE cash_declarations (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    employee_id UUID NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
    store_code VARCHAR(50) NOT NULL,
    declaration_type VARCHAR(20) NOT NULL DEFAULT 'initial',
    business_date TIMESTAMPTZ NOT NULL,
    payload JSONB NOT NULL DEFAULT '{}'::jsonb,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_cash_declarations_employee_date ON cash_declarations(employee_id, business_date);
";
