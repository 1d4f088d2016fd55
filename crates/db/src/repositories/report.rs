//! Closing report and cash declaration repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use shiftgate_core::business_day::{
    BusinessDayError, CLOSING_REPORT_TYPE, CashDeclaration, ClosingReport, DayWindow,
    INITIAL_DECLARATION_TYPE, ReportStore,
};
use shiftgate_shared::types::{CashDeclarationId, ClosingReportId, EmployeeId};
use uuid::Uuid;

use crate::entities::{cash_declarations, closing_reports};

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a closing report for a store's business day.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create_closing_report(
        &self,
        store_code: &str,
        business_date: DateTime<Utc>,
        payload: serde_json::Value,
    ) -> Result<ClosingReport, DbErr> {
        let report = closing_reports::ActiveModel {
            id: Set(Uuid::now_v7()),
            store_code: Set(store_code.to_string()),
            report_type: Set(CLOSING_REPORT_TYPE.to_string()),
            business_date: Set(business_date.into()),
            payload: Set(payload),
            created_at: Set(Utc::now().into()),
        };

        report.insert(&self.db).await.map(to_closing_report)
    }

    /// Stores an initial cash declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create_initial_declaration(
        &self,
        employee_id: EmployeeId,
        store_code: &str,
        business_date: DateTime<Utc>,
        payload: serde_json::Value,
    ) -> Result<CashDeclaration, DbErr> {
        let declaration = cash_declarations::ActiveModel {
            id: Set(Uuid::now_v7()),
            employee_id: Set(employee_id.into_inner()),
            store_code: Set(store_code.to_string()),
            declaration_type: Set(INITIAL_DECLARATION_TYPE.to_string()),
            business_date: Set(business_date.into()),
            payload: Set(payload),
            created_at: Set(Utc::now().into()),
        };

        declaration.insert(&self.db).await.map(to_cash_declaration)
    }
}

impl ReportStore for ReportRepository {
    async fn find_latest_closing_report(
        &self,
        store_code: &str,
    ) -> Result<Option<ClosingReport>, BusinessDayError> {
        let model = closing_reports::Entity::find()
            .filter(closing_reports::Column::StoreCode.eq(store_code))
            .filter(closing_reports::Column::ReportType.eq(CLOSING_REPORT_TYPE))
            .order_by_desc(closing_reports::Column::BusinessDate)
            .one(&self.db)
            .await
            .map_err(|e| BusinessDayError::store(e.to_string()))?;

        Ok(model.map(to_closing_report))
    }

    async fn find_declaration(
        &self,
        employee_id: EmployeeId,
        window: DayWindow,
    ) -> Result<Option<CashDeclaration>, BusinessDayError> {
        let model = cash_declarations::Entity::find()
            .filter(cash_declarations::Column::EmployeeId.eq(employee_id.into_inner()))
            .filter(cash_declarations::Column::DeclarationType.eq(INITIAL_DECLARATION_TYPE))
            .filter(cash_declarations::Column::BusinessDate.gte(window.start))
            .filter(cash_declarations::Column::BusinessDate.lt(window.end))
            .order_by_asc(cash_declarations::Column::BusinessDate)
            .one(&self.db)
            .await
            .map_err(|e| BusinessDayError::store(e.to_string()))?;

        Ok(model.map(to_cash_declaration))
    }
}

fn to_closing_report(model: closing_reports::Model) -> ClosingReport {
    ClosingReport {
        id: ClosingReportId::from_uuid(model.id),
        store_code: model.store_code,
        report_type: model.report_type,
        business_date: model.business_date.with_timezone(&Utc),
        payload: model.payload,
    }
}

fn to_cash_declaration(model: cash_declarations::Model) -> CashDeclaration {
    CashDeclaration {
        id: CashDeclarationId::from_uuid(model.id),
        employee_id: EmployeeId::from_uuid(model.employee_id),
        store_code: model.store_code,
        declaration_type: model.declaration_type,
        business_date: model.business_date.with_timezone(&Utc),
        payload: model.payload,
    }
}
