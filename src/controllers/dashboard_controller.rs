use crate::controllers::today;
use crate::dto::api_response::ApiResponse;
use crate::models::analytics::MonthlySeries;
use crate::models::spending_limit::{SetSpendingLimitRequest, SpendingLimitStatus};
use crate::repositories::{
    expense_repository::ExpenseRepository, maintenance_repository::MaintenanceRepository,
    spending_limit_repository::SpendingLimitRepository,
};
use crate::services::date_range::{last_day_of_month, DateRange};
use crate::services::monthly_aggregator::{aggregate_monthly, window_months};
use crate::services::spending_limit::{current_month, evaluate};
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Dashboard: serie mensual y límite de gastos
pub struct DashboardController {
    expenses: ExpenseRepository,
    maintenances: MaintenanceRepository,
    limits: SpendingLimitRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            expenses: ExpenseRepository::new(pool.clone()),
            maintenances: MaintenanceRepository::new(pool.clone()),
            limits: SpendingLimitRepository::new(pool),
        }
    }

    /// Totales de los últimos 6 meses, incluyendo el actual
    pub async fn monthly(&self, user_id: Uuid) -> Result<MonthlySeries, AppError> {
        let today = today();
        let months = window_months(today);
        let start = months.first().copied().unwrap_or(today);
        let range = DateRange::new_corrected(start, last_day_of_month(today));

        let expenses = self.expenses.find_by_user(user_id, None, Some(&range)).await?;
        let maintenances = self.maintenances.find_by_user(user_id, None, Some(&range)).await?;

        Ok(MonthlySeries::from(aggregate_monthly(&expenses, &maintenances, today)))
    }

    pub async fn set_spending_limit(
        &self,
        user_id: Uuid,
        request: SetSpendingLimitRequest,
    ) -> Result<ApiResponse<SpendingLimitStatus>, AppError> {
        request.validate()?;

        let limit = self.limits.upsert(user_id, request.monthly_limit).await?;
        log::info!("💰 Límite mensual de {} fijado en {}", user_id, limit.monthly_limit);

        let status = self.status_with_limit(user_id, Some(limit.monthly_limit)).await?;
        Ok(ApiResponse::success_with_message(status, "Límite mensual actualizado"))
    }

    pub async fn spending_limit_status(&self, user_id: Uuid) -> Result<SpendingLimitStatus, AppError> {
        let limit = self.limits.find_by_user(user_id).await?;
        self.status_with_limit(user_id, limit.map(|l| l.monthly_limit))
            .await
    }

    async fn status_with_limit(
        &self,
        user_id: Uuid,
        monthly_limit: Option<Decimal>,
    ) -> Result<SpendingLimitStatus, AppError> {
        let today = today();
        let month = current_month(today);

        let expenses = self.expenses.find_by_user(user_id, None, Some(&month)).await?;
        let maintenances = self.maintenances.find_by_user(user_id, None, Some(&month)).await?;

        let status = evaluate(monthly_limit, &expenses, &maintenances, today);
        if status.exceeded {
            log::warn!("⚠️ Usuario {} superó su límite mensual ({})", user_id, status.month);
        }
        Ok(status)
    }
}
