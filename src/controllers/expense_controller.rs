use crate::controllers::{ensure_owner, today};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::models::expense::{CreateExpenseRequest, Expense, RecordFilters, UpdateExpenseRequest};
use crate::repositories::expense_repository::{new_expense, ExpenseRepository};
use crate::services::date_range::resolve_query;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ExpenseController {
    repository: ExpenseRepository,
    vehicles: VehicleController,
}

impl ExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ExpenseRepository::new(pool.clone()),
            vehicles: VehicleController::new(pool),
        }
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Expense, AppError> {
        let expense = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto no encontrado".to_string()))?;

        ensure_owner(expense.user_id, user_id, "este gasto")?;
        Ok(expense)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateExpenseRequest,
    ) -> Result<ApiResponse<Expense>, AppError> {
        request.validate()?;

        // El vehículo debe pertenecer al mismo usuario
        self.vehicles.find_owned(request.vehicle_id, user_id).await?;

        let expense = self.repository.create(&new_expense(user_id, request)).await?;

        log::info!(
            "💸 Gasto registrado: {} ({} {})",
            expense.id,
            expense.category,
            expense.amount
        );

        Ok(ApiResponse::success_with_message(expense, "Gasto registrado exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Expense, AppError> {
        self.find_owned(id, user_id).await
    }

    pub async fn list(&self, user_id: Uuid, filters: RecordFilters) -> Result<Vec<Expense>, AppError> {
        let range = resolve_query(filters.period.as_deref(), filters.start, filters.end, today())?;
        self.repository
            .find_by_user(user_id, filters.vehicle_id, range.as_ref())
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateExpenseRequest,
    ) -> Result<ApiResponse<Expense>, AppError> {
        request.validate()?;

        let mut expense = self.find_owned(id, user_id).await?;

        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles.find_owned(vehicle_id, user_id).await?;
            expense.vehicle_id = vehicle_id;
        }
        if let Some(date) = request.date {
            expense.date = date;
        }
        if let Some(category) = request.category {
            expense.category = category;
        }
        if let Some(amount) = request.amount {
            expense.amount = amount;
        }
        if request.description.is_some() {
            expense.description = request.description;
        }

        let updated = self.repository.update(&expense).await?;
        Ok(ApiResponse::success_with_message(updated, "Gasto actualizado exitosamente"))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.find_owned(id, user_id).await?;
        self.repository.delete(id).await
    }
}
