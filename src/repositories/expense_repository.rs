use crate::models::expense::{CreateExpenseRequest, Expense};
use crate::services::date_range::DateRange;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, expense: &Expense) -> Result<Expense, AppError> {
        let created = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (id, user_id, vehicle_id, date, category, amount, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(expense.id)
        .bind(expense.user_id)
        .bind(expense.vehicle_id)
        .bind(expense.date)
        .bind(expense.category)
        .bind(expense.amount)
        .bind(&expense.description)
        .bind(expense.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Expense>, AppError> {
        let expense = sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(expense)
    }

    /// Gastos del usuario, opcionalmente de un vehículo y dentro de un intervalo
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        vehicle_id: Option<Uuid>,
        range: Option<&DateRange>,
    ) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT * FROM expenses
            WHERE user_id = $1
              AND ($2::uuid IS NULL OR vehicle_id = $2)
              AND ($3::date IS NULL OR date >= $3)
              AND ($4::date IS NULL OR date <= $4)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .bind(range.map(|r| r.start))
        .bind(range.map(|r| r.end))
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn update(&self, expense: &Expense) -> Result<Expense, AppError> {
        let updated = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses
            SET vehicle_id = $2, date = $3, category = $4, amount = $5, description = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(expense.id)
        .bind(expense.vehicle_id)
        .bind(expense.date)
        .bind(expense.category)
        .bind(expense.amount)
        .bind(&expense.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Registro nuevo listo para insertar
pub fn new_expense(user_id: Uuid, request: CreateExpenseRequest) -> Expense {
    Expense {
        id: Uuid::new_v4(),
        user_id,
        vehicle_id: request.vehicle_id,
        date: request.date,
        category: request.category,
        amount: request.amount,
        description: request.description,
        created_at: Utc::now(),
    }
}
