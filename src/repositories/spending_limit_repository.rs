use crate::models::spending_limit::SpendingLimit;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SpendingLimitRepository {
    pool: PgPool,
}

impl SpendingLimitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<SpendingLimit>, AppError> {
        let limit =
            sqlx::query_as::<_, SpendingLimit>("SELECT * FROM spending_limits WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(limit)
    }

    /// Crear o reemplazar el límite del usuario
    pub async fn upsert(&self, user_id: Uuid, monthly_limit: Decimal) -> Result<SpendingLimit, AppError> {
        let limit = sqlx::query_as::<_, SpendingLimit>(
            r#"
            INSERT INTO spending_limits (user_id, monthly_limit, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id)
            DO UPDATE SET monthly_limit = EXCLUDED.monthly_limit, updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(monthly_limit)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(limit)
    }
}
