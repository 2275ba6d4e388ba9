use crate::models::notification::{Notification, NotificationStatus};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        description: &str,
    ) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, user_id, date, description, status, created_at)
            VALUES ($1, $2, $3, $4, 'open', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, AppError> {
        let notification =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(notification)
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        status: Option<NotificationStatus>,
    ) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE user_id = $1 AND ($2::notification_status IS NULL OR status = $2)
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    /// Recordatorios abiertos con fecha <= `today` de un usuario
    pub async fn find_due_for_user(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE user_id = $1 AND status = 'open' AND date <= $2
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    /// Recordatorios vencidos de todos los usuarios (escaneo diario)
    pub async fn find_all_due(&self, today: NaiveDate) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE status = 'open' AND date <= $1
            ORDER BY user_id, date ASC
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    pub async fn update(&self, notification: &Notification) -> Result<Notification, AppError> {
        let updated = sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET date = $2, description = $3, status = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(notification.id)
        .bind(notification.date)
        .bind(&notification.description)
        .bind(notification.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
