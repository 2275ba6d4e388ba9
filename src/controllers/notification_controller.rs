use crate::controllers::{ensure_owner, today};
use crate::dto::api_response::ApiResponse;
use crate::models::notification::{
    CreateNotificationRequest, Notification, NotificationFilters, NotificationStatus,
    UpdateNotificationRequest,
};
use crate::repositories::notification_repository::NotificationRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct NotificationController {
    repository: NotificationRepository,
}

impl NotificationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NotificationRepository::new(pool),
        }
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Notification, AppError> {
        let notification = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recordatorio no encontrado".to_string()))?;

        ensure_owner(notification.user_id, user_id, "este recordatorio")?;
        Ok(notification)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateNotificationRequest,
    ) -> Result<ApiResponse<Notification>, AppError> {
        request.validate()?;

        let notification = self
            .repository
            .create(user_id, request.date, request.description.trim())
            .await?;

        log::info!("🔔 Recordatorio creado: {} para {}", notification.id, notification.date);

        Ok(ApiResponse::success_with_message(
            notification,
            "Recordatorio creado exitosamente",
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Notification, AppError> {
        self.find_owned(id, user_id).await
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        filters: NotificationFilters,
    ) -> Result<Vec<Notification>, AppError> {
        self.repository.find_by_user(user_id, filters.status).await
    }

    /// Recordatorios abiertos cuya fecha ya llegó
    pub async fn list_due(&self, user_id: Uuid) -> Result<Vec<Notification>, AppError> {
        self.repository.find_due_for_user(user_id, today()).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateNotificationRequest,
    ) -> Result<ApiResponse<Notification>, AppError> {
        request.validate()?;

        let mut notification = self.find_owned(id, user_id).await?;

        if let Some(date) = request.date {
            notification.date = date;
        }
        if let Some(description) = request.description {
            notification.description = description.trim().to_string();
        }
        if let Some(status) = request.status {
            notification.status = status;
        }

        let updated = self.repository.update(&notification).await?;
        Ok(ApiResponse::success_with_message(
            updated,
            "Recordatorio actualizado exitosamente",
        ))
    }

    /// Cerrar un recordatorio; cerrar uno ya cerrado no cambia nada
    pub async fn close(&self, id: Uuid, user_id: Uuid) -> Result<ApiResponse<Notification>, AppError> {
        let mut notification = self.find_owned(id, user_id).await?;

        if notification.status == NotificationStatus::Closed {
            return Ok(ApiResponse::success_with_message(
                notification,
                "El recordatorio ya estaba cerrado",
            ));
        }

        notification.status = NotificationStatus::Closed;
        let updated = self.repository.update(&notification).await?;

        log::info!("✅ Recordatorio cerrado: {}", id);
        Ok(ApiResponse::success_with_message(updated, "Recordatorio cerrado"))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.find_owned(id, user_id).await?;
        self.repository.delete(id).await
    }
}
