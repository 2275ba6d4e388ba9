use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use crate::controllers::notification_controller::NotificationController;
use crate::dto::api_response::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::notification::{
    CreateNotificationRequest, Notification, NotificationFilters, UpdateNotificationRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_notification_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications).post(create_notification))
        .route("/due", get(list_due_notifications))
        .route(
            "/:id",
            get(get_notification)
                .put(update_notification)
                .delete(delete_notification),
        )
        .route("/:id/close", post(close_notification))
}

async fn create_notification(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateNotificationRequest>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;
    Ok(Json(response))
}

async fn list_notifications(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(filters): Query<NotificationFilters>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.list(user.user_id, filters).await?;
    Ok(Json(response))
}

async fn list_due_notifications(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Notification>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.list_due(user.user_id).await?;
    Ok(Json(response))
}

async fn get_notification(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.get_by_id(id, user.user_id).await?;
    Ok(Json(response))
}

async fn update_notification(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateNotificationRequest>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.update(id, user.user_id, request).await?;
    Ok(Json(response))
}

async fn close_notification(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.close(id, user.user_id).await?;
    Ok(Json(response))
}

async fn delete_notification(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    controller.delete(id, user.user_id).await?;
    Ok(Json(ApiResponse::message("Recordatorio eliminado exitosamente")))
}
