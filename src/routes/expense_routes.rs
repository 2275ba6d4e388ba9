use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use crate::controllers::expense_controller::ExpenseController;
use crate::dto::api_response::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::expense::{CreateExpenseRequest, Expense, RecordFilters, UpdateExpenseRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route(
            "/:id",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

async fn create_expense(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;
    Ok(Json(response))
}

async fn get_expense(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Expense>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.get_by_id(id, user.user_id).await?;
    Ok(Json(response))
}

/// `?vehicle_id=&period=&start=&end=`
async fn list_expenses(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(filters): Query<RecordFilters>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.list(user.user_id, filters).await?;
    Ok(Json(response))
}

async fn update_expense(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.update(id, user.user_id, request).await?;
    Ok(Json(response))
}

async fn delete_expense(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    controller.delete(id, user.user_id).await?;
    Ok(Json(ApiResponse::message("Gasto eliminado exitosamente")))
}
