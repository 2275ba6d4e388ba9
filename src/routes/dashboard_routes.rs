use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::api_response::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::analytics::MonthlySeries;
use crate::models::spending_limit::{SetSpendingLimitRequest, SpendingLimitStatus};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/monthly", get(monthly_series))
}

pub fn create_spending_limit_router() -> Router<AppState> {
    Router::new()
        .route("/", put(set_spending_limit))
        .route("/status", get(spending_limit_status))
}

async fn monthly_series(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<MonthlySeries>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.monthly(user.user_id).await?;
    Ok(Json(response))
}

async fn set_spending_limit(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<SetSpendingLimitRequest>,
) -> Result<Json<ApiResponse<SpendingLimitStatus>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.set_spending_limit(user.user_id, request).await?;
    Ok(Json(response))
}

async fn spending_limit_status(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<SpendingLimitStatus>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.spending_limit_status(user.user_id).await?;
    Ok(Json(response))
}
