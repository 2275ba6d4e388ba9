use axum::{extract::State, routing::put, Json, Router};
use crate::controllers::profile_controller::ProfileController;
use crate::dto::api_response::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::{UpdateProfileRequest, UserResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_profile_router() -> Router<AppState> {
    Router::new().route("/", put(update_profile))
}

async fn update_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.update(user.user_id, request).await?;
    Ok(Json(response))
}
