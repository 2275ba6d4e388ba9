use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use crate::controllers::report_controller::ReportController;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::report::{Report, ReportQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_report))
        .route("/export", get(export_report))
}

/// `?period=&start=&end=&category=&vehicle_id=`
async fn get_report(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Report>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.report(user.user_id, &query).await?;
    Ok(Json(response))
}

async fn export_report(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let export = controller.export_csv(user.user_id, &query).await?;

    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response())
}
