pub mod auth_routes;
pub mod dashboard_routes;
pub mod expense_routes;
pub mod maintenance_routes;
pub mod notification_routes;
pub mod profile_routes;
pub mod report_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Router completo de la API
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/profile", profile_routes::create_profile_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/expenses", expense_routes::create_expense_router())
        .nest("/api/maintenances", maintenance_routes::create_maintenance_router())
        .nest("/api/notifications", notification_routes::create_notification_router())
        .nest("/api/spending-limit", dashboard_routes::create_spending_limit_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/api/reports", report_routes::create_report_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
