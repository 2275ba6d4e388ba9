use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use vehicle_manager::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_manager::routes::create_router;
use vehicle_manager::state::AppState;
use vehicle_manager::utils::jwt::generate_token;

/// Router con un pool perezoso: las rutas probadas responden antes de tocar la base
fn create_test_app() -> (Router, AppState) {
    let config = EnvironmentConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some("test-secret".to_string()),
        _ => None,
    })
    .unwrap();
    let pool = DatabaseConfig::with_url("postgres://localhost:5432/vehicle_manager_test".to_string(), 1)
        .create_lazy_pool()
        .unwrap();

    let state = AppState::new(pool, config);
    (create_router(state.clone()), state)
}

fn bearer(state: &AppState) -> String {
    let token = generate_token(Uuid::new_v4(), "ana@example.com", &state.jwt).unwrap();
    format!("Bearer {}", token)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app();
    let (status, body) = send(app, get("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "vehicle_manager");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let (app, _) = create_test_app();
    let (status, body) = send(app, get("/api/vehicles", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let (app, _) = create_test_app();
    let (status, body) = send(app, get("/api/dashboard/monthly", Some("Bearer no-es-un-jwt"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "JWT_ERROR");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let (app, state) = create_test_app();
    let mut other = state.jwt.clone();
    other.secret = "otro-secreto".to_string();
    let token = generate_token(Uuid::new_v4(), "ana@example.com", &other).unwrap();

    let (status, _) = send(
        app,
        get("/api/expenses", Some(&format!("Bearer {}", token))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_validates_payload() {
    let (app, _) = create_test_app();
    let request = json_request(
        Method::POST,
        "/api/auth/register",
        None,
        json!({ "full_name": "Ana", "email": "no-es-email", "password": "123" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["email"].is_array());
    assert!(body["details"]["password"].is_array());
}

#[tokio::test]
async fn test_unknown_period_is_bad_request() {
    let (app, state) = create_test_app();
    let auth = bearer(&state);
    let (status, body) = send(app, get("/api/expenses?period=2weeks", Some(&auth))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_custom_period_needs_both_bounds() {
    let (app, state) = create_test_app();
    let auth = bearer(&state);
    let (status, _) = send(
        app,
        get("/api/reports?period=custom&start=2024-01-01", Some(&auth)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_report_category_is_bad_request() {
    let (app, state) = create_test_app();
    let auth = bearer(&state);
    let (status, _) = send(app, get("/api/reports/export?category=lavado", Some(&auth))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_spending_limit_must_be_positive() {
    let (app, state) = create_test_app();
    let auth = bearer(&state);
    let request = json_request(
        Method::PUT,
        "/api/spending-limit",
        Some(&auth),
        json!({ "monthly_limit": "0" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["monthly_limit"].is_array());
}

#[tokio::test]
async fn test_spending_limit_rejects_sub_cent_amounts() {
    let (app, state) = create_test_app();
    let auth = bearer(&state);
    let request = json_request(
        Method::PUT,
        "/api/spending-limit",
        Some(&auth),
        json!({ "monthly_limit": "0.001" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["monthly_limit"][0]["code"], "money_precision");
}

#[tokio::test]
async fn test_expense_amount_out_of_range_is_bad_request() {
    let (app, state) = create_test_app();
    let auth = bearer(&state);
    let request = json_request(
        Method::POST,
        "/api/expenses",
        Some(&auth),
        json!({
            "vehicle_id": Uuid::new_v4(),
            "date": "2024-05-02",
            "category": "fuel",
            "amount": "10000000000000"
        }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["amount"][0]["code"], "money_range");
}
