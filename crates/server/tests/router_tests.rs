//! Router tests that never reach the database.
//!
//! Run with: `cargo test -p server --features server --test router_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{get, offline_app, post_json, token_for};
use shared_types::{AppError, AppErrorKind, UserRole};

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let app = offline_app();
    let (status, body) = get(&app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "degraded");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn employees_require_authentication() {
    let app = offline_app();
    let (status, body) = get(&app, "/api/employees", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn garbage_token_is_treated_as_anonymous() {
    let app = offline_app();
    let (status, _) = get(&app, "/api/auth/me", Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn viewer_cannot_create_employees() {
    let app = offline_app();
    let token = token_for(UserRole::Viewer);
    let json = serde_json::json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@staffdesk.test",
        "job_title": "Engineer",
        "department": "Navy",
        "hire_date": "2020-01-02"
    });

    let (status, body) = post_json(&app, "/api/employees", &json.to_string(), Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[tokio::test]
async fn manager_gets_validation_errors_before_any_query() {
    let app = offline_app();
    let token = token_for(UserRole::Manager);
    let json = serde_json::json!({
        "first_name": "",
        "last_name": "Hopper",
        "email": "not-an-email",
        "job_title": "Engineer",
        "department": "Navy",
        "hire_date": "2020-01-02"
    });

    let (status, body) = post_json(&app, "/api/employees", &json.to_string(), Some(&token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert!(err.field_errors.contains_key("first_name"));
    assert!(err.field_errors.contains_key("email"));
}

#[tokio::test]
async fn whitespace_only_names_are_validation_errors() {
    let app = offline_app();
    let token = token_for(UserRole::Manager);
    let json = serde_json::json!({
        "first_name": "   ",
        "last_name": "Hopper",
        "email": "grace@staffdesk.test",
        "job_title": "  ",
        "department": "\t",
        "hire_date": "2020-01-02"
    });

    let (status, body) = post_json(&app, "/api/employees", &json.to_string(), Some(&token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.field_errors["first_name"], "First name is required");
    assert!(err.field_errors.contains_key("job_title"));
    assert!(err.field_errors.contains_key("department"));
    assert!(!err.field_errors.contains_key("last_name"));
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let app = offline_app();
    let token = token_for(UserRole::Viewer);
    let (status, _) = get(&app, "/api/employees/not-a-uuid", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_clears_cookie() {
    let app = offline_app();
    let response = {
        use tower::ServiceExt;
        app.clone()
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/api/auth/logout")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    };

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("staffdesk_access="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn docs_are_served() {
    let app = offline_app();
    let (status, body) = get(&app, "/docs", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Staffdesk API") || body.contains("scalar"));
}
