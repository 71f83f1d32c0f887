use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use shared_types::UserRole;

use crate::common;

#[tokio::test]
async fn test_login_returns_token_and_cookie() {
    let Some(app) = common::test_app().await else { return };

    let body = serde_json::json!({
        "email": "MANAGER@staffdesk.test",
        "password": common::TEST_PASSWORD,
    });
    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, headers, response) = common::send_with_headers(&app.router, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["user"]["email"], "manager@staffdesk.test");
    assert_eq!(response["user"]["role"], "manager");
    assert!(response["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(response["user"].get("password_hash").is_none());

    let cookie = headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("staffdesk_access="), "cookie: {cookie}");
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let Some(app) = common::test_app().await else { return };

    let body = serde_json::json!({ "email": "viewer@staffdesk.test", "password": "nope" });
    let (status, response) =
        common::post_json(&app.router, "/api/auth/login", &body.to_string(), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_email_looks_like_wrong_password() {
    let Some(app) = common::test_app().await else { return };

    let body = serde_json::json!({ "email": "ghost@staffdesk.test", "password": "whatever" });
    let (status, response) =
        common::post_json(&app.router, "/api/auth/login", &body.to_string(), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Admin);

    let (status, response) = common::get(&app.router, "/api/auth/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], app.users.admin);
    assert_eq!(response["display_name"], "Test Admin");
    assert_eq!(response["role"], "admin");
}

#[tokio::test]
async fn test_me_for_deleted_account_is_unauthorized() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Viewer);

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(app.users.viewer)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, response) = common::get(&app.router, "/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["message"], "Account no longer exists");
}
