use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::UserRole;

use crate::common;

#[tokio::test]
async fn test_update_employee_partial() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(1)).await;
    let token = app.token(UserRole::Manager);

    let patch = serde_json::json!({ "department": "Operations", "status": "on_leave" });
    let (status, response) = common::put_json(
        &app.router,
        &format!("/api/employees/{id}"),
        &patch.to_string(),
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["department"], "Operations");
    assert_eq!(response["status"], "on_leave");
    assert_eq!(response["first_name"], "Test1");
    assert_eq!(response["phone"], "555-0100");
    assert_ne!(response["updated_at"], response["created_at"]);
}

#[tokio::test]
async fn test_update_employee_empty_phone_clears_it() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(2)).await;
    let token = app.token(UserRole::Admin);

    let patch = serde_json::json!({ "phone": "" });
    let (status, response) = common::put_json(
        &app.router,
        &format!("/api/employees/{id}"),
        &patch.to_string(),
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(response.get("phone").is_none(), "phone should be omitted: {response}");
}

#[tokio::test]
async fn test_update_employee_empty_patch_returns_current() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(3)).await;
    let token = app.token(UserRole::Manager);

    let (status, response) =
        common::put_json(&app.router, &format!("/api/employees/{id}"), "{}", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["email"], "employee3@staffdesk.test");
}

#[tokio::test]
async fn test_update_employee_viewer_forbidden() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(4)).await;
    let token = app.token(UserRole::Viewer);

    let patch = serde_json::json!({ "department": "Sales" });
    let (status, _) = common::put_json(
        &app.router,
        &format!("/api/employees/{id}"),
        &patch.to_string(),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_employee_not_found() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Manager);

    let patch = serde_json::json!({ "department": "Sales" });
    let (status, _) = common::put_json(
        &app.router,
        &format!("/api/employees/{}", uuid::Uuid::new_v4()),
        &patch.to_string(),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_employee_email_taken_conflict() {
    let Some(app) = common::test_app().await else { return };
    common::create_employee(&app, &common::employee_json(5)).await;
    let id = common::create_employee(&app, &common::employee_json(6)).await;
    let token = app.token(UserRole::Manager);

    let patch = serde_json::json!({ "email": "employee5@staffdesk.test" });
    let (status, response) = common::put_json(
        &app.router,
        &format!("/api/employees/{id}"),
        &patch.to_string(),
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(response["field_errors"].get("email").is_some());
}

#[tokio::test]
async fn test_update_employee_whitespace_only_name_rejected() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(8)).await;
    let token = app.token(UserRole::Manager);

    let patch = serde_json::json!({ "last_name": "  " });
    let (status, response) = common::put_json(
        &app.router,
        &format!("/api/employees/{id}"),
        &patch.to_string(),
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["field_errors"]["last_name"], "Last name cannot be empty");

    let (_, current) =
        common::get(&app.router, &format!("/api/employees/{id}"), Some(&token)).await;
    assert_eq!(current["last_name"], "Employee");
}
