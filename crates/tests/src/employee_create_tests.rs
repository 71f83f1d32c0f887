use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::UserRole;

use crate::common;

#[tokio::test]
async fn test_create_employee_success() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Manager);

    let body = common::employee_json(1);
    let (status, response) =
        common::post_json(&app.router, "/api/employees", &body.to_string(), Some(&token)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(uuid::Uuid::parse_str(response["id"].as_str().unwrap()).is_ok());
    assert_eq!(response["first_name"], "Test1");
    assert_eq!(response["email"], "employee1@staffdesk.test");
    assert_eq!(response["status"], "active");
    assert_eq!(response["hire_date"], "2022-05-01");
}

#[tokio::test]
async fn test_create_employee_admin_allowed() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Admin);

    let body = common::employee_json(2);
    let (status, _) =
        common::post_json(&app.router, "/api/employees", &body.to_string(), Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_employee_viewer_forbidden() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Viewer);

    let body = common::employee_json(3);
    let (status, _) =
        common::post_json(&app.router, "/api/employees", &body.to_string(), Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_employee_duplicate_email_conflict() {
    let Some(app) = common::test_app().await else { return };
    common::create_employee(&app, &common::employee_json(4)).await;

    let mut dup = common::employee_json(5);
    dup["email"] = serde_json::json!("EMPLOYEE4@staffdesk.test");
    let token = app.token(UserRole::Manager);
    let (status, response) =
        common::post_json(&app.router, "/api/employees", &dup.to_string(), Some(&token)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["field_errors"]["email"], "This email is already in use");
}

#[tokio::test]
async fn test_create_employee_validation_errors() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Manager);

    let body = serde_json::json!({
        "first_name": "",
        "last_name": "Employee",
        "email": "not-an-email",
        "job_title": "Analyst",
        "department": "Finance",
        "hire_date": "2022-05-01"
    });
    let (status, response) =
        common::post_json(&app.router, "/api/employees", &body.to_string(), Some(&token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["kind"], "ValidationError");
    assert!(response["field_errors"].get("first_name").is_some());
    assert!(response["field_errors"].get("email").is_some());
}

#[tokio::test]
async fn test_create_employee_blank_phone_is_stored_as_null() {
    let Some(app) = common::test_app().await else { return };

    let mut body = common::employee_json(6);
    body["phone"] = serde_json::json!("   ");
    let id = common::create_employee(&app, &body).await;

    let (phone,): (Option<String>,) =
        sqlx::query_as("SELECT phone FROM employees WHERE id = $1::UUID")
            .bind(&id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(phone, None);
}

#[tokio::test]
async fn test_create_employee_whitespace_only_fields_rejected() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Manager);

    let mut body = common::employee_json(7);
    body["first_name"] = serde_json::json!("   ");
    body["job_title"] = serde_json::json!("  ");
    body["department"] = serde_json::json!("\t");
    let (status, response) =
        common::post_json(&app.router, "/api/employees", &body.to_string(), Some(&token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["field_errors"]["first_name"], "First name is required");
    assert_eq!(response["field_errors"]["job_title"], "Job title is required");
    assert_eq!(response["field_errors"]["department"], "Department is required");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
