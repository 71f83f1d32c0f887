use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::UserRole;

use crate::common;

#[tokio::test]
async fn test_delete_employee_success() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(1)).await;
    let token = app.token(UserRole::Manager);

    let (status, _) =
        common::delete(&app.router, &format!("/api/employees/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) =
        common::get(&app.router, &format!("/api/employees/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_employee_twice_is_not_found() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(2)).await;
    let token = app.token(UserRole::Admin);

    let uri = format!("/api/employees/{id}");
    let (first, _) = common::delete(&app.router, &uri, Some(&token)).await;
    let (second, _) = common::delete(&app.router, &uri, Some(&token)).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_employee_viewer_forbidden() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(3)).await;
    let token = app.token(UserRole::Viewer);

    let (status, _) =
        common::delete(&app.router, &format!("/api/employees/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_delete_employee_bad_id() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Manager);

    let (status, _) = common::delete(&app.router, "/api/employees/not-a-uuid", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
