use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::UserRole;

use crate::common;

#[tokio::test]
async fn test_get_employee_as_viewer() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(1)).await;
    let token = app.token(UserRole::Viewer);

    let (status, response) =
        common::get(&app.router, &format!("/api/employees/{id}"), Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], id.as_str());
    assert_eq!(response["last_name"], "Employee");
    assert_eq!(response["phone"], "555-0100");
}

#[tokio::test]
async fn test_get_employee_not_found() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Viewer);

    let missing = uuid::Uuid::new_v4();
    let (status, response) =
        common::get(&app.router, &format!("/api/employees/{missing}"), Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["kind"], "NotFound");
}

#[tokio::test]
async fn test_get_employee_requires_auth() {
    let Some(app) = common::test_app().await else { return };
    let id = common::create_employee(&app, &common::employee_json(2)).await;

    let (status, _) = common::get(&app.router, &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
