use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use shared_types::UserRole;

use crate::common;

async fn seed(app: &common::TestApp) {
    let people = [
        ("Ada", "Lovelace", "Engineering", "Engineer", "active"),
        ("Grace", "Hopper", "Engineering", "Rear Admiral", "on_leave"),
        ("Katherine", "Johnson", "Flight Research", "Mathematician", "active"),
        ("Dorothy", "Vaughan", "Computing", "Supervisor", "terminated"),
        ("Mary", "Jackson", "Flight Research", "Engineer", "active"),
    ];
    for (i, (first, last, dept, title, status)) in people.into_iter().enumerate() {
        let body = serde_json::json!({
            "first_name": first,
            "last_name": last,
            "email": format!("{}@staffdesk.test", first.to_lowercase()),
            "job_title": title,
            "department": dept,
            "status": status,
            "hire_date": format!("2020-0{}-01", i + 1),
        });
        common::create_employee(app, &body).await;
    }
}

fn last_names(response: &Value) -> Vec<String> {
    response["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["last_name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_employees_sorted_by_name() {
    let Some(app) = common::test_app().await else { return };
    seed(&app).await;
    let token = app.token(UserRole::Viewer);

    let (status, response) = common::get(&app.router, "/api/employees", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        last_names(&response),
        vec!["Hopper", "Jackson", "Johnson", "Lovelace", "Vaughan"]
    );
    assert_eq!(response["meta"]["total"], 5);
    assert_eq!(response["meta"]["page"], 1);
}

#[tokio::test]
async fn test_list_employees_search_matches_department_and_full_name() {
    let Some(app) = common::test_app().await else { return };
    seed(&app).await;
    let token = app.token(UserRole::Viewer);

    let (_, by_dept) =
        common::get(&app.router, "/api/employees?q=flight", Some(&token)).await;
    assert_eq!(last_names(&by_dept), vec!["Jackson", "Johnson"]);

    let (_, by_name) =
        common::get(&app.router, "/api/employees?q=grace%20hop", Some(&token)).await;
    assert_eq!(last_names(&by_name), vec!["Hopper"]);
}

#[tokio::test]
async fn test_list_employees_search_treats_wildcards_literally() {
    let Some(app) = common::test_app().await else { return };
    seed(&app).await;
    let token = app.token(UserRole::Viewer);

    let (status, response) = common::get(&app.router, "/api/employees?q=%25", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["meta"]["total"], 0);
}

#[tokio::test]
async fn test_list_employees_status_filter() {
    let Some(app) = common::test_app().await else { return };
    seed(&app).await;
    let token = app.token(UserRole::Viewer);

    let (status, response) =
        common::get(&app.router, "/api/employees?status=active", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(last_names(&response), vec!["Jackson", "Johnson", "Lovelace"]);
}

#[tokio::test]
async fn test_list_employees_pagination() {
    let Some(app) = common::test_app().await else { return };
    seed(&app).await;
    let token = app.token(UserRole::Viewer);

    let (_, page2) =
        common::get(&app.router, "/api/employees?page=2&limit=2", Some(&token)).await;

    assert_eq!(last_names(&page2), vec!["Johnson", "Lovelace"]);
    assert_eq!(page2["meta"]["total_pages"], 3);
    assert_eq!(page2["meta"]["has_next"], true);
    assert_eq!(page2["meta"]["has_prev"], true);
}

#[tokio::test]
async fn test_list_employees_huge_page_is_empty() {
    let Some(app) = common::test_app().await else { return };
    seed(&app).await;
    let token = app.token(UserRole::Viewer);

    let (status, response) = common::get(
        &app.router,
        "/api/employees?page=9223372036854775807&limit=100",
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"], serde_json::json!([]));
    assert_eq!(response["meta"]["has_next"], false);
    assert_eq!(response["meta"]["total"], 5);
}

#[tokio::test]
async fn test_list_employees_empty() {
    let Some(app) = common::test_app().await else { return };
    let token = app.token(UserRole::Viewer);

    let (status, response) = common::get(&app.router, "/api/employees", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"], serde_json::json!([]));
    assert_eq!(response["meta"]["total_pages"], 0);
}
