use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use server::repo::employee as repo;
use shared_types::{
    AppErrorKind, CreateEmployeeRequest, EmployeeListParams, EmployeeStatus, UpdateEmployeeRequest,
};

use crate::common;

fn request(first: &str, last: &str) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}.{}@staffdesk.test", first.to_lowercase(), last.to_lowercase()),
        phone: Some(" 555-0199 ".into()),
        job_title: "Analyst".into(),
        department: "Finance".into(),
        status: EmployeeStatus::Active,
        hire_date: NaiveDate::from_ymd_opt(2023, 9, 18).unwrap(),
    }
}

#[tokio::test]
async fn test_repo_create_trims_fields() {
    let Some(app) = common::test_app().await else { return };

    let mut req = request("Alan", "Turing");
    req.first_name = "  Alan ".into();
    let created = repo::create(&app.pool, &req).await.unwrap();

    assert_eq!(created.first_name, "Alan");
    assert_eq!(created.phone.as_deref(), Some("555-0199"));
    assert_eq!(created.status, "active");
}

#[tokio::test]
async fn test_repo_update_missing_returns_none() {
    let Some(app) = common::test_app().await else { return };

    let patch = UpdateEmployeeRequest {
        department: Some("Ops".into()),
        ..Default::default()
    };
    let result = repo::update(&app.pool, uuid::Uuid::new_v4(), &patch).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_repo_get_missing_is_not_found() {
    let Some(app) = common::test_app().await else { return };

    let err = repo::get(&app.pool, uuid::Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_repo_list_page_clamps_pagination() {
    let Some(app) = common::test_app().await else { return };
    for (first, last) in [("Alan", "Turing"), ("Edsger", "Dijkstra"), ("Barbara", "Liskov")] {
        repo::create(&app.pool, &request(first, last)).await.unwrap();
    }

    let params = EmployeeListParams {
        page: Some(0),
        limit: Some(0),
        ..Default::default()
    };
    let page = repo::list_page(&app.pool, &params).await.unwrap();

    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.limit, 1);
    assert_eq!(page.meta.total, 3);
    assert_eq!(page.data[0].last_name, "Dijkstra");
}

#[tokio::test]
async fn test_repo_delete_reports_whether_a_row_was_removed() {
    let Some(app) = common::test_app().await else { return };
    let created = repo::create(&app.pool, &request("Alan", "Turing")).await.unwrap();

    assert!(repo::delete(&app.pool, created.id).await.unwrap());
    assert!(!repo::delete(&app.pool, created.id).await.unwrap());
}
