pub mod auth;
pub mod employee;

use axum::{routing::{get, post}, Router};
use crate::db::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // Employees
        .route(
            "/api/employees",
            get(employee::list_employees).post(employee::create_employee),
        )
        .route(
            "/api/employees/{id}",
            get(employee::get_employee)
                .put(employee::update_employee)
                .delete(employee::delete_employee),
        )
}
