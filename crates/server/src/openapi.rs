use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AuthResponse, AuthUser, CreateEmployeeRequest, EmployeeResponse,
    EmployeeStatus, LoginRequest, PaginationMeta, UpdateEmployeeRequest,
    UserRole,
};
use sqlx::{Pool, Postgres};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

/// Registers the `bearer_auth` scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    info(title = "Staffdesk API", description = "Employee administration"),
    paths(
        health::health_check,
        rest::auth::login,
        rest::auth::logout,
        rest::auth::me,
        rest::employee::list_employees,
        rest::employee::get_employee,
        rest::employee::create_employee,
        rest::employee::update_employee,
        rest::employee::delete_employee,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        AuthResponse,
        AuthUser,
        LoginRequest,
        UserRole,
        EmployeeResponse,
        EmployeeStatus,
        CreateEmployeeRequest,
        UpdateEmployeeRequest,
        PaginationMeta,
        health::HealthResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "employees", description = "Employee records"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
///
/// Auth and request-id layers are applied by the caller around the whole app.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
