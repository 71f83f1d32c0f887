use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{
    AppError, CreateEmployeeRequest, EmployeeListParams, EmployeeResponse, PaginatedResponse,
    UpdateEmployeeRequest,
};

use crate::auth::extractors::{AuthRequired, ManagerRequired};
use crate::error_convert::{parse_uuid, ValidateRequest};
use crate::repo::employee as repo;

// ---------------------------------------------------------------------------
// GET /api/employees
// ---------------------------------------------------------------------------

/// Search and page through employees.
#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeListParams),
    responses(
        (status = 200, description = "Page of employees", body = PaginatedResponse<EmployeeResponse>),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    tag = "employees",
    security(("bearer_auth" = []))
)]
pub async fn list_employees(
    State(pool): State<Pool<Postgres>>,
    _auth: AuthRequired,
    Query(params): Query<EmployeeListParams>,
) -> Result<Json<PaginatedResponse<EmployeeResponse>>, AppError> {
    let page = repo::list_page(&pool, &params).await?;
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GET /api/employees/{id}
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 400, description = "Invalid UUID", body = AppError),
        (status = 404, description = "Employee not found", body = AppError)
    ),
    tag = "employees",
    security(("bearer_auth" = []))
)]
pub async fn get_employee(
    State(pool): State<Pool<Postgres>>,
    _auth: AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let id = parse_uuid(&id)?;
    let employee = repo::get(&pool, id).await?;
    Ok(Json(employee.into()))
}

// ---------------------------------------------------------------------------
// POST /api/employees
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 403, description = "Manager role required", body = AppError),
        (status = 409, description = "Email already in use", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "employees",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth, body), fields(user_id = auth.0.sub))]
pub async fn create_employee(
    State(pool): State<Pool<Postgres>>,
    auth: ManagerRequired,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    body.validate_request()?;
    let employee = repo::create(&pool, &body).await?;
    tracing::info!(employee_id = %employee.id, "employee created");
    Ok((StatusCode::CREATED, Json(employee.into())))
}

// ---------------------------------------------------------------------------
// PUT /api/employees/{id}
// ---------------------------------------------------------------------------

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Invalid UUID", body = AppError),
        (status = 403, description = "Manager role required", body = AppError),
        (status = 404, description = "Employee not found", body = AppError),
        (status = 409, description = "Email already in use", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "employees",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth, body), fields(user_id = auth.0.sub))]
pub async fn update_employee(
    State(pool): State<Pool<Postgres>>,
    auth: ManagerRequired,
    Path(id): Path<String>,
    Json(body): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let id = parse_uuid(&id)?;
    body.validate_request()?;

    if body.is_empty() {
        return Ok(Json(repo::get(&pool, id).await?.into()));
    }

    let employee = repo::update(&pool, id, &body)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(employee.into()))
}

// ---------------------------------------------------------------------------
// DELETE /api/employees/{id}
// ---------------------------------------------------------------------------

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Invalid UUID", body = AppError),
        (status = 403, description = "Manager role required", body = AppError),
        (status = 404, description = "Employee not found", body = AppError)
    ),
    tag = "employees",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth), fields(user_id = auth.0.sub))]
pub async fn delete_employee(
    State(pool): State<Pool<Postgres>>,
    auth: ManagerRequired,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_uuid(&id)?;
    if repo::delete(&pool, id).await? {
        tracing::info!(employee_id = %id, "employee deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Employee {id} not found")))
    }
}
