use dioxus::prelude::*;
use shared_types::{
    CreateEmployeeRequest, EmployeeListParams, EmployeeResponse, PaginatedResponse,
    UpdateEmployeeRequest,
};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{parse_uuid, AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

#[server]
pub async fn list_employees(
    params: EmployeeListParams,
) -> Result<PaginatedResponse<EmployeeResponse>, ServerFnError> {
    use crate::repo::employee as repo;

    require_auth()?;
    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    repo::list_page(db, &params)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[server]
pub async fn get_employee(id: String) -> Result<EmployeeResponse, ServerFnError> {
    use crate::repo::employee as repo;

    require_auth()?;
    let id = parse_uuid(&id).map_err(|e| e.into_server_fn_error())?;
    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    repo::get(db, id)
        .await
        .map(EmployeeResponse::from)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn create_employee(req: CreateEmployeeRequest) -> Result<EmployeeResponse, ServerFnError> {
    use crate::repo::employee as repo;
    use shared_types::UserRole;

    let claims = require_role(UserRole::Manager)?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    let employee = repo::create(db, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(user_id = claims.sub, employee_id = %employee.id, "employee created");
    Ok(employee.into())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn update_employee(
    id: String,
    req: UpdateEmployeeRequest,
) -> Result<EmployeeResponse, ServerFnError> {
    use crate::repo::employee as repo;
    use shared_types::{AppError, UserRole};

    require_role(UserRole::Manager)?;
    let id = parse_uuid(&id).map_err(|e| e.into_server_fn_error())?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    if req.is_empty() {
        return repo::get(db, id)
            .await
            .map(EmployeeResponse::from)
            .map_err(|e| e.into_server_fn_error());
    }

    repo::update(db, id, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .map(EmployeeResponse::from)
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")).into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_employee(id: String) -> Result<(), ServerFnError> {
    use crate::repo::employee as repo;
    use shared_types::{AppError, UserRole};

    let claims = require_role(UserRole::Manager)?;
    let id = parse_uuid(&id).map_err(|e| e.into_server_fn_error())?;
    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;

    if repo::delete(db, id).await.map_err(|e| e.into_server_fn_error())? {
        tracing::info!(user_id = claims.sub, employee_id = %id, "employee deleted");
        Ok(())
    } else {
        Err(AppError::not_found(format!("Employee {id} not found")).into_server_fn_error())
    }
}
