use shared_types::{
    normalize_pagination, AppError, CreateEmployeeRequest, Employee, EmployeeListParams,
    EmployeeResponse, EmployeeStatus, PaginatedResponse, UpdateEmployeeRequest,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const COLUMNS: &str = "id, first_name, last_name, email, phone, job_title, department, \
                       status, hire_date, created_at, updated_at";

/// ILIKE pattern for free-text search, with LIKE wildcards escaped.
pub fn search_pattern(query: &str) -> String {
    let escaped = query
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Blank phone numbers are stored as NULL.
fn normalize_phone(phone: Option<&str>) -> Option<&str> {
    phone.map(str::trim).filter(|p| !p.is_empty())
}

/// Page through employees ordered by name. Returns the page and the total
/// number of matches.
#[tracing::instrument(skip(pool))]
pub async fn list(
    pool: &Pool<Postgres>,
    search: Option<&str>,
    status: Option<EmployeeStatus>,
    page: i64,
    limit: i64,
) -> Result<(Vec<Employee>, i64), AppError> {
    let offset = (page - 1).saturating_mul(limit);
    let pattern = search.map(search_pattern);
    let status = status.map(|s| s.as_str());

    let filter = r#"
        WHERE ($1::TEXT IS NULL
               OR first_name ILIKE $1
               OR last_name ILIKE $1
               OR (first_name || ' ' || last_name) ILIKE $1
               OR email ILIKE $1
               OR department ILIKE $1
               OR job_title ILIKE $1)
          AND ($2::TEXT IS NULL OR status = $2)
    "#;

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM employees {filter}"))
        .bind(&pattern)
        .bind(status)
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employees {filter} \
         ORDER BY last_name, first_name, id LIMIT $3 OFFSET $4"
    ))
    .bind(&pattern)
    .bind(status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}

/// One page of the listing in API shape, with pagination normalized.
pub async fn list_page(
    pool: &Pool<Postgres>,
    params: &EmployeeListParams,
) -> Result<PaginatedResponse<EmployeeResponse>, AppError> {
    let (page, limit) = normalize_pagination(params.page, params.limit);
    let (rows, total) = list(pool, params.search_text(), params.status, page, limit).await?;
    Ok(PaginatedResponse::new(rows, page, limit, total).map(EmployeeResponse::from))
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Employee>, AppError> {
    sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Like `find_by_id`, but a missing row is a 404.
pub async fn get(pool: &Pool<Postgres>, id: Uuid) -> Result<Employee, AppError> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))
}

/// Insert a new employee. Duplicate emails surface as a Conflict.
#[tracing::instrument(skip(pool, req), fields(email = %req.email))]
pub async fn create(pool: &Pool<Postgres>, req: &CreateEmployeeRequest) -> Result<Employee, AppError> {
    sqlx::query_as::<_, Employee>(&format!(
        r#"
        INSERT INTO employees
            (first_name, last_name, email, phone, job_title, department, status, hire_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(req.first_name.trim())
    .bind(req.last_name.trim())
    .bind(req.email.trim())
    .bind(normalize_phone(req.phone.as_deref()))
    .bind(req.job_title.trim())
    .bind(req.department.trim())
    .bind(req.status.as_str())
    .bind(req.hire_date)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Apply a partial update. Absent fields keep their value; an empty phone
/// clears it. Returns None when the employee does not exist.
#[tracing::instrument(skip(pool, req))]
pub async fn update(
    pool: &Pool<Postgres>,
    id: Uuid,
    req: &UpdateEmployeeRequest,
) -> Result<Option<Employee>, AppError> {
    let phone = req.phone.as_deref().map(str::trim);

    sqlx::query_as::<_, Employee>(&format!(
        r#"
        UPDATE employees SET
            first_name = COALESCE($2, first_name),
            last_name  = COALESCE($3, last_name),
            email      = COALESCE($4, email),
            phone      = CASE WHEN $5::TEXT IS NULL THEN phone ELSE NULLIF($5, '') END,
            job_title  = COALESCE($6, job_title),
            department = COALESCE($7, department),
            status     = COALESCE($8, status),
            hire_date  = COALESCE($9, hire_date),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(req.first_name.as_deref().map(str::trim))
    .bind(req.last_name.as_deref().map(str::trim))
    .bind(req.email.as_deref().map(str::trim))
    .bind(phone)
    .bind(req.job_title.as_deref().map(str::trim))
    .bind(req.department.as_deref().map(str::trim))
    .bind(req.status.map(|s| s.as_str()))
    .bind(req.hire_date)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Delete an employee. Returns true if a row was removed.
#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
