use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Convert a sqlx::Error into an AppError.
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            unique_violation_error(db_err.constraint().unwrap_or_default(), db_err.message())
        }
        _ => {
            tracing::error!(error = %err, "database error");
            AppError::database(err.to_string())
        }
    }
}

/// Map a unique-constraint failure to a conflict naming the offending field.
fn unique_violation_error(constraint: &str, detail: &str) -> AppError {
    if constraint.contains("email") || detail.contains("email") {
        AppError::conflict("An employee with this email already exists")
            .with_field_error("email", "This email is already in use")
    } else {
        AppError::conflict("A record with this value already exists")
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on sqlx::Error.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Validate request DTOs before they reach a repository.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

/// Parse a path id as a UUID, rejecting malformed input with 400.
pub fn parse_uuid(id: &str) -> Result<uuid::Uuid, AppError> {
    uuid::Uuid::parse_str(id.trim()).map_err(|_| AppError::bad_request(format!("Invalid id: {id}")))
}
