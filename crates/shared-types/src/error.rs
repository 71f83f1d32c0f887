use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Shown when a failed call carries no readable `AppError` at all.
pub const UNREACHABLE_MESSAGE: &str = "Could not reach Staffdesk. Check your connection and try again.";

/// Failure categories shared by the REST API, server functions and the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    /// Employee (or user) id does not exist.
    NotFound,
    /// Malformed input that never reached validation, e.g. a bad UUID.
    BadRequest,
    /// Field-level problems; see `field_errors`.
    ValidationError,
    /// Unique email collision.
    Conflict,
    DatabaseError,
    /// Missing, expired or invalid session.
    Unauthorized,
    /// Signed in, but the role is too low for the action.
    Forbidden,
    InternalError,
}

impl AppErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::BadRequest => "BadRequest",
            Self::ValidationError => "ValidationError",
            Self::Conflict => "Conflict",
            Self::DatabaseError => "DatabaseError",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::InternalError => "InternalError",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::ValidationError => 422,
            Self::Conflict => 409,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::DatabaseError | Self::InternalError => 500,
        }
    }

    /// Dashboard text for an error that arrived without a message.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::NotFound => "That employee record no longer exists.",
            Self::BadRequest => "Staffdesk could not read that request.",
            Self::ValidationError => "Some fields need attention.",
            Self::Conflict => "Another employee already uses those details.",
            Self::DatabaseError => "The employee directory is unavailable right now.",
            Self::Unauthorized => "Sign in to continue.",
            Self::Forbidden => "Your role cannot change employee records.",
            Self::InternalError => "Staffdesk hit an unexpected error.",
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body returned by every endpoint and carried inside `ServerFnError`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// Form field name to message, for inline display next to inputs.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::ValidationError, message)
        }
    }

    /// Validation error for a single offending field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(AppErrorKind::ValidationError, message.clone()).with_field_error(field, message)
    }

    /// Attach a per-field message while keeping the error kind.
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors.insert(field.into(), message.into());
        self
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DatabaseError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Recover the `AppError` from a server function failure on the client.
    ///
    /// `ServerFnError::to_string()` wraps the JSON body in prose, e.g.
    /// `error running server function: {"kind":"NotFound",...} (details: None)`,
    /// so the outermost `{...}` span is parsed when the whole string is not JSON.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Per-field messages for the employee and login forms; empty when the
    /// failure was not a field-level one.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Text for a toast or form banner.
    pub fn friendly_message(error_string: &str) -> String {
        match Self::from_server_error(error_string) {
            Some(err) if err.message.trim().is_empty() => err.kind.fallback_message().to_string(),
            Some(err) => err.message,
            None => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                Some((field.to_string(), msg))
            })
            .collect();
        AppError::validation("Please correct the highlighted fields", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.kind.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}
