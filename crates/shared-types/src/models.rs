use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard user role controlling access to employee records.
///
/// - `Viewer`: read-only access to the employee directory.
/// - `Manager`: can create, edit and delete employees.
/// - `Admin`: full access (superset of all roles).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Viewer,
    Manager,
    Admin,
}

impl UserRole {
    /// Parse from the stored / JWT `role` value. Unknown values default to Viewer.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "manager" => UserRole::Manager,
            "admin" => UserRole::Admin,
            _ => UserRole::Viewer,
        }
    }

    /// Lowercase string for database / JWT storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Viewer => "viewer",
            UserRole::Manager => "manager",
            UserRole::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Viewer => "Viewer",
            UserRole::Manager => "Manager",
            UserRole::Admin => "Admin",
        }
    }

    /// Returns true if this role satisfies the `required` role.
    pub fn satisfies(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Manager => matches!(required, UserRole::Manager | UserRole::Viewer),
            UserRole::Viewer => matches!(required, UserRole::Viewer),
        }
    }

    /// Whether this role may create, edit or delete employees.
    pub fn can_manage_employees(&self) -> bool {
        self.satisfies(&UserRole::Manager)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Authenticated user info (safe to send to client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub role: UserRole,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Successful login response for REST clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthResponse {
    pub user: AuthUser,
    pub access_token: String,
}

/// Read-only page context handed to every page below the app layout.
///
/// Carries the ambient request state (who is signed in, what the page is
/// called) so components receive it explicitly instead of reaching for
/// framework globals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PageProps {
    #[serde(default)]
    pub auth: Option<AuthUser>,
    #[serde(default)]
    pub title: String,
}

impl PageProps {
    pub fn new(auth: Option<AuthUser>, title: impl Into<String>) -> Self {
        Self {
            auth,
            title: title.into(),
        }
    }

    /// Effective role of the viewer; anonymous visitors are treated as Viewer.
    pub fn role(&self) -> UserRole {
        self.auth.as_ref().map(|u| u.role).unwrap_or_default()
    }

    pub fn can_manage_employees(&self) -> bool {
        self.role().can_manage_employees()
    }
}
