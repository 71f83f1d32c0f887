use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Employee row from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: String,
    pub department: String,
    pub status: String,
    pub hire_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employment status values matching the DB CHECK constraint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
}

/// All statuses in display order (used by filters and form selects).
pub const ALL_EMPLOYEE_STATUSES: &[EmployeeStatus] = &[
    EmployeeStatus::Active,
    EmployeeStatus::OnLeave,
    EmployeeStatus::Terminated,
];

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OnLeave => "on_leave",
            Self::Terminated => "terminated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Terminated => "Terminated",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "on_leave" => Some(Self::OnLeave),
            "terminated" => Some(Self::Terminated),
            _ => None,
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// API response shape for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub job_title: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
    pub created_at: String,
    pub updated_at: String,
}

impl EmployeeResponse {
    /// "First Last" display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id.to_string(),
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            phone: e.phone,
            job_title: e.job_title,
            department: e.department,
            status: EmployeeStatus::from_str_opt(&e.status).unwrap_or_default(),
            hire_date: e.hire_date,
            created_at: e.created_at.to_rfc3339(),
            updated_at: e.updated_at.to_rfc3339(),
        }
    }
}

/// Rejects text that is empty once surrounding whitespace is trimmed.
#[cfg(feature = "validation")]
fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Request to create a new employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateEmployeeRequest {
    #[cfg_attr(
        feature = "validation",
        validate(
            length(max = 100, message = "First name is too long"),
            custom(function = "not_blank", message = "First name is required")
        )
    )]
    pub first_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(
            length(max = 100, message = "Last name is too long"),
            custom(function = "not_blank", message = "Last name is required")
        )
    )]
    pub last_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 40, message = "Phone number is too long"))
    )]
    pub phone: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(
            length(max = 120, message = "Job title is too long"),
            custom(function = "not_blank", message = "Job title is required")
        )
    )]
    pub job_title: String,
    #[cfg_attr(
        feature = "validation",
        validate(
            length(max = 120, message = "Department is too long"),
            custom(function = "not_blank", message = "Department is required")
        )
    )]
    pub department: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
}

/// Request to update an existing employee (all fields optional for partial update).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(default)]
pub struct UpdateEmployeeRequest {
    #[cfg_attr(
        feature = "validation",
        validate(
            length(max = 100, message = "First name is too long"),
            custom(function = "not_blank", message = "First name cannot be empty")
        )
    )]
    pub first_name: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(
            length(max = 100, message = "Last name is too long"),
            custom(function = "not_blank", message = "Last name cannot be empty")
        )
    )]
    pub last_name: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 40, message = "Phone number is too long"))
    )]
    pub phone: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(
            length(max = 120, message = "Job title is too long"),
            custom(function = "not_blank", message = "Job title cannot be empty")
        )
    )]
    pub job_title: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(
            length(max = 120, message = "Department is too long"),
            custom(function = "not_blank", message = "Department cannot be empty")
        )
    )]
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub hire_date: Option<NaiveDate>,
}

impl UpdateEmployeeRequest {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Query parameters for the employee listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct EmployeeListParams {
    /// Free-text search over name, email, department and job title.
    pub q: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl EmployeeListParams {
    /// Trimmed search text, or None when blank.
    pub fn search_text(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}
