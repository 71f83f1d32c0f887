use shared_types::{AppError, AuthUser, UserRole};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Dashboard account row. Accounts are seeded by operators.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
}

impl UserRow {
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }

    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            role: self.role(),
        }
    }
}

/// Case-insensitive lookup by email.
pub async fn find_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<UserRow>, AppError> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, email, display_name, password_hash, role
        FROM users
        WHERE lower(email) = lower($1)
        "#,
    )
    .bind(email.trim())
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<UserRow>, AppError> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, email, display_name, password_hash, role
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Verify credentials; every failure reads as the same 401.
pub async fn authenticate(
    pool: &Pool<Postgres>,
    email: &str,
    password: &str,
) -> Result<UserRow, AppError> {
    let user = find_by_email(pool, email)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    if !crate::auth::password::verify_password(password, &user.password_hash)? {
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    Ok(user)
}
