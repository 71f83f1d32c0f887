use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, UserRole};

use super::jwt::Claims;

pub const ROLE_VIEWER: u8 = 0;
pub const ROLE_MANAGER: u8 = 1;
pub const ROLE_ADMIN: u8 = 2;

/// Map a `RoleRequired` const parameter to its role.
pub const fn role_for(code: u8) -> UserRole {
    match code {
        ROLE_MANAGER => UserRole::Manager,
        ROLE_ADMIN => UserRole::Admin,
        _ => UserRole::Viewer,
    }
}

/// 403 unless the claims' role satisfies `required`.
pub fn ensure_role(claims: &Claims, required: UserRole) -> Result<(), AppError> {
    if claims.user_role().satisfies(&required) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "{} role or higher required",
            required.display_name()
        )))
    }
}

/// Extractor that requires authentication. Returns 401 if no valid token.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Extractor that optionally extracts auth claims. Never fails.
pub struct MaybeAuth(pub Option<Claims>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(parts.extensions.get::<Claims>().cloned()))
    }
}

/// Extractor that requires authentication and a minimum role
/// (`ROLE_VIEWER`, `ROLE_MANAGER` or `ROLE_ADMIN`).
/// Returns 401 if unauthenticated, 403 if the role is insufficient.
pub struct RoleRequired<const ROLE: u8>(pub Claims);

impl<const ROLE: u8, S: Send + Sync> FromRequestParts<S> for RoleRequired<ROLE> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthRequired(claims) = AuthRequired::from_request_parts(parts, state).await?;
        ensure_role(&claims, role_for(ROLE))?;
        Ok(RoleRequired(claims))
    }
}

/// Writes to employee records.
pub type ManagerRequired = RoleRequired<ROLE_MANAGER>;
