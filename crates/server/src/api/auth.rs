// Server-only auth helpers shared across the api/* server functions.

use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, UserRole};

use crate::auth::{cookies, extractors, jwt};
use crate::db::get_db;
use crate::error_convert::AppErrorExt;
use crate::repo::user as users;

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
pub(crate) fn require_auth() -> Result<jwt::Claims, ServerFnError> {
    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    let token = cookies::extract_access_token(&parts.headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Require an authenticated caller whose role satisfies `required`.
pub(crate) fn require_role(required: UserRole) -> Result<jwt::Claims, ServerFnError> {
    let claims = require_auth()?;
    extractors::ensure_role(&claims, required).map_err(|e| e.into_server_fn_error())?;
    Ok(claims)
}

/// Load the signed-in user. Returns None and clears the cookie if the
/// account referenced by the token no longer exists.
pub(crate) async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    let user = users::find_by_id(db, user_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    match user {
        Some(u) => Ok(Some(u.to_auth_user())),
        None => {
            cookies::schedule_clear_cookie();
            tracing::warn!(user_id, "token references a missing user, clearing cookie");
            Ok(None)
        }
    }
}
