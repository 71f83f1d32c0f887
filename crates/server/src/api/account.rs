use dioxus::prelude::*;
use shared_types::AuthUser;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Login with email and password. Sets the HTTP-only auth cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use crate::repo::user as users;
    use shared_types::LoginRequest;

    let req = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;
    let user = users::authenticate(db, &req.email, &req.password)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    let access_token = jwt::create_access_token(user.id, &user.email, user.role())
        .map_err(|e| e.into_server_fn_error())?;
    cookies::schedule_auth_cookie(&access_token);

    tracing::info!(user_id = user.id, "user logged in");
    Ok(user.to_auth_user())
}

/// Clear the auth cookie. Access tokens are stateless, so nothing is revoked.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}

/// The signed-in user, or None for anonymous visitors.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    match require_auth() {
        Ok(claims) => fetch_auth_user(claims.sub).await,
        Err(_) => Ok(None),
    }
}
