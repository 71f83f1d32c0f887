use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, AuthResponse, AuthUser, LoginRequest};

use crate::auth::cookies;
use crate::auth::extractors::AuthRequired;
use crate::auth::jwt;
use crate::error_convert::ValidateRequest;
use crate::repo::user as users;

// ---------------------------------------------------------------------------
// POST /api/auth/login
// ---------------------------------------------------------------------------

/// Exchange credentials for an access token. The token is returned in the
/// body for API clients and set as an HTTP-only cookie for browsers.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(pool, payload), fields(email = %payload.email))]
pub async fn login(
    State(pool): State<Pool<Postgres>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate_request()?;

    let user = users::authenticate(&pool, &payload.email, &payload.password).await?;
    let access_token = jwt::create_access_token(user.id, &user.email, user.role())?;

    let mut response = Json(AuthResponse {
        user: user.to_auth_user(),
        access_token: access_token.clone(),
    })
    .into_response();
    cookies::set_auth_cookie(response.headers_mut(), &access_token);

    tracing::info!(user_id = user.id, "user logged in");
    Ok(response)
}

// ---------------------------------------------------------------------------
// POST /api/auth/logout
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 204, description = "Logged out")),
    tag = "auth"
)]
pub async fn logout() -> impl IntoResponse {
    let mut response = StatusCode::NO_CONTENT.into_response();
    cookies::clear_auth_cookie(response.headers_mut());
    response
}

// ---------------------------------------------------------------------------
// GET /api/auth/me
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = AuthUser),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    tag = "auth",
    security(("bearer_auth" = []))
)]
pub async fn me(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
) -> Result<Json<AuthUser>, AppError> {
    let user = users::find_by_id(&pool, claims.sub)
        .await?
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;
    Ok(Json(user.to_auth_user()))
}
