use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

pub const ACCESS_COOKIE: &str = "staffdesk_access";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn to_header(cookie: Cookie<'_>) -> Option<HeaderValue> {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "dropping cookie with invalid header characters");
            None
        }
    }
}

/// Set-Cookie value for the access token.
pub fn build_access_cookie(token: &str, max_age_minutes: i64) -> Option<HeaderValue> {
    let cookie = Cookie::build((ACCESS_COOKIE, token.to_string()))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_minutes * 60))
        .secure(cookie_secure())
        .build();
    to_header(cookie)
}

/// Set-Cookie value that expires the access cookie immediately.
pub fn build_clear_cookie() -> Option<HeaderValue> {
    let cookie = Cookie::build((ACCESS_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();
    to_header(cookie)
}

/// Extract the access token from the cookie (preferred) or a Bearer header.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

pub fn set_auth_cookie(headers: &mut HeaderMap, access_token: &str) {
    if let Some(value) = build_access_cookie(access_token, jwt::access_token_expiry_minutes()) {
        headers.append(header::SET_COOKIE, value);
    }
}

pub fn clear_auth_cookie(headers: &mut HeaderMap) {
    if let Some(value) = build_clear_cookie() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Cookie change requested by a server function, applied by the auth middleware.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set { access_token: String },
    Clear,
}

/// Per-request slot that server functions write and the middleware drains.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut guard| guard.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Schedule the auth cookie to be set on the current server-function response.
pub fn schedule_auth_cookie(access_token: &str) {
    schedule(PendingCookieAction::Set {
        access_token: access_token.to_string(),
    });
}

/// Schedule the auth cookie to be cleared on the current server-function response.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}
