use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_access_token;

/// Permissive auth middleware.
///
/// Validates the access token (cookie or Bearer) and inserts its `Claims`
/// into request extensions, inserts a `CookieSlot` for server functions,
/// then applies whatever cookie action they scheduled to the response.
/// Never rejects; extractors and server functions decide authorization.
pub async fn auth_middleware(mut req: Request, next: Next) -> Response {
    if let Some(token) = cookies::extract_access_token(req.headers()) {
        match validate_access_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!(error = %e, "ignoring invalid access token");
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    match cookie_slot.take() {
        Some(PendingCookieAction::Set { access_token }) => {
            cookies::set_auth_cookie(response.headers_mut(), &access_token);
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_auth_cookie(response.headers_mut());
        }
        None => {}
    }

    response
}
