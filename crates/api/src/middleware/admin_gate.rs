//! Cookie-presence gate for the admin area.
//!
//! This is NOT authentication: the cookie's value is never checked, only
//! whether it exists. It keeps casual visitors out of the admin pages and
//! nothing more. The JSON API under `/api` is not gated.

use axum::extract::Request;
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

/// Path prefix that requires a session cookie.
pub const ADMIN_PREFIX: &str = "/admin";

/// Name of the cookie whose presence unlocks the admin area.
pub const SESSION_COOKIE: &str = "admin_session";

/// Where unauthenticated admin requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the original path back through login.
pub const REDIRECT_PARAM: &str = "redirect";

/// `/admin` itself or anything below it; `/administrator` does not count.
pub fn is_admin_path(path: &str) -> bool {
    path.strip_prefix(ADMIN_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Whether any `Cookie` header carries [`SESSION_COOKIE`].
pub fn has_session_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('=').map(|(name, _)| name.trim()))
        .any(|name| name == SESSION_COOKIE)
}

/// `/login?redirect=<target>` with the target percent-encoded.
pub fn login_redirect_url(target: &str) -> String {
    format!(
        "{LOGIN_PATH}?{REDIRECT_PARAM}={}",
        urlencoding::encode(target)
    )
}

/// Only same-site absolute paths are honoured as post-login destinations.
pub fn safe_redirect_target(target: Option<&str>) -> &str {
    match target {
        Some(t) if t.starts_with('/') && !t.starts_with("//") && !t.contains('\\') => t,
        _ => ADMIN_PREFIX,
    }
}

/// Redirect `/admin*` requests that carry no session cookie.
pub async fn admin_gate(request: Request, next: Next) -> Response {
    let uri = request.uri();

    if is_admin_path(uri.path()) && !has_session_cookie(request.headers()) {
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        tracing::debug!(path = %uri.path(), "Admin request without session, redirecting to login");
        return Redirect::to(&login_redirect_url(target)).into_response();
    }

    next.run(request).await
}
