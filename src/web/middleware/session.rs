//! Editor session cookie and API credential extraction.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::COOKIE, request::Parts},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::domain::repositories::Credentials;
use crate::state::AppState;
use crate::utils::cookies::{find_cookie, without_cookie};

/// Name of the cookie carrying the editor session id.
pub const SESSION_COOKIE: &str = "editor_session";

/// Id of the caller's live editor session, inserted by [`layer`].
#[derive(Debug, Clone)]
pub struct EditorSessionId(pub String);

/// Raw `editor_session` cookie value, if any.
#[derive(Debug, Clone)]
pub struct SessionCookie(pub Option<String>);

/// Credentials forwarded to the profile API: the browser's cookies minus
/// the editor session cookie.
#[derive(Debug, Clone)]
pub struct ApiCredentials(pub Credentials);

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(COOKIE).and_then(|value| value.to_str().ok())
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    cookie_header(headers)
        .and_then(|header| find_cookie(header, SESSION_COOKIE))
        .map(str::to_string)
}

impl<S: Send + Sync> FromRequestParts<S> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionCookie(session_cookie(&parts.headers)))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ApiCredentials {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let credentials = cookie_header(&parts.headers)
            .and_then(|header| without_cookie(header, SESSION_COOKIE))
            .map(Credentials::from_cookie)
            .unwrap_or_else(Credentials::anonymous);

        Ok(ApiCredentials(credentials))
    }
}

/// `Set-Cookie` value issuing the editor session.
pub fn issue_cookie(id: &str, secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value expiring the editor session.
pub fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Requires a live editor session for dashboard actions.
///
/// # Flow
///
/// 1. Extract the `editor_session` cookie
/// 2. Look the session up in [`crate::application::services::EditorService`]
/// 3. On success, insert [`EditorSessionId`] into request extensions and continue
/// 4. Otherwise redirect to `/dashboard`, which opens a fresh session
///
/// # Errors
///
/// Returns `Redirect` to `/dashboard` if the cookie is missing or the
/// session expired.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let id = session_cookie(req.headers());

    match id {
        Some(id) if st.editor_service.exists(&id).await => {
            req.extensions_mut().insert(EditorSessionId(id));
            Ok(next.run(req).await)
        }
        _ => Err(Redirect::to("/dashboard")),
    }
}
