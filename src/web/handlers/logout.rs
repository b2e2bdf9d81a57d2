//! Logout handler.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect};

use crate::state::AppState;
use crate::web::middleware::session::{SessionCookie, clear_cookie};

/// Discards the editor session and returns to the landing page.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(
    State(st): State<AppState>,
    SessionCookie(cookie): SessionCookie,
) -> impl IntoResponse {
    if let Some(id) = cookie
        && st.editor_service.close(&id).await
    {
        tracing::info!("Editor session closed on logout");
    }

    ([(SET_COOKIE, clear_cookie())], Redirect::to("/"))
}
