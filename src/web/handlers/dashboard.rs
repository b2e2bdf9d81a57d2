//! Dashboard editor page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::error::{AppError, EditorError};
use crate::render::site_view::PRODUCT_URL;
use crate::render::{EditorView, SiteView, render_editor};
use crate::state::AppState;
use crate::web::middleware::session::{ApiCredentials, SessionCookie, issue_cookie};

/// Template for the editor.
///
/// Renders `templates/dashboard.html`:
/// - One form section per field (slug, name, bio, avatar, banner, kinks, links)
/// - Live preview of the working copy via `partials/site.html`
/// - Change-saver bar while there are unsaved changes
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub view: EditorView,
    /// The preview; named `site` for the shared profile partial.
    pub site: SiteView,
    pub public_base: &'static str,
}

/// Kink search query carried through dashboard redirects.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub q: String,
}

/// Where an action sends the browser afterwards.
///
/// Keeps a non-empty kink search query so the result list survives the
/// round trip.
pub fn back_to_dashboard(query: &str) -> Redirect {
    if query.is_empty() {
        return Redirect::to("/dashboard");
    }

    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    Redirect::to(&format!("/dashboard?{encoded}"))
}

/// Renders the editor, opening a session on first visit.
///
/// # Endpoint
///
/// `GET /dashboard?q={search}`
///
/// # Flow
///
/// 1. Resume the `editor_session` cookie's session or open a new one
/// 2. Fetch the user's site: loads a new session, re-checks the login of a
///    resumed one, and resets the session if the account changed
/// 3. Fetch the kink catalog unless already present; failure becomes an alert
/// 4. Render the snapshot, issuing the session cookie if the session is new
///
/// # Errors
///
/// - [`AppError::Unauthorized`] (redirect to `/`) when the user isn't logged
///   in; the editor session is discarded
/// - [`AppError::LoadFailed`] for any other site load failure
pub async fn dashboard_handler(
    State(st): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    ApiCredentials(credentials): ApiCredentials,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, AppError> {
    let editor = &st.editor_service;
    let (id, created) = editor.open(cookie.as_deref()).await;

    if let Err(e) = editor.sync_site(&id, &credentials).await {
        let unauthorized = matches!(e, EditorError::Api(ref api) if api.is_unauthorized());
        // Logging out drops the session; a loaded one survives other failures.
        if unauthorized || !editor.is_loaded(&id).await {
            editor.close(&id).await;
        }
        if !unauthorized {
            tracing::warn!(error = %e, "Failed to load site into editor");
        }
        return Err(e.into());
    }

    if let Err(e) = editor.ensure_catalog(&id, &credentials).await {
        tracing::warn!(error = %e, "Failed to load kink catalog");
        editor.add_flash(&id, format!("Failed to load kinks: {e}")).await;
    }

    let snapshot = editor.snapshot(&id).await?;
    let view = render_editor(snapshot, &query.q).ok_or(AppError::Unknown)?;

    let page = DashboardTemplate {
        site: view.preview.clone(),
        view,
        public_base: PRODUCT_URL,
    };

    if created {
        let cookie = issue_cookie(&id, st.settings.secure_cookies);
        Ok(([(SET_COOKIE, cookie)], page).into_response())
    } else {
        Ok(page.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    fn location(redirect: Redirect) -> String {
        redirect
            .into_response()
            .headers()
            .get(LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_back_to_dashboard_without_query() {
        assert_eq!(location(back_to_dashboard("")), "/dashboard");
    }

    #[test]
    fn test_back_to_dashboard_encodes_query() {
        assert_eq!(
            location(back_to_dashboard("rope & wax")),
            "/dashboard?q=rope+%26+wax"
        );
    }
}
