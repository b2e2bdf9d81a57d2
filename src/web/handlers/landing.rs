//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/landing.html` with the product tagline and a
/// "Continue with Discord" button.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub login_url: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler(State(st): State<AppState>) -> impl IntoResponse {
    LandingTemplate {
        login_url: st.settings.login_url.clone(),
    }
}
