//! Public profile page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::error::{ApiError, AppError};
use crate::render::{SiteView, render_site};
use crate::state::AppState;
use crate::utils::slug::is_reserved;
use crate::web::middleware::session::ApiCredentials;

/// Template for a public profile.
///
/// Renders `templates/site.html`, which includes `partials/site.html`.
#[derive(Template, WebTemplate)]
#[template(path = "site.html")]
pub struct SiteTemplate {
    pub site: SiteView,
}

/// Renders the profile published at `slug`.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Errors
///
/// - [`AppError::SiteNotFound`] when no site claims the slug, or the slug is
///   reserved (`/me` would otherwise show the visitor their own site)
/// - [`AppError::Unknown`] for any other API failure
pub async fn site_handler(
    State(st): State<AppState>,
    Path(slug): Path<String>,
    ApiCredentials(credentials): ApiCredentials,
) -> Result<SiteTemplate, AppError> {
    if is_reserved(&slug) {
        return Err(AppError::SiteNotFound { slug });
    }

    match st.site_service.public_site(&credentials, &slug).await {
        Ok(site) => Ok(SiteTemplate {
            site: render_site(&site),
        }),
        Err(ApiError::NotFound) => Err(AppError::SiteNotFound { slug }),
        Err(_) => Err(AppError::Unknown),
    }
}
