//! Full-page error screen.

use askama::Template;
use askama_web::WebTemplate;

/// Template for the "An Error Occurred!" screen.
///
/// Rendered by [`crate::error::AppError`]; `message` is shown under the
/// heading when present.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: Option<String>,
}
