//! Dashboard actions on the kink list.

use axum::extract::{Extension, Form, Path, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::domain::entities::{COMMENT_MAX_CHARS, MAX_RATING};
use crate::error::{AppError, EditorError};
use crate::state::AppState;
use crate::utils::text::truncate_chars;
use crate::web::handlers::dashboard::back_to_dashboard;
use crate::web::middleware::session::EditorSessionId;

/// Form body of `POST /dashboard/kinks/toggle`.
#[derive(Debug, Deserialize)]
pub struct ToggleKinkForm {
    pub kink_id: String,
    /// Search query to restore after the redirect.
    #[serde(default)]
    pub q: String,
}

/// Form body of `POST /dashboard/kinks/{kink_id}`.
#[derive(Debug, Deserialize)]
pub struct KinkForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub comment: String,
}

/// Parses a rating input; anything but an integer in 0-10 is rejected.
fn parse_rating(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|rating| (0..=i64::from(MAX_RATING)).contains(rating))
}

/// Adds a catalog kink (rated 10) or removes it if already selected.
///
/// # Endpoint
///
/// `POST /dashboard/kinks/toggle`
pub async fn toggle_kink_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    Form(form): Form<ToggleKinkForm>,
) -> Result<Redirect, AppError> {
    match st.editor_service.toggle_kink(&id, &form.kink_id).await {
        Ok(_) => {}
        Err(EditorError::NoSession) => return Err(AppError::NoSession),
        Err(e) => {
            tracing::debug!(error = %e, "Kink toggle rejected");
            st.editor_service.add_flash(&id, e.to_string()).await;
        }
    }

    Ok(back_to_dashboard(&form.q))
}

/// Updates a selected kink's rating and comment.
///
/// An invalid rating leaves the rating as it was; the comment is still
/// applied, cut to 32 characters.
///
/// # Endpoint
///
/// `POST /dashboard/kinks/{kink_id}`
pub async fn set_kink_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    Path(kink_id): Path<String>,
    Form(form): Form<KinkForm>,
) -> Result<Redirect, AppError> {
    let rating = parse_rating(&form.rating);
    let comment = Some(truncate_chars(&form.comment, COMMENT_MAX_CHARS)).filter(|c| !c.is_empty());

    st.editor_service
        .edit(&id, |store| {
            let Some(current) = store.site().and_then(|site| site.kink(&kink_id)).cloned() else {
                return;
            };

            let mut updated = current.with_comment(comment);
            if let Some(rating) = rating {
                updated = updated.with_rating(rating);
            }

            if updated != current {
                store.set_kink(updated);
            }
        })
        .await?;

    Ok(back_to_dashboard(""))
}

/// Removes a kink from the working copy.
///
/// # Endpoint
///
/// `POST /dashboard/kinks/{kink_id}/remove`
pub async fn remove_kink_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    Path(kink_id): Path<String>,
) -> Result<Redirect, AppError> {
    st.editor_service
        .edit(&id, |store| store.remove_kink(&kink_id))
        .await?;

    Ok(back_to_dashboard(""))
}
