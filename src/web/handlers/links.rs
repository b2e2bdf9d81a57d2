//! Dashboard actions on the link list.

use axum::extract::{Extension, Form, Path, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::domain::entities::{Link, LinkSource, POINTER_MAX_CHARS};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::text::truncate_chars;
use crate::web::handlers::dashboard::back_to_dashboard;
use crate::web::middleware::session::EditorSessionId;

/// Form body of `POST /dashboard/links`.
#[derive(Debug, Deserialize)]
pub struct AddLinkForm {
    pub source: LinkSource,
}

/// Form body of `POST /dashboard/links/{link_id}`.
#[derive(Debug, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub pointer: String,
}

/// Appends an empty link of the chosen source.
///
/// # Endpoint
///
/// `POST /dashboard/links`
pub async fn add_link_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    Form(form): Form<AddLinkForm>,
) -> Result<Redirect, AppError> {
    st.editor_service
        .edit(&id, |store| store.add_link(Link::blank(form.source)))
        .await?;

    Ok(back_to_dashboard(""))
}

/// Replaces a link's pointer, cut to 66 characters.
///
/// # Endpoint
///
/// `POST /dashboard/links/{link_id}`
pub async fn set_link_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    Path(link_id): Path<String>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect, AppError> {
    let pointer = truncate_chars(&form.pointer, POINTER_MAX_CHARS);

    st.editor_service
        .edit(&id, |store| {
            if let Some(link) = store.site().and_then(|site| site.link(&link_id)).cloned() {
                store.set_link(link.with_pointer(pointer));
            }
        })
        .await?;

    Ok(back_to_dashboard(""))
}

/// Removes a link from the working copy.
///
/// # Endpoint
///
/// `POST /dashboard/links/{link_id}/remove`
pub async fn remove_link_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    Path(link_id): Path<String>,
) -> Result<Redirect, AppError> {
    st.editor_service
        .edit(&id, |store| store.remove_link(&link_id))
        .await?;

    Ok(back_to_dashboard(""))
}
