//! Dashboard actions on scalar fields, plus undo and save.

use axum::extract::{Extension, Form, State};
use axum::response::Redirect;
use serde::Deserialize;
use url::Url;

use crate::application::services::SiteField;
use crate::domain::entities::{BIO_MAX_CHARS, NAME_MAX_CHARS};
use crate::error::{ApiError, AppError, EditorError};
use crate::state::AppState;
use crate::utils::text::truncate_chars;
use crate::web::handlers::dashboard::back_to_dashboard;
use crate::web::middleware::session::{ApiCredentials, EditorSessionId};

/// Form body of `POST /dashboard/field`.
#[derive(Debug, Deserialize)]
pub struct FieldForm {
    pub field: SiteField,
    #[serde(default)]
    pub value: String,
}

/// Normalizes a submitted value for `field`.
///
/// Name and bio are cut to their limits; media URLs treat blank as removal.
///
/// # Errors
///
/// Returns the alert text when a media URL isn't an absolute http(s) URL.
fn field_value(field: SiteField, raw: &str) -> Result<Option<String>, String> {
    match field {
        SiteField::Name => Ok(Some(truncate_chars(raw, NAME_MAX_CHARS))),
        SiteField::Bio => Ok(Some(truncate_chars(raw, BIO_MAX_CHARS))),
        SiteField::Slug => Ok(Some(raw.to_string())),
        SiteField::AvatarUrl | SiteField::BannerUrl => media_url(raw.trim()),
    }
}

fn media_url(raw: &str) -> Result<Option<String>, String> {
    if raw.is_empty() {
        return Ok(None);
    }

    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(Some(url.into()))
        }
        _ => Err(format!("Invalid image URL: {raw}")),
    }
}

/// Sets one scalar field on the working copy.
///
/// A rejected media URL leaves the field as it was and becomes an alert.
///
/// # Endpoint
///
/// `POST /dashboard/field`
pub async fn set_field_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    Form(form): Form<FieldForm>,
) -> Result<Redirect, AppError> {
    match field_value(form.field, &form.value) {
        Ok(value) => {
            st.editor_service
                .edit(&id, |store| store.set_field(form.field, value))
                .await?;
        }
        Err(message) => st.editor_service.add_flash(&id, message).await,
    }

    Ok(back_to_dashboard(""))
}

/// Discards unsaved changes.
///
/// # Endpoint
///
/// `POST /dashboard/undo`
pub async fn undo_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
) -> Result<Redirect, AppError> {
    st.editor_service.undo(&id).await?;
    Ok(back_to_dashboard(""))
}

/// Publishes the working copy.
///
/// Failures, including a save already in flight, become an alert on the
/// next render; the working copy stays as it was. A logged-out browser is
/// sent to the landing page.
///
/// # Endpoint
///
/// `POST /dashboard/save`
pub async fn save_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    ApiCredentials(credentials): ApiCredentials,
) -> Result<Redirect, AppError> {
    match st.editor_service.save(&id, &credentials).await {
        Ok(_) => {}
        Err(EditorError::NoSession) => return Err(AppError::NoSession),
        Err(EditorError::Api(ApiError::Unauthorized)) => return Err(AppError::Unauthorized),
        Err(e) => {
            st.editor_service
                .add_flash(&id, format!("Failed to save changes: {e}"))
                .await;
        }
    }

    Ok(back_to_dashboard(""))
}
