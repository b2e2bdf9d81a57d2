//! Avatar and banner upload actions.

use axum::extract::{Extension, Multipart, Path, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::application::services::SiteField;
use crate::domain::repositories::UploadFile;
use crate::error::{AppError, EditorError};
use crate::state::AppState;
use crate::web::handlers::dashboard::back_to_dashboard;
use crate::web::middleware::session::{ApiCredentials, EditorSessionId};

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which profile image an upload targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Avatar,
    Banner,
}

impl MediaKind {
    fn field(self) -> SiteField {
        match self {
            MediaKind::Avatar => SiteField::AvatarUrl,
            MediaKind::Banner => SiteField::BannerUrl,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            MediaKind::Avatar => "avatar",
            MediaKind::Banner => "banner",
        }
    }
}

/// Reads the `file` part of the form. `None` when no file was chosen.
async fn read_file(multipart: &mut Multipart) -> Result<Option<UploadFile>, String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| e.body_text())?;

        if bytes.is_empty() {
            return Ok(None);
        }

        return Ok(Some(UploadFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        }));
    }

    Ok(None)
}

/// Uploads an image and points the avatar or banner at it.
///
/// Failures become a "Failed to upload {avatar|banner}: ..." alert.
///
/// # Endpoint
///
/// `POST /dashboard/media/{avatar|banner}` (multipart, field `file`)
pub async fn upload_media_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    ApiCredentials(credentials): ApiCredentials,
    Path(kind): Path<MediaKind>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let editor = &st.editor_service;

    let file = match read_file(&mut multipart).await {
        Ok(Some(file)) => file,
        Ok(None) => return Ok(back_to_dashboard("")),
        Err(message) => {
            editor
                .add_flash(&id, format!("Failed to upload {}: {message}", kind.noun()))
                .await;
            return Ok(back_to_dashboard(""));
        }
    };

    match editor.upload_media(&id, &credentials, kind.field(), file).await {
        Ok(_) => {}
        Err(EditorError::NoSession) => return Err(AppError::NoSession),
        Err(e) => {
            editor
                .add_flash(&id, format!("Failed to upload {}: {e}", kind.noun()))
                .await;
        }
    }

    Ok(back_to_dashboard(""))
}

/// Clears the avatar or banner URL.
///
/// # Endpoint
///
/// `POST /dashboard/media/{avatar|banner}/remove`
pub async fn remove_media_handler(
    State(st): State<AppState>,
    Extension(EditorSessionId(id)): Extension<EditorSessionId>,
    Path(kind): Path<MediaKind>,
) -> Result<Redirect, AppError> {
    st.editor_service
        .edit(&id, |store| store.set_field(kind.field(), None))
        .await?;

    Ok(back_to_dashboard(""))
}
