//! Web route configuration.

use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::get, routing::post};

use crate::state::AppState;
use crate::web::handlers::media::MAX_UPLOAD_BYTES;
use crate::web::handlers::{
    add_link_handler, dashboard_handler, landing_handler, logout_handler, remove_kink_handler,
    remove_link_handler, remove_media_handler, save_handler, set_field_handler, set_kink_handler,
    set_link_handler, site_handler, toggle_kink_handler, undo_handler, upload_media_handler,
};

/// Dashboard actions requiring a live editor session.
///
/// Protected via [`crate::web::middleware::session::layer`]. Every action
/// answers with a redirect back to `/dashboard`.
///
/// # Endpoints
///
/// - `POST /field` - Set name, slug, bio or a media URL
/// - `POST /kinks/toggle` - Add or remove a catalog kink
/// - `POST /kinks/{kink_id}` - Update rating and comment
/// - `POST /kinks/{kink_id}/remove` - Remove a kink
/// - `POST /links` - Add an empty link of a source
/// - `POST /links/{link_id}` - Update a link's pointer
/// - `POST /links/{link_id}/remove` - Remove a link
/// - `POST /media/{kind}` - Upload avatar or banner (multipart)
/// - `POST /media/{kind}/remove` - Clear avatar or banner
/// - `POST /undo` - Discard unsaved changes
/// - `POST /save` - Publish the working copy
pub fn editor_routes() -> Router<AppState> {
    Router::new()
        .route("/field", post(set_field_handler))
        .route("/kinks/toggle", post(toggle_kink_handler))
        .route("/kinks/{kink_id}", post(set_kink_handler))
        .route("/kinks/{kink_id}/remove", post(remove_kink_handler))
        .route("/links", post(add_link_handler))
        .route("/links/{link_id}", post(set_link_handler))
        .route("/links/{link_id}/remove", post(remove_link_handler))
        .route(
            "/media/{kind}",
            post(upload_media_handler).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/media/{kind}/remove", post(remove_media_handler))
        .route("/undo", post(undo_handler))
        .route("/save", post(save_handler))
}

/// Dashboard page; opens the editor session itself.
///
/// # Endpoints
///
/// - `GET /dashboard` - Editor with live preview
/// - `POST /logout` - Discard the editor session
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/logout", post(logout_handler))
}

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Landing page
/// - `GET /{slug}` - Public profile
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/{slug}", get(site_handler))
}
