//! Pure view-model builders for the HTML templates.
//!
//! - [`site_view`] - public profile: ranking, star ratings, media fallbacks
//! - [`editor_view`] - dashboard editor: counters, kink search, link inputs

pub mod editor_view;
pub mod site_view;

pub use editor_view::{EditorView, render_editor, search_catalog};
pub use site_view::{MediaView, RatingView, SiteView, Star, rating_view, render_site};
