//! HTML page and form-action handlers.

pub mod dashboard;
mod editor;
mod error_page;
mod kinks;
mod landing;
mod links;
mod logout;
pub mod media;
mod site;

pub use dashboard::{DashboardTemplate, dashboard_handler};
pub use editor::{save_handler, set_field_handler, undo_handler};
pub use error_page::ErrorTemplate;
pub use kinks::{remove_kink_handler, set_kink_handler, toggle_kink_handler};
pub use landing::landing_handler;
pub use links::{add_link_handler, remove_link_handler, set_link_handler};
pub use logout::logout_handler;
pub use media::{remove_media_handler, upload_media_handler};
pub use site::{SiteTemplate, site_handler};
