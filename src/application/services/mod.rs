//! Business logic services for the application layer.

pub mod editor_service;
pub mod editor_store;
pub mod session_sweeper;
pub mod site_service;

pub use editor_service::{EditorService, EditorSnapshot};
pub use editor_store::{EditorStore, SiteField};
pub use session_sweeper::run_session_sweeper;
pub use site_service::SiteService;
