//! Application layer services implementing the editor and page logic.
//!
//! Services consume the [`crate::domain::repositories::SiteApi`] port and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::editor_store::EditorStore`] - Working/original copies and their mutations
//! - [`services::editor_service::EditorService`] - Per-browser editor sessions, save and upload
//! - [`services::site_service::SiteService`] - Public profile retrieval

pub mod services;
