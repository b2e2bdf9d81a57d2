//! Browser-facing layer: public profiles and the dashboard editor.
//!
//! Pages are rendered server-side with Askama templates; the editor is a set
//! of plain HTML forms following post/redirect/get.
//!
//! # Modules
//!
//! - [`handlers`] - Page and form-action handlers
//! - [`middleware`] - Editor session cookie and API credential extraction
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
