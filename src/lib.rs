//! # KittyK
//!
//! A kinky link-in-bio: public profile pages and a profile editor, served by
//! Axum in front of the profile REST API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Profile entities, the [`domain::repositories::SiteApi`] port, link icons
//! - **Application Layer** ([`application`]) - Editor store, editor sessions, public profile lookup
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client for the profile REST API
//! - **Render Layer** ([`render`]) - Pure view models: star ratings, ranking, kink search
//! - **Web Layer** ([`web`]) - Askama pages and post/redirect/get editor actions
//! - **API Layer** ([`api`]) - Health endpoint, rate limiting and tracing middleware
//!
//! ## Features
//!
//! - Public profiles at `/{slug}` with ranked kinks and social links
//! - Per-browser editor sessions with undo and a non-reentrant save
//! - Avatar and banner uploads proxied to the API
//! - Session cookies of the API forwarded on every call
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE="https://api.kittyk.xyz"
//! export LOGIN_URL="https://discord.com/oauth2/authorize?client_id=..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{EditorService, EditorStore, SiteField, SiteService};
    pub use crate::domain::entities::{Kink, Link, LinkSource, Site};
    pub use crate::domain::repositories::{Credentials, SiteApi, UploadFile};
    pub use crate::error::{ApiError, AppError, EditorError};
    pub use crate::state::{AppState, WebSettings};
}
