//! Operational HTTP surface: health endpoint and cross-cutting middleware.
//!
//! # Modules
//!
//! - [`dto`] - JSON response types
//! - [`handlers`] - JSON endpoint handlers
//! - [`middleware`] - Rate limiting and request tracing layers

pub mod dto;
pub mod handlers;
pub mod middleware;
