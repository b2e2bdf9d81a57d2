//! Infrastructure layer implementing external integrations.
//!
//! # Modules
//!
//! - [`api_client`] - HTTP client for the profile REST API

pub mod api_client;
