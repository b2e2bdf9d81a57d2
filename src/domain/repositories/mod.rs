//! Data access trait definitions for the domain layer.
//!
//! The profile data lives behind a REST API; [`SiteApi`] is the contract the
//! rest of the crate codes against.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::api_client`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod site_api;

pub use site_api::{Credentials, SiteApi, UploadFile};

#[cfg(test)]
pub use site_api::MockSiteApi;
