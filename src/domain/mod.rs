//! Domain layer containing the profile data model and the API port.
//!
//! # Architecture
//!
//! - [`entities`] - Site, kink and link data structures
//! - [`repositories`] - The [`repositories::SiteApi`] trait implemented by the
//!   infrastructure layer
//! - [`icons`] - Display descriptors for link sources
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Edit logic lives in [`crate::application::services`]

pub mod entities;
pub mod icons;
pub mod repositories;
