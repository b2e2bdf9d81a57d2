//! Core domain entities representing the profile data model.
//!
//! These mirror the JSON documents exchanged with the profile REST API.
//! Entities are plain data; all edit logic lives in
//! [`crate::application::services::EditorStore`].
//!
//! # Entity Types
//!
//! - [`Site`] - A user's profile page
//! - [`Kink`] - A rated preference item
//! - [`Link`] - A social platform reference, tagged with a [`LinkSource`]

pub mod kink;
pub mod link;
pub mod site;

pub use kink::{COMMENT_MAX_CHARS, DEFAULT_RATING, Kink, MAX_RATING};
pub use link::{Link, LinkSource, POINTER_MAX_CHARS};
pub use site::{BIO_MAX_CHARS, NAME_MAX_CHARS, OWN_SITE_ID, SLUG_MAX_CHARS, Site};
