//! Utility functions for identifiers, validation and request handling.
//!
//! - [`slug`] - Slug validation
//! - [`session_id`] - Editor session id generation
//! - [`text`] - Character-aware truncation for form input
//! - [`cookies`] - Cookie header parsing

pub mod cookies;
pub mod session_id;
pub mod slug;
pub mod text;
