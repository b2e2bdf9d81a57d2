//! Slug validation for profile URLs.
//!
//! Slugs share the URL namespace with the frontend's own routes, so a site
//! cannot claim a slug that would shadow one of them.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

use crate::domain::entities::{OWN_SITE_ID, SLUG_MAX_CHARS};

/// Compiled regex for allowed slug characters.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Slugs reserved for frontend routes.
///
/// Includes the API's alias for the caller's own site, which can never be
/// fetched publicly.
pub const RESERVED_SLUGS: &[&str] = &[
    "dashboard",
    "health",
    "static",
    "login",
    "logout",
    OWN_SITE_ID,
];

/// Returns true if `slug` names a frontend route or the own-site alias.
pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(slug))
}

/// Validates a slug before it is sent to the API.
///
/// # Rules
///
/// - Length: 1-32 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved route name (case-insensitive)
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first violated rule.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() || slug.chars().count() > SLUG_MAX_CHARS {
        return Err(ValidationError::new("slug_length")
            .with_message(format!("Slug must be 1-{SLUG_MAX_CHARS} characters").into()));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(ValidationError::new("slug_charset").with_message(
            "Slug can only contain letters, digits, hyphens and underscores".into(),
        ));
    }

    if is_reserved(slug) {
        return Err(ValidationError::new("slug_reserved")
            .with_message(format!("The slug '{slug}' is reserved").into()));
    }

    Ok(())
}
