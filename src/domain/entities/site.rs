//! Site entity: a user's public profile page aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use validator::Validate;

use super::kink::{COMMENT_MAX_CHARS, Kink};
use super::link::{Link, POINTER_MAX_CHARS};

/// Maximum length of a display name, in characters.
pub const NAME_MAX_CHARS: usize = 32;

/// Maximum length of a bio, in characters.
pub const BIO_MAX_CHARS: usize = 128;

/// Maximum length of a slug, in characters.
pub const SLUG_MAX_CHARS: usize = 32;

/// Site identifier that resolves to the authenticated user's own site.
pub const OWN_SITE_ID: &str = "me";

/// A profile page: profile fields, selected kinks and social links.
///
/// The same document is read from `GET /site/{id}` and written back whole to
/// `POST /site/me`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Site {
    pub id: String,
    #[validate(custom(function = "crate::utils::slug::validate_slug"))]
    pub slug: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(length(max = 32))]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(length(max = 128))]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(custom(function = "validate_kinks"))]
    pub kinks: Vec<Kink>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(custom(function = "validate_links"))]
    pub links: Vec<Link>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Site {
    /// Creates an empty site with the given identity.
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            slug: slug.into(),
            name: String::new(),
            bio: String::new(),
            avatar_url: None,
            banner_url: None,
            kinks: Vec::new(),
            links: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if a kink with `kink_id` is selected on this site.
    pub fn has_kink(&self, kink_id: &str) -> bool {
        self.kinks.iter().any(|k| k.id == kink_id)
    }

    /// Finds a selected kink by id.
    pub fn kink(&self, kink_id: &str) -> Option<&Kink> {
        self.kinks.iter().find(|k| k.id == kink_id)
    }

    /// Finds a link by id.
    pub fn link(&self, link_id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == link_id)
    }
}

fn validate_kinks(kinks: &[Kink]) -> Result<(), validator::ValidationError> {
    let too_long = kinks.iter().any(|k| {
        k.comment
            .as_deref()
            .is_some_and(|c| c.chars().count() > COMMENT_MAX_CHARS)
    });

    if too_long {
        return Err(
            validator::ValidationError::new("comment_too_long").with_message(
                format!("Kink comments are limited to {COMMENT_MAX_CHARS} characters").into(),
            ),
        );
    }

    Ok(())
}

fn validate_links(links: &[Link]) -> Result<(), validator::ValidationError> {
    if links
        .iter()
        .any(|l| l.pointer.chars().count() > POINTER_MAX_CHARS)
    {
        return Err(
            validator::ValidationError::new("pointer_too_long").with_message(
                format!("Links are limited to {POINTER_MAX_CHARS} characters").into(),
            ),
        );
    }

    Ok(())
}
