//! Kink entity: a named preference item with an optional rating and comment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Highest rating a kink can carry.
pub const MAX_RATING: u8 = 10;

/// Rating assigned when a kink is picked from the catalog search list.
pub const DEFAULT_RATING: u8 = MAX_RATING;

/// Maximum length of a kink comment, in characters.
pub const COMMENT_MAX_CHARS: usize = 32;

/// A kink, either from the global catalog or selected on a site.
///
/// Catalog entries usually come without `rating` and `comment`; the selected
/// copies on a [`super::Site`] carry the owner's values.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kink {
    pub id: String,
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Kink {
    /// Creates an unrated kink without a comment.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            rating: None,
            comment: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy with the rating clamped to `0..=10`.
    pub fn with_rating(&self, rating: i64) -> Self {
        Self {
            rating: Some(clamp_rating(rating)),
            ..self.clone()
        }
    }

    /// Returns a copy with the given comment.
    pub fn with_comment(&self, comment: Option<String>) -> Self {
        Self {
            comment,
            ..self.clone()
        }
    }

    /// Returns the comment when it is present and non-empty.
    pub fn visible_comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// Clamps an arbitrary integer into the valid rating range.
pub fn clamp_rating(rating: i64) -> u8 {
    rating.clamp(0, MAX_RATING as i64) as u8
}

/// Accepts integral and fractional JSON numbers; fractions round to the
/// nearest whole rating.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?
        .map(|rating| clamp_rating(rating.round() as i64)))
}
