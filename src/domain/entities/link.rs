//! Link entity: a reference to the owner's profile on a social platform.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a link pointer, in characters.
pub const POINTER_MAX_CHARS: usize = 66;

/// Platform a [`Link`] points to.
///
/// Serialized as the lowercase tag. Tags this client doesn't know about
/// deserialize as [`LinkSource::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSource {
    Discord,
    Twitter,
    Instagram,
    Wattpad,
    Session,
    Reddit,
    Telegram,
    Tumblr,
    Fetlife,
    Feeld,
    Bluesky,
    Mastodon,
    Signal,
    Matrix,
    #[serde(other)]
    Other,
}

impl LinkSource {
    /// Every source, in the order the editor offers them.
    pub const ALL: [LinkSource; 15] = [
        LinkSource::Discord,
        LinkSource::Twitter,
        LinkSource::Instagram,
        LinkSource::Wattpad,
        LinkSource::Session,
        LinkSource::Reddit,
        LinkSource::Telegram,
        LinkSource::Tumblr,
        LinkSource::Fetlife,
        LinkSource::Feeld,
        LinkSource::Bluesky,
        LinkSource::Mastodon,
        LinkSource::Signal,
        LinkSource::Matrix,
        LinkSource::Other,
    ];

    /// Wire tag of the source.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkSource::Discord => "discord",
            LinkSource::Twitter => "twitter",
            LinkSource::Instagram => "instagram",
            LinkSource::Wattpad => "wattpad",
            LinkSource::Session => "session",
            LinkSource::Reddit => "reddit",
            LinkSource::Telegram => "telegram",
            LinkSource::Tumblr => "tumblr",
            LinkSource::Fetlife => "fetlife",
            LinkSource::Feeld => "feeld",
            LinkSource::Bluesky => "bluesky",
            LinkSource::Mastodon => "mastodon",
            LinkSource::Signal => "signal",
            LinkSource::Matrix => "matrix",
            LinkSource::Other => "other",
        }
    }
}

/// A social link shown on a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub source: LinkSource,
    pub pointer: String,
}

impl Link {
    /// Creates an empty link for `source` with a fresh random id.
    pub fn blank(source: LinkSource) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source,
            pointer: String::new(),
        }
    }

    /// Returns a copy pointing at `pointer`.
    pub fn with_pointer(&self, pointer: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_links_get_distinct_ids() {
        let a = Link::blank(LinkSource::Discord);
        let b = Link::blank(LinkSource::Discord);

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.pointer, "");
    }

    #[test]
    fn test_source_serializes_as_tag() {
        let link = Link::blank(LinkSource::Bluesky).with_pointer("@kitty.bsky.social");
        let value = serde_json::to_value(&link).unwrap();

        assert_eq!(value["source"], "bluesky");
        assert_eq!(value["pointer"], "@kitty.bsky.social");
    }

    #[test]
    fn test_unknown_source_is_other() {
        let link: Link =
            serde_json::from_str(r#"{"id":"l1","source":"myspace","pointer":"tom"}"#).unwrap();

        assert_eq!(link.source, LinkSource::Other);
    }

    #[test]
    fn test_as_str_matches_serde() {
        for source in LinkSource::ALL {
            let value = serde_json::to_value(source).unwrap();
            assert_eq!(value, source.as_str());
        }
    }
}
