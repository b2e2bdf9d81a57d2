//! Display descriptors for link sources.
//!
//! One table row per [`LinkSource`]; adding a source means adding one row.

use crate::domain::entities::LinkSource;

/// How a link source is shown: icon glyph, label and input placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub source: LinkSource,
    pub label: &'static str,
    /// Icon id; the stylesheet maps `link-icon--{glyph}` to the artwork.
    pub glyph: &'static str,
    pub placeholder: &'static str,
}

/// Glyph used for sources without dedicated artwork.
pub const GENERIC_GLYPH: &str = "plus";

const GENERIC_PLACEHOLDER: &str = "https://example.com/your-profile";

static DESCRIPTORS: [SourceDescriptor; 15] = [
    SourceDescriptor {
        source: LinkSource::Discord,
        label: "Discord",
        glyph: "discord",
        placeholder: "@your_username",
    },
    SourceDescriptor {
        source: LinkSource::Twitter,
        label: "Twitter",
        glyph: "twitter",
        placeholder: "@your_username",
    },
    SourceDescriptor {
        source: LinkSource::Instagram,
        label: "Instagram",
        glyph: "instagram",
        placeholder: "@your_username",
    },
    SourceDescriptor {
        source: LinkSource::Wattpad,
        label: "Wattpad",
        glyph: "wattpad",
        placeholder: "@your_username",
    },
    SourceDescriptor {
        source: LinkSource::Session,
        label: "Session",
        glyph: "session",
        placeholder: "Your Session ID",
    },
    SourceDescriptor {
        source: LinkSource::Reddit,
        label: "Reddit",
        glyph: "reddit",
        placeholder: "u/your_username",
    },
    SourceDescriptor {
        source: LinkSource::Telegram,
        label: "Telegram",
        glyph: "telegram",
        placeholder: "@your_username",
    },
    SourceDescriptor {
        source: LinkSource::Tumblr,
        label: "Tumblr",
        glyph: "tumblr",
        placeholder: "your_username.tumblr.com",
    },
    SourceDescriptor {
        source: LinkSource::Fetlife,
        label: "FetLife",
        glyph: GENERIC_GLYPH,
        placeholder: GENERIC_PLACEHOLDER,
    },
    SourceDescriptor {
        source: LinkSource::Feeld,
        label: "Feeld",
        glyph: GENERIC_GLYPH,
        placeholder: GENERIC_PLACEHOLDER,
    },
    SourceDescriptor {
        source: LinkSource::Bluesky,
        label: "Bluesky",
        glyph: "bluesky",
        placeholder: "@your_username.bsky.social",
    },
    SourceDescriptor {
        source: LinkSource::Mastodon,
        label: "Mastodon",
        glyph: "mastodon",
        placeholder: "@your_username@mastodon.social",
    },
    SourceDescriptor {
        source: LinkSource::Signal,
        label: "Signal",
        glyph: "signal",
        placeholder: "+1234567890",
    },
    SourceDescriptor {
        source: LinkSource::Matrix,
        label: "Matrix",
        glyph: "matrix",
        placeholder: "@your_username:matrix.org",
    },
    SourceDescriptor {
        source: LinkSource::Other,
        label: "Other",
        glyph: GENERIC_GLYPH,
        placeholder: GENERIC_PLACEHOLDER,
    },
];

/// Returns the descriptor for `source`.
pub fn describe(source: LinkSource) -> &'static SourceDescriptor {
    DESCRIPTORS
        .iter()
        .find(|d| d.source == source)
        .unwrap_or(&DESCRIPTORS[DESCRIPTORS.len() - 1])
}

/// All descriptors, in table order.
pub fn all() -> &'static [SourceDescriptor] {
    &DESCRIPTORS
}

/// Sources offered as "add link" buttons in the editor.
///
/// FetLife and Feeld links still render when present but can't be added.
pub fn offered() -> impl Iterator<Item = &'static SourceDescriptor> {
    DESCRIPTORS
        .iter()
        .filter(|d| !matches!(d.source, LinkSource::Fetlife | LinkSource::Feeld))
}
