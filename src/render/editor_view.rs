//! View model of the dashboard editor.

use crate::application::services::EditorSnapshot;
use crate::domain::entities::{
    BIO_MAX_CHARS, COMMENT_MAX_CHARS, Kink, Link, NAME_MAX_CHARS, POINTER_MAX_CHARS, Site,
};
use crate::domain::icons;
use crate::render::site_view::{RatingView, SiteView, rating_view, render_site};
use crate::utils::text::char_len;

/// Kink search shows at most this many matches.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Text input with a character counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedField {
    pub value: String,
    pub length: usize,
    pub max: usize,
}

impl CountedField {
    fn new(value: &str, max: usize) -> Self {
        Self {
            value: value.to_string(),
            length: char_len(value),
            max,
        }
    }
}

/// Avatar or banner upload control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaField {
    /// Path segment of the upload/remove actions.
    pub kind: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinkEditItem {
    pub id: String,
    pub name: String,
    pub rating: RatingView,
    /// Rating input value; empty when unrated.
    pub rating_value: String,
    pub comment: String,
    pub comment_max: usize,
}

impl KinkEditItem {
    fn from_kink(kink: &Kink) -> Self {
        Self {
            id: kink.id.clone(),
            name: kink.name.clone(),
            rating: rating_view(kink.rating),
            rating_value: kink.rating.map(|r| r.to_string()).unwrap_or_default(),
            comment: kink.comment.clone().unwrap_or_default(),
            comment_max: COMMENT_MAX_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEditItem {
    pub id: String,
    pub label: &'static str,
    pub glyph: &'static str,
    pub pointer: String,
    pub placeholder: &'static str,
    pub pointer_max: usize,
}

impl LinkEditItem {
    fn from_link(link: &Link) -> Self {
        let descriptor = icons::describe(link.source);
        Self {
            id: link.id.clone(),
            label: descriptor.label,
            glyph: descriptor.glyph,
            pointer: link.pointer.clone(),
            placeholder: descriptor.placeholder,
            pointer_max: POINTER_MAX_CHARS,
        }
    }
}

/// A catalog match in the kink search list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// An "add link" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceButton {
    pub source: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

/// Everything the dashboard template needs.
#[derive(Debug, Clone)]
pub struct EditorView {
    pub slug: String,
    pub name: CountedField,
    pub bio: CountedField,
    pub avatar: MediaField,
    pub banner: MediaField,
    pub query: String,
    /// `None` until the kink catalog has been fetched.
    pub results: Option<Vec<SearchResult>>,
    pub kinks: Vec<KinkEditItem>,
    pub sources: Vec<SourceButton>,
    pub links: Vec<LinkEditItem>,
    pub is_changed: bool,
    pub is_saving: bool,
    pub flash: Vec<String>,
    pub preview: SiteView,
}

impl EditorView {
    /// Avatar then banner, for rendering both upload controls alike.
    pub fn media(&self) -> [&MediaField; 2] {
        [&self.avatar, &self.banner]
    }
}

/// Case-insensitive substring match of catalog names, first
/// [`SEARCH_RESULT_LIMIT`] hits, each flagged if already on `site`.
pub fn search_catalog(catalog: &[Kink], site: &Site, query: &str) -> Vec<SearchResult> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|kink| kink.name.to_lowercase().contains(&needle))
        .take(SEARCH_RESULT_LIMIT)
        .map(|kink| SearchResult {
            id: kink.id.clone(),
            name: kink.name.clone(),
            selected: site.has_kink(&kink.id),
        })
        .collect()
}

/// Builds the editor view; `None` if no site is loaded.
pub fn render_editor(snapshot: EditorSnapshot, query: &str) -> Option<EditorView> {
    let store = &snapshot.store;
    let site = store.site()?;

    Some(EditorView {
        slug: site.slug.clone(),
        name: CountedField::new(&site.name, NAME_MAX_CHARS),
        bio: CountedField::new(&site.bio, BIO_MAX_CHARS),
        avatar: MediaField {
            kind: "avatar",
            label: "Avatar",
            description: "Your profile picture on your link in bio site.",
            url: site.avatar_url.clone(),
        },
        banner: MediaField {
            kind: "banner",
            label: "Banner",
            description: "Your profile banner on your link in bio site.",
            url: site.banner_url.clone(),
        },
        query: query.to_string(),
        results: snapshot
            .catalog
            .as_deref()
            .map(|catalog| search_catalog(catalog, site, query)),
        kinks: site.kinks.iter().map(KinkEditItem::from_kink).collect(),
        sources: icons::offered()
            .map(|d| SourceButton {
                source: d.source.as_str(),
                label: d.label,
                glyph: d.glyph,
            })
            .collect(),
        links: site.links.iter().map(LinkEditItem::from_link).collect(),
        is_changed: store.is_changed(),
        is_saving: store.is_saving(),
        flash: snapshot.flash.clone(),
        preview: render_site(site),
    })
}
