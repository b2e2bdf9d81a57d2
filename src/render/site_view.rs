//! Read-only view of a public profile.

use crate::domain::entities::{Kink, Link, Site};
use crate::domain::icons;

/// Where the "Made with KittyKinks" footer points.
pub const PRODUCT_URL: &str = "https://kittyk.xyz";

const AVATAR_GLYPH: &str = "K";
const BANNER_PATTERN_REPEAT: usize = 300;

/// Avatar or banner: the uploaded image, or a decorative placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaView {
    Image(String),
    Placeholder(String),
}

impl MediaView {
    fn from_url(url: Option<&str>, placeholder: impl FnOnce() -> String) -> Self {
        match url.filter(|u| !u.is_empty()) {
            Some(url) => MediaView::Image(url.to_string()),
            None => MediaView::Placeholder(placeholder()),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            MediaView::Image(url) => Some(url),
            MediaView::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            MediaView::Image(_) => None,
            MediaView::Placeholder(text) => Some(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
}

impl Star {
    pub fn is_half(&self) -> bool {
        matches!(self, Star::Half)
    }
}

/// How a kink's rating is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingView {
    /// Rating exactly 0.
    Dislike,
    /// One entry per star position; only the last may be half.
    Stars(Vec<Star>),
    /// No rating recorded.
    Unrated,
}

impl RatingView {
    pub fn is_dislike(&self) -> bool {
        matches!(self, RatingView::Dislike)
    }

    pub fn stars(&self) -> &[Star] {
        match self {
            RatingView::Stars(stars) => stars,
            RatingView::Dislike | RatingView::Unrated => &[],
        }
    }
}

/// Maps a 0-10 rating to its display.
///
/// A rating `r > 0` takes `ceil(r / 2)` positions; position `i` is half when
/// `2 * i == r - 1`, which only happens for the last position of an odd rating.
pub fn rating_view(rating: Option<u8>) -> RatingView {
    match rating {
        None => RatingView::Unrated,
        Some(0) => RatingView::Dislike,
        Some(r) => {
            let r = usize::from(r);
            let stars = (0..r.div_ceil(2))
                .map(|i| if i * 2 == r - 1 { Star::Half } else { Star::Full })
                .collect();
            RatingView::Stars(stars)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinkView {
    pub id: String,
    pub name: String,
    pub rating: RatingView,
    pub comment: Option<String>,
}

impl KinkView {
    fn from_kink(kink: &Kink) -> Self {
        Self {
            id: kink.id.clone(),
            name: kink.name.clone(),
            rating: rating_view(kink.rating),
            comment: kink.visible_comment().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub id: String,
    pub label: &'static str,
    pub glyph: &'static str,
    pub pointer: String,
}

impl LinkView {
    fn from_link(link: &Link) -> Self {
        let descriptor = icons::describe(link.source);
        Self {
            id: link.id.clone(),
            label: descriptor.label,
            glyph: descriptor.glyph,
            pointer: link.pointer.clone(),
        }
    }
}

/// Everything the profile template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteView {
    pub slug: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: MediaView,
    pub banner: MediaView,
    /// Highest rating first; ties keep their stored order.
    pub kinks: Vec<KinkView>,
    pub links: Vec<LinkView>,
    pub footer_url: &'static str,
}

/// Builds the public view of `site`.
///
/// A missing rating sorts as 0.
pub fn render_site(site: &Site) -> SiteView {
    let mut ranked: Vec<&Kink> = site.kinks.iter().collect();
    ranked.sort_by(|a, b| b.rating.unwrap_or(0).cmp(&a.rating.unwrap_or(0)));

    SiteView {
        slug: site.slug.clone(),
        name: site.name.clone(),
        bio: Some(site.bio.clone()).filter(|bio| !bio.is_empty()),
        avatar: MediaView::from_url(site.avatar_url.as_deref(), || AVATAR_GLYPH.to_string()),
        banner: MediaView::from_url(site.banner_url.as_deref(), || {
            "K ".repeat(BANNER_PATTERN_REPEAT)
        }),
        kinks: ranked.into_iter().map(KinkView::from_kink).collect(),
        links: site.links.iter().map(LinkView::from_link).collect(),
        footer_url: PRODUCT_URL,
    }
}
