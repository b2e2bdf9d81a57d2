//! Editor state container: working copy, original copy and dirty flag.
//!
//! Every mutation builds a new working [`Site`] from the previous one and
//! swaps it in, so a snapshot handed out earlier never changes underneath its
//! holder. Mutations on a store without a loaded site only raise the dirty
//! flag.

use serde::Deserialize;

use crate::domain::entities::{DEFAULT_RATING, Kink, Link, Site};
use crate::error::{ApiError, EditorError};

/// Scalar profile fields editable through [`EditorStore::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteField {
    Name,
    Slug,
    Bio,
    AvatarUrl,
    BannerUrl,
}

/// Holds the site being edited.
#[derive(Debug, Clone, Default)]
pub struct EditorStore {
    site: Option<Site>,
    original: Option<Site>,
    is_changed: bool,
    is_saving: bool,
}

impl EditorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The working copy.
    pub fn site(&self) -> Option<&Site> {
        self.site.as_ref()
    }

    /// The last-saved snapshot.
    pub fn original(&self) -> Option<&Site> {
        self.original.as_ref()
    }

    pub fn is_changed(&self) -> bool {
        self.is_changed
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn is_loaded(&self) -> bool {
        self.site.is_some()
    }

    /// Replaces the working copy wholesale.
    pub fn set_site(&mut self, site: Site) {
        self.site = Some(site);
    }

    /// Replaces the original snapshot.
    pub fn set_original(&mut self, site: Site) {
        self.original = Some(site);
    }

    /// Initializes both copies from a freshly fetched site.
    pub fn load(&mut self, site: Site) {
        self.set_site(site.clone());
        self.set_original(site);
        self.is_changed = false;
    }

    /// Replaces one scalar field on the working copy.
    ///
    /// `None` clears the media URLs; for text fields it means an empty string.
    pub fn set_field(&mut self, field: SiteField, value: Option<String>) {
        match field {
            SiteField::Name => self.set_name(value.unwrap_or_default()),
            SiteField::Slug => self.set_slug(value.unwrap_or_default()),
            SiteField::Bio => self.set_bio(value.unwrap_or_default()),
            SiteField::AvatarUrl => self.set_avatar_url(value),
            SiteField::BannerUrl => self.set_banner_url(value),
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.update(|site| Site {
            name,
            ..site.clone()
        });
    }

    pub fn set_slug(&mut self, slug: String) {
        self.update(|site| Site {
            slug,
            ..site.clone()
        });
    }

    pub fn set_bio(&mut self, bio: String) {
        self.update(|site| Site {
            bio,
            ..site.clone()
        });
    }

    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.update(|site| Site {
            avatar_url,
            ..site.clone()
        });
    }

    pub fn set_banner_url(&mut self, banner_url: Option<String>) {
        self.update(|site| Site {
            banner_url,
            ..site.clone()
        });
    }

    pub fn add_kink(&mut self, kink: Kink) {
        self.update(|site| {
            let mut kinks = site.kinks.clone();
            kinks.push(kink);
            Site {
                kinks: sorted_by_name(kinks),
                ..site.clone()
            }
        });
    }

    /// Replaces the kink with the same id.
    pub fn set_kink(&mut self, kink: Kink) {
        self.update(|site| {
            let kinks = site
                .kinks
                .iter()
                .map(|k| if k.id == kink.id { kink.clone() } else { k.clone() })
                .collect();
            Site {
                kinks: sorted_by_name(kinks),
                ..site.clone()
            }
        });
    }

    pub fn remove_kink(&mut self, kink_id: &str) {
        self.update(|site| {
            let kinks = site
                .kinks
                .iter()
                .filter(|k| k.id != kink_id)
                .cloned()
                .collect();
            Site {
                kinks: sorted_by_name(kinks),
                ..site.clone()
            }
        });
    }

    /// Toggles a catalog kink: removes it when selected, otherwise adds it
    /// with the default rating.
    ///
    /// Returns true if the kink was added.
    pub fn toggle_kink(&mut self, kink: &Kink) -> bool {
        let selected = self.site.as_ref().is_some_and(|s| s.has_kink(&kink.id));

        if selected {
            self.remove_kink(&kink.id);
            false
        } else {
            self.add_kink(Kink {
                rating: Some(DEFAULT_RATING),
                ..kink.clone()
            });
            true
        }
    }

    /// Appends a link, keeping insertion order.
    pub fn add_link(&mut self, link: Link) {
        self.update(|site| {
            let mut links = site.links.clone();
            links.push(link);
            Site {
                links,
                ..site.clone()
            }
        });
    }

    /// Replaces the link with the same id.
    pub fn set_link(&mut self, link: Link) {
        self.update(|site| Site {
            links: site
                .links
                .iter()
                .map(|l| if l.id == link.id { link.clone() } else { l.clone() })
                .collect(),
            ..site.clone()
        });
    }

    pub fn remove_link(&mut self, link_id: &str) {
        self.update(|site| Site {
            links: site
                .links
                .iter()
                .filter(|l| l.id != link_id)
                .cloned()
                .collect(),
            ..site.clone()
        });
    }

    /// Restores the working copy from the original and clears the dirty flag.
    pub fn undo(&mut self) {
        self.site = self.original.clone();
        self.is_changed = false;
    }

    /// Marks a save as in flight and returns the snapshot to send.
    ///
    /// # Errors
    ///
    /// - [`EditorError::SaveInProgress`] if a save hasn't finished yet
    /// - [`EditorError::NotLoaded`] if there is nothing to save
    pub fn begin_save(&mut self) -> Result<Site, EditorError> {
        if self.is_saving {
            return Err(EditorError::SaveInProgress);
        }

        let snapshot = self.site.clone().ok_or(EditorError::NotLoaded)?;
        self.is_saving = true;

        Ok(snapshot)
    }

    /// Reconciles the store with the outcome of a save.
    ///
    /// On success both copies become the server's canonical site and the dirty
    /// flag clears. On failure nothing but the in-flight flag changes.
    pub fn finish_save(&mut self, outcome: Result<Site, ApiError>) -> Result<(), ApiError> {
        self.is_saving = false;

        let saved = outcome?;
        self.load(saved);

        Ok(())
    }

    fn update(&mut self, f: impl FnOnce(&Site) -> Site) {
        if let Some(current) = &self.site {
            self.site = Some(f(current));
        }
        self.is_changed = true;
    }
}

fn sorted_by_name(mut kinks: Vec<Kink>) -> Vec<Kink> {
    kinks.sort_by(|a, b| a.name.cmp(&b.name));
    kinks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkSource;

    fn loaded_store() -> EditorStore {
        let mut store = EditorStore::new();
        store.load(Site {
            name: "Kitty".into(),
            ..Site::new("s1", "kitty")
        });
        store
    }

    fn kink_names(store: &EditorStore) -> Vec<String> {
        store
            .site()
            .unwrap()
            .kinks
            .iter()
            .map(|k| k.name.clone())
            .collect()
    }

    #[test]
    fn test_load_sets_both_copies() {
        let store = loaded_store();

        assert!(store.is_loaded());
        assert!(!store.is_changed());
        assert_eq!(store.site(), store.original());
    }

    #[test]
    fn test_set_field_marks_dirty() {
        let mut store = loaded_store();

        store.set_field(SiteField::Name, Some("Kat".into()));

        assert!(store.is_changed());
        assert_eq!(store.site().unwrap().name, "Kat");
        assert_eq!(store.original().unwrap().name, "Kitty");
    }

    #[test]
    fn test_set_field_media_none_clears() {
        let mut store = loaded_store();
        store.set_field(SiteField::AvatarUrl, Some("https://cdn/a.png".into()));
        store.set_field(SiteField::AvatarUrl, None);

        assert!(store.site().unwrap().avatar_url.is_none());
    }

    #[test]
    fn test_set_field_text_none_is_empty() {
        let mut store = loaded_store();
        store.set_field(SiteField::Bio, None);

        assert_eq!(store.site().unwrap().bio, "");
    }

    #[test]
    fn test_earlier_snapshot_is_not_affected() {
        let mut store = loaded_store();
        let before = store.site().cloned().unwrap();

        store.set_field(SiteField::Slug, Some("kat".into()));
        store.add_kink(Kink::new("k1", "Bondage"));

        assert_eq!(before.slug, "kitty");
        assert!(before.kinks.is_empty());
    }

    #[test]
    fn test_add_kink_sorts_by_name() {
        let mut store = loaded_store();

        store.add_kink(Kink::new("k1", "Spanking"));
        store.add_kink(Kink::new("k2", "Bondage"));
        store.add_kink(Kink::new("k3", "Latex"));

        assert_eq!(kink_names(&store), vec!["Bondage", "Latex", "Spanking"]);
    }

    #[test]
    fn test_kink_sort_is_case_sensitive() {
        let mut store = loaded_store();

        store.add_kink(Kink::new("k1", "bondage"));
        store.add_kink(Kink::new("k2", "Latex"));

        assert_eq!(kink_names(&store), vec!["Latex", "bondage"]);
    }

    #[test]
    fn test_set_kink_replaces_by_id_and_resorts() {
        let mut store = loaded_store();
        store.add_kink(Kink::new("k1", "Bondage"));
        store.add_kink(Kink::new("k2", "Latex"));

        let renamed = Kink {
            name: "Zentai".into(),
            ..Kink::new("k1", "Bondage")
        };
        store.set_kink(renamed.with_rating(4));

        assert_eq!(kink_names(&store), vec!["Latex", "Zentai"]);
        assert_eq!(store.site().unwrap().kink("k1").unwrap().rating, Some(4));
    }

    #[test]
    fn test_remove_kink() {
        let mut store = loaded_store();
        store.add_kink(Kink::new("k1", "Bondage"));
        store.add_kink(Kink::new("k2", "Latex"));

        store.remove_kink("k1");

        assert_eq!(kink_names(&store), vec!["Latex"]);
    }

    #[test]
    fn test_kinks_stay_sorted_for_any_sequence() {
        let mut store = loaded_store();
        let names = ["Wax", "Bondage", "latex", "Age play", "Rope", "Feet"];

        for (i, name) in names.iter().enumerate() {
            store.add_kink(Kink::new(format!("k{i}"), *name));
            if i % 2 == 1 {
                store.set_kink(Kink::new(format!("k{}", i - 1), format!("X{name}")));
            }
            if i == 4 {
                store.remove_kink("k2");
            }

            let names = kink_names(&store);
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted);
        }
    }

    #[test]
    fn test_toggle_adds_with_default_rating() {
        let mut store = loaded_store();
        let catalog_kink = Kink::new("k1", "Bondage");

        let added = store.toggle_kink(&catalog_kink);

        assert!(added);
        assert_eq!(store.site().unwrap().kink("k1").unwrap().rating, Some(10));
    }

    #[test]
    fn test_toggle_removes_selected() {
        let mut store = loaded_store();
        let catalog_kink = Kink::new("k1", "Bondage");
        store.toggle_kink(&catalog_kink);

        let added = store.toggle_kink(&catalog_kink);

        assert!(!added);
        assert!(!store.site().unwrap().has_kink("k1"));
    }

    #[test]
    fn test_links_keep_insertion_order() {
        let mut store = loaded_store();
        let first = Link::blank(LinkSource::Twitter);
        let second = Link::blank(LinkSource::Discord);
        store.add_link(first.clone());
        store.add_link(second.clone());

        store.set_link(first.with_pointer("@kitty"));

        let links = &store.site().unwrap().links;
        assert_eq!(links[0].id, first.id);
        assert_eq!(links[0].pointer, "@kitty");
        assert_eq!(links[1].id, second.id);

        store.remove_link(&first.id);
        assert_eq!(store.site().unwrap().links.len(), 1);
        assert_eq!(store.site().unwrap().links[0].id, second.id);
    }

    #[test]
    fn test_undo_restores_original() {
        let mut store = loaded_store();
        store.set_field(SiteField::Name, Some("Kat".into()));
        store.add_kink(Kink::new("k1", "Bondage"));
        store.add_link(Link::blank(LinkSource::Signal));
        store.remove_kink("k1");

        store.undo();

        assert!(!store.is_changed());
        assert_eq!(store.site(), store.original());
    }

    #[test]
    fn test_save_success_reconciles() {
        let mut store = loaded_store();
        store.set_field(SiteField::Name, Some("Kat".into()));

        let snapshot = store.begin_save().unwrap();
        assert!(store.is_saving());

        let canonical = Site {
            updated_at: chrono::Utc::now(),
            ..snapshot
        };
        store.finish_save(Ok(canonical.clone())).unwrap();

        assert!(!store.is_saving());
        assert!(!store.is_changed());
        assert_eq!(store.site(), Some(&canonical));
        assert_eq!(store.original(), Some(&canonical));
    }

    #[test]
    fn test_save_failure_keeps_working_copy() {
        let mut store = loaded_store();
        store.set_field(SiteField::Name, Some("Kat".into()));
        let before = store.site().cloned();

        store.begin_save().unwrap();
        let result = store.finish_save(Err(ApiError::Transport("refused".into())));

        assert!(result.is_err());
        assert!(store.is_changed());
        assert!(!store.is_saving());
        assert_eq!(store.site().cloned(), before);
        assert_eq!(store.original().unwrap().name, "Kitty");
    }

    #[test]
    fn test_second_save_rejected_while_in_flight() {
        let mut store = loaded_store();
        store.begin_save().unwrap();

        assert_eq!(store.begin_save(), Err(EditorError::SaveInProgress));
    }

    #[test]
    fn test_save_without_site() {
        let mut store = EditorStore::new();

        assert_eq!(store.begin_save(), Err(EditorError::NotLoaded));
        assert!(!store.is_saving());
    }

    #[test]
    fn test_mutation_without_site_only_marks_dirty() {
        let mut store = EditorStore::new();
        store.set_field(SiteField::Name, Some("Kat".into()));

        assert!(store.site().is_none());
        assert!(store.is_changed());
    }

    #[test]
    fn test_site_field_deserializes_snake_case() {
        let field: SiteField = serde_json::from_str("\"avatar_url\"").unwrap();
        assert_eq!(field, SiteField::AvatarUrl);
    }
}
