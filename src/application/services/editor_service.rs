//! Editor session orchestration.
//!
//! Each browser editing the dashboard owns one [`EditorSession`], keyed by the
//! `editor_session` cookie. A session is locked only for synchronous store
//! work; the lock is released before any API call and re-acquired to
//! reconcile, so a slow save never blocks rendering of the same session.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use validator::Validate;

use crate::application::services::editor_store::{EditorStore, SiteField};
use crate::domain::entities::{Kink, OWN_SITE_ID, Site};
use crate::domain::repositories::{Credentials, SiteApi, UploadFile};
use crate::error::EditorError;
use crate::utils::session_id::{generate_session_id, is_valid_session_id};

/// State of one editing session.
#[derive(Debug)]
pub struct EditorSession {
    store: EditorStore,
    catalog: Option<Vec<Kink>>,
    flash: Vec<String>,
    last_seen: Instant,
}

impl EditorSession {
    fn new() -> Self {
        Self {
            store: EditorStore::new(),
            catalog: None,
            flash: Vec::new(),
            last_seen: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

/// Point-in-time copy of a session for rendering.
#[derive(Debug, Clone)]
pub struct EditorSnapshot {
    pub store: EditorStore,
    pub catalog: Option<Vec<Kink>>,
    /// One-shot alert messages, oldest first; taken out of the session by
    /// the snapshot.
    pub flash: Vec<String>,
}

type SessionHandle = Arc<Mutex<EditorSession>>;

/// Registry of editor sessions and the operations the dashboard drives.
pub struct EditorService {
    api: Arc<dyn SiteApi>,
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl EditorService {
    pub fn new(api: Arc<dyn SiteApi>) -> Self {
        Self {
            api,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Resumes the session `id` or starts a new one.
    ///
    /// Returns the session id and whether it was newly created.
    pub async fn open(&self, id: Option<&str>) -> (String, bool) {
        if let Some(id) = id.filter(|id| is_valid_session_id(id))
            && let Some(handle) = self.sessions.read().await.get(id)
        {
            handle.lock().await.touch();
            return (id.to_string(), false);
        }

        let id = generate_session_id();
        self.sessions
            .write()
            .await
            .insert(id.clone(), Arc::new(Mutex::new(EditorSession::new())));
        tracing::debug!(session = %short(&id), "Editor session opened");

        (id, true)
    }

    /// Returns true if `id` names a live session.
    pub async fn exists(&self, id: &str) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    /// Fetches the caller's own site and binds it to the session.
    ///
    /// Runs on every dashboard render so an expired API login surfaces
    /// instead of being served from the session. The first fetch loads the
    /// store; later fetches for the same site keep the working copy. When the
    /// credentials now resolve to a different site, the session's edits
    /// belong to another account and the store is reloaded from scratch.
    ///
    /// # Errors
    ///
    /// - [`EditorError::NoSession`] if the session doesn't exist
    /// - [`EditorError::Api`] if fetching the site fails
    pub async fn sync_site(&self, id: &str, credentials: &Credentials) -> Result<(), EditorError> {
        let handle = self.handle(id).await?;

        let site = self.api.fetch_site(credentials, OWN_SITE_ID).await?;

        let mut session = handle.lock().await;
        match session.store.original().map(|original| original.id.clone()) {
            None => {
                tracing::info!(session = %short(id), slug = %site.slug, "Site loaded into editor");
                session.store.load(site);
            }
            Some(bound) if bound != site.id => {
                tracing::warn!(session = %short(id), slug = %site.slug, "Account changed, editor reset");
                session.store = EditorStore::new();
                session.store.load(site);
            }
            Some(_) => {}
        }

        Ok(())
    }

    /// Returns true if the session has a site loaded.
    pub async fn is_loaded(&self, id: &str) -> bool {
        match self.handle(id).await {
            Ok(handle) => handle.lock().await.store.is_loaded(),
            Err(_) => false,
        }
    }

    /// Fetches the kink catalog into the session unless already present.
    ///
    /// # Errors
    ///
    /// - [`EditorError::NoSession`] if the session doesn't exist
    /// - [`EditorError::Api`] if fetching the catalog fails
    pub async fn ensure_catalog(&self, id: &str, credentials: &Credentials) -> Result<(), EditorError> {
        let handle = self.handle(id).await?;

        if handle.lock().await.catalog.is_some() {
            return Ok(());
        }

        let kinks = self.api.fetch_kinks(credentials).await?;
        tracing::debug!(session = %short(id), count = kinks.len(), "Kink catalog loaded");
        handle.lock().await.catalog = Some(kinks);

        Ok(())
    }

    /// Copies the session state for rendering and takes its flash messages.
    pub async fn snapshot(&self, id: &str) -> Result<EditorSnapshot, EditorError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.touch();

        Ok(EditorSnapshot {
            store: session.store.clone(),
            catalog: session.catalog.clone(),
            flash: std::mem::take(&mut session.flash),
        })
    }

    /// Applies a synchronous store operation.
    pub async fn edit<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut EditorStore) -> R,
    ) -> Result<R, EditorError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.touch();

        Ok(f(&mut session.store))
    }

    /// Toggles a catalog kink on the working copy.
    ///
    /// Returns true if the kink was added.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownKink`] if the id isn't in the loaded catalog.
    pub async fn toggle_kink(&self, id: &str, kink_id: &str) -> Result<bool, EditorError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.touch();

        let kink = session
            .catalog
            .as_ref()
            .and_then(|catalog| catalog.iter().find(|k| k.id == kink_id))
            .cloned()
            .ok_or_else(|| EditorError::UnknownKink(kink_id.to_string()))?;

        Ok(session.store.toggle_kink(&kink))
    }

    /// Restores the working copy from the last-saved snapshot.
    pub async fn undo(&self, id: &str) -> Result<(), EditorError> {
        self.edit(id, EditorStore::undo).await
    }

    /// Sends the working copy to the API and reconciles with the response.
    ///
    /// # Errors
    ///
    /// - [`EditorError::SaveInProgress`] if another save for this session is in flight
    /// - [`EditorError::Validation`] if the working copy fails local checks
    /// - [`EditorError::AccountChanged`] if the credentials now belong to
    ///   another site than the one being edited
    /// - [`EditorError::Api`] if the API rejects the update; the working copy
    ///   and dirty flag are left untouched
    pub async fn save(&self, id: &str, credentials: &Credentials) -> Result<Site, EditorError> {
        let handle = self.handle(id).await?;

        {
            let mut session = handle.lock().await;
            session.touch();
            check_saveable(&session.store)?;
        }

        // The browser may have switched accounts since the site was loaded.
        let current = self.api.fetch_site(credentials, OWN_SITE_ID).await?;

        let snapshot = {
            let mut session = handle.lock().await;
            check_saveable(&session.store)?;

            if session.store.original().is_some_and(|original| original.id != current.id) {
                tracing::warn!(session = %short(id), "Save rejected, account changed");
                return Err(EditorError::AccountChanged);
            }

            session.store.begin_save()?
        };

        let outcome = self.api.update_site(credentials, &snapshot).await;

        let mut session = handle.lock().await;
        match session.store.finish_save(outcome) {
            Ok(()) => {
                counter!("editor_saves_total").increment(1);
                tracing::info!(session = %short(id), slug = %snapshot.slug, "Site saved");
                session.store.site().cloned().ok_or(EditorError::NotLoaded)
            }
            Err(e) => {
                counter!("editor_save_failures_total").increment(1);
                tracing::warn!(session = %short(id), error = %e, "Failed to save site");
                Err(e.into())
            }
        }
    }

    /// Uploads an image and stores its URL in `field` on the working copy.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Api`] if the upload fails; the store is unchanged.
    pub async fn upload_media(
        &self,
        id: &str,
        credentials: &Credentials,
        field: SiteField,
        file: UploadFile,
    ) -> Result<String, EditorError> {
        let handle = self.handle(id).await?;
        let size = file.bytes.len();

        let url = self.api.upload_file(credentials, file).await?;
        counter!("media_uploads_total").increment(1);
        tracing::info!(session = %short(id), ?field, size, "Media uploaded");

        let mut session = handle.lock().await;
        session.touch();
        session.store.set_field(field, Some(url.clone()));

        Ok(url)
    }

    /// Queues a one-shot alert shown on the next dashboard render.
    pub async fn add_flash(&self, id: &str, message: impl Into<String>) {
        if let Ok(handle) = self.handle(id).await {
            handle.lock().await.flash.push(message.into());
        }
    }

    /// Discards a session. Returns true if it existed.
    pub async fn close(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Discards sessions idle for at least `ttl`. Returns how many were removed.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        let mut idle = Vec::new();
        for (id, handle) in sessions.iter() {
            // A locked session is in use, so it isn't idle.
            if let Ok(session) = handle.try_lock()
                && session.last_seen.elapsed() >= ttl
                && !session.store.is_saving()
            {
                idle.push(id.clone());
            }
        }
        for id in idle {
            sessions.remove(&id);
        }

        before - sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn handle(&self, id: &str) -> Result<SessionHandle, EditorError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(EditorError::NoSession)
    }
}

/// Rejects a save that is already running or whose working copy fails
/// local validation.
fn check_saveable(store: &EditorStore) -> Result<(), EditorError> {
    if store.is_saving() {
        return Err(EditorError::SaveInProgress);
    }
    if let Some(site) = store.site() {
        site.validate()?;
    }
    Ok(())
}

/// Session id prefix safe to put in logs.
fn short(id: &str) -> &str {
    &id[..id.len().min(6)]
}
