//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{EditorService, SiteService};
use crate::domain::repositories::SiteApi;

/// Settings the web layer reads per request.
#[derive(Debug, Clone)]
pub struct WebSettings {
    /// Discord OAuth entry point linked from the landing page.
    pub login_url: String,
    /// Adds `Secure` to the editor session cookie.
    pub secure_cookies: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub site_service: Arc<SiteService>,
    pub editor_service: Arc<EditorService>,
    pub settings: Arc<WebSettings>,
}

impl AppState {
    /// Builds the services on top of one API client.
    pub fn new(api: Arc<dyn SiteApi>, settings: WebSettings) -> Self {
        Self {
            site_service: Arc::new(SiteService::new(api.clone())),
            editor_service: Arc::new(EditorService::new(api)),
            settings: Arc::new(settings),
        }
    }
}
