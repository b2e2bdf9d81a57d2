#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum_test::TestServer;
use kittyk::domain::entities::{Kink, Link, LinkSource, OWN_SITE_ID, Site};
use kittyk::domain::repositories::{Credentials, SiteApi, UploadFile};
use kittyk::error::ApiError;
use kittyk::routes::unlimited_router;
use kittyk::state::{AppState, WebSettings};
use tokio::sync::Mutex;

/// Cookie the fake API accepts as the owner's logged-in browser.
pub const AUTH_COOKIE: &str = "auth=good";

/// Cookie of a second account, registered with [`FakeSiteApi::with_account`].
pub const OTHER_AUTH_COOKIE: &str = "auth=other";

pub const LOGIN_URL: &str = "https://api.example.com/auth/discord";

/// In-memory profile API.
///
/// Sites are keyed by slug; `accounts` maps each auth cookie to the slug
/// `me` resolves to.
pub struct FakeSiteApi {
    sites: Mutex<HashMap<String, Site>>,
    accounts: Mutex<HashMap<String, String>>,
    catalog: Vec<Kink>,
    pub updates: AtomicUsize,
    pub uploads: AtomicUsize,
    pub fail_updates: bool,
    pub fail_catalog: bool,
}

impl FakeSiteApi {
    pub fn new(owner: Site) -> Self {
        let mut sites = HashMap::new();
        let accounts = HashMap::from([(AUTH_COOKIE.to_string(), owner.slug.clone())]);
        sites.insert(owner.slug.clone(), owner);

        Self {
            sites: Mutex::new(sites),
            accounts: Mutex::new(accounts),
            catalog: vec![
                Kink::new("k1", "Rope"),
                Kink::new("k2", "Wax"),
                Kink::new("k3", "Praise"),
            ],
            updates: AtomicUsize::new(0),
            uploads: AtomicUsize::new(0),
            fail_updates: false,
            fail_catalog: false,
        }
    }

    /// Registers another logged-in account owning `site`.
    pub fn with_account(mut self, cookie: &str, site: Site) -> Self {
        self.accounts
            .get_mut()
            .insert(cookie.to_string(), site.slug.clone());
        self.sites.get_mut().insert(site.slug.clone(), site);
        self
    }

    pub async fn site(&self, slug: &str) -> Option<Site> {
        self.sites.lock().await.get(slug).cloned()
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// The auth cookie among the request cookies, if it names an account.
    async fn account(&self, credentials: &Credentials) -> Option<String> {
        let accounts = self.accounts.lock().await;
        credentials
            .cookie()?
            .split("; ")
            .find(|c| accounts.contains_key(*c))
            .map(str::to_string)
    }
}

#[async_trait]
impl SiteApi for FakeSiteApi {
    async fn fetch_site(&self, credentials: &Credentials, id: &str) -> Result<Site, ApiError> {
        let slug = if id == OWN_SITE_ID {
            let account = self.account(credentials).await.ok_or(ApiError::Unauthorized)?;
            self.accounts.lock().await[&account].clone()
        } else {
            id.to_string()
        };

        self.sites
            .lock()
            .await
            .get(&slug)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn update_site(&self, credentials: &Credentials, site: &Site) -> Result<Site, ApiError> {
        let account = self.account(credentials).await.ok_or(ApiError::Unauthorized)?;
        if self.fail_updates {
            return Err(ApiError::Failed {
                status: 409,
                body: "Slug is taken".to_string(),
            });
        }

        self.updates.fetch_add(1, Ordering::SeqCst);

        let mut accounts = self.accounts.lock().await;
        let mut sites = self.sites.lock().await;
        let Some(slug) = accounts.get_mut(&account) else {
            return Err(ApiError::Unauthorized);
        };
        sites.remove(slug.as_str());
        sites.insert(site.slug.clone(), site.clone());
        *slug = site.slug.clone();

        Ok(site.clone())
    }

    async fn fetch_kinks(&self, _credentials: &Credentials) -> Result<Vec<Kink>, ApiError> {
        if self.fail_catalog {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(self.catalog.clone())
    }

    async fn upload_file(
        &self,
        credentials: &Credentials,
        file: UploadFile,
    ) -> Result<String, ApiError> {
        self.account(credentials).await.ok_or(ApiError::Unauthorized)?;
        self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(format!("https://cdn.example.com/{}", file.file_name))
    }
}

/// The logged-in user's site: one rated kink and one Discord link.
pub fn owner_site() -> Site {
    let mut site = Site::new("s1", "kitty");
    site.name = "Kitty".to_string();
    site.bio = "Purring professionally".to_string();
    site.kinks = vec![Kink::new("k2", "Wax").with_rating(7)];
    site.links = vec![Link::blank(LinkSource::Discord).with_pointer("@kitty")];
    site
}

pub fn create_test_state(api: Arc<FakeSiteApi>) -> AppState {
    AppState::new(
        api,
        WebSettings {
            login_url: LOGIN_URL.to_string(),
            secure_cookies: false,
        },
    )
}

/// A test server over the full router, minus rate limiting.
pub fn make_server(api: Arc<FakeSiteApi>) -> TestServer {
    TestServer::new(unlimited_router(create_test_state(api))).unwrap()
}

/// Another account's site, for use with [`OTHER_AUTH_COOKIE`].
pub fn other_site() -> Site {
    let mut site = Site::new("s2", "tabby");
    site.name = "Tabby".to_string();
    site.bio = "Mostly naps".to_string();
    site
}

/// The `editor_session=...` pair out of a cookie header built by
/// [`open_editor`].
pub fn session_cookie(cookie: &str) -> &str {
    cookie
        .split("; ")
        .find(|c| c.starts_with("editor_session="))
        .unwrap()
}

/// Opens an editor session as the logged-in user and returns its cookie
/// header for follow-up requests.
pub async fn open_editor(server: &TestServer) -> String {
    let response = server
        .get("/dashboard")
        .add_header("Cookie", AUTH_COOKIE)
        .await;
    response.assert_status_ok();

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    let session = set_cookie.split(';').next().unwrap().to_string();
    assert!(session.starts_with("editor_session="));

    format!("{AUTH_COOKIE}; {session}")
}
