//! Port to the profile REST API.

use async_trait::async_trait;

use crate::domain::entities::{Kink, Site};
use crate::error::ApiError;

/// Ambient session credentials of the browser a request is made for.
///
/// Holds the browser's `Cookie` header (minus the editor's own cookie), which
/// is forwarded verbatim so the API sees the same session it issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    cookie: Option<String>,
}

impl Credentials {
    /// Credentials carrying the given `Cookie` header value.
    pub fn from_cookie(cookie: impl Into<String>) -> Self {
        Self {
            cookie: Some(cookie.into()),
        }
    }

    /// No credentials at all; the API will answer 401 for protected calls.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}

/// An image selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Client interface for the profile REST API.
///
/// Every call is credentialed. Status codes map to [`ApiError`]:
/// 401 → [`ApiError::Unauthorized`], 404 → [`ApiError::NotFound`], any other
/// non-2xx → [`ApiError::Failed`] with the response body.
///
/// # Implementations
///
/// - [`crate::infrastructure::api_client::HttpSiteApi`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// Fetches a site by slug, or the caller's own site for
    /// [`crate::domain::entities::OWN_SITE_ID`].
    ///
    /// `GET /site/{id}`
    async fn fetch_site(&self, credentials: &Credentials, id: &str) -> Result<Site, ApiError>;

    /// Replaces the caller's site and returns the server's canonical copy.
    ///
    /// `POST /site/me`
    async fn update_site(&self, credentials: &Credentials, site: &Site) -> Result<Site, ApiError>;

    /// Fetches the global kink catalog.
    ///
    /// `GET /kinks`
    async fn fetch_kinks(&self, credentials: &Credentials) -> Result<Vec<Kink>, ApiError>;

    /// Uploads an image and returns its durable URL.
    ///
    /// `POST /files/upload` (multipart, field `file`)
    async fn upload_file(
        &self,
        credentials: &Credentials,
        file: UploadFile,
    ) -> Result<String, ApiError>;
}
