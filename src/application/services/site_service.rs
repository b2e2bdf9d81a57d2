//! Public profile retrieval.

use std::sync::Arc;

use crate::domain::entities::Site;
use crate::domain::repositories::{Credentials, SiteApi};
use crate::error::ApiError;

/// Fetches published sites for the public profile pages.
pub struct SiteService {
    api: Arc<dyn SiteApi>,
}

impl SiteService {
    pub fn new(api: Arc<dyn SiteApi>) -> Self {
        Self { api }
    }

    /// Fetches the site published at `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no site claims the slug.
    pub async fn public_site(&self, credentials: &Credentials, slug: &str) -> Result<Site, ApiError> {
        match self.api.fetch_site(credentials, slug).await {
            Ok(site) => Ok(site),
            Err(ApiError::NotFound) => {
                tracing::debug!(slug, "No site for slug");
                Err(ApiError::NotFound)
            }
            Err(e) => {
                tracing::warn!(slug, error = %e, "Failed to fetch site");
                Err(e)
            }
        }
    }

    /// Checks that the API answers at all.
    ///
    /// Fetches the kink catalog without credentials; a 401 still proves the
    /// API is reachable.
    pub async fn check_api(&self) -> Result<usize, ApiError> {
        match self.api.fetch_kinks(&Credentials::anonymous()).await {
            Ok(kinks) => Ok(kinks.len()),
            Err(ApiError::Unauthorized) => Ok(0),
            Err(e) => Err(e),
        }
    }
}
