//! reqwest implementation of [`SiteApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::entities::{Kink, OWN_SITE_ID, Site};
use crate::domain::repositories::{Credentials, SiteApi, UploadFile};
use crate::error::ApiError;

#[derive(Deserialize)]
struct KinksResponse {
    items: Vec<Kink>,
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// HTTP client for the profile REST API.
///
/// Forwards the caller's cookies on every request. No timeout is applied
/// unless one is configured.
#[derive(Clone)]
pub struct HttpSiteApi {
    client: Client,
    base_url: Url,
}

impl HttpSiteApi {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("API base URL must be an http(s) URL, got '{base_url}'");
        }

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Builds `{base_url}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str], credentials: &Credentials) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(segments));
        match credentials.cookie() {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }
}

/// Sends a request and maps the status code to [`ApiError`].
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match response.status() {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        status if !status.is_success() => {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "API request failed");
            Err(ApiError::Failed {
                status: status.as_u16(),
                body,
            })
        }
        _ => Ok(response),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl SiteApi for HttpSiteApi {
    async fn fetch_site(&self, credentials: &Credentials, id: &str) -> Result<Site, ApiError> {
        let response = send(self.request(Method::GET, &["site", id], credentials)).await?;
        decode(response).await
    }

    async fn update_site(&self, credentials: &Credentials, site: &Site) -> Result<Site, ApiError> {
        let builder = self
            .request(Method::POST, &["site", OWN_SITE_ID], credentials)
            .json(site);
        let response = send(builder).await?;
        decode(response).await
    }

    async fn fetch_kinks(&self, credentials: &Credentials) -> Result<Vec<Kink>, ApiError> {
        let response = send(self.request(Method::GET, &["kinks"], credentials)).await?;
        let body: KinksResponse = decode(response).await?;
        Ok(body.items)
    }

    async fn upload_file(
        &self,
        credentials: &Credentials,
        file: UploadFile,
    ) -> Result<String, ApiError> {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
        }
        let form = Form::new().part("file", part);

        let builder = self
            .request(Method::POST, &["files", "upload"], credentials)
            .multipart(form);
        let response = send(builder).await?;
        let body: UploadResponse = decode(response).await?;

        Ok(body.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_base() {
        assert!(HttpSiteApi::new("ftp://api.example.com", None).is_err());
        assert!(HttpSiteApi::new("not a url", None).is_err());
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = HttpSiteApi::new("https://api.example.com/v1/", None).unwrap();

        assert_eq!(
            api.endpoint(&["site", "me"]).as_str(),
            "https://api.example.com/v1/site/me"
        );
    }

    #[test]
    fn test_endpoint_without_base_path() {
        let api = HttpSiteApi::new("https://api.example.com", None).unwrap();

        assert_eq!(
            api.endpoint(&["files", "upload"]).as_str(),
            "https://api.example.com/files/upload"
        );
    }

    #[test]
    fn test_endpoint_encodes_slug() {
        let api = HttpSiteApi::new("https://api.example.com", None).unwrap();

        assert_eq!(
            api.endpoint(&["site", "a b/c"]).as_str(),
            "https://api.example.com/site/a%20b%2Fc"
        );
    }
}
