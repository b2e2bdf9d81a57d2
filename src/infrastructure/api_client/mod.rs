//! REST API client implementations.

mod http_site_api;

pub use http_site_api::HttpSiteApi;
