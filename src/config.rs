//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honored (loaded by `main`).
//!
//! ## Required Variables
//!
//! - `API_BASE` - Base URL of the profile REST API (`http://` or `https://`)
//! - `LOGIN_URL` - Discord OAuth URL linked from the landing page
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from forwarding headers for rate limiting (default: `false`)
//! - `API_TIMEOUT_SECONDS` - Per-request API timeout; unset means no timeout
//! - `SESSION_TTL_SECONDS` - Idle editor session lifetime (default: 86400)
//! - `SECURE_COOKIES` - Mark the editor session cookie `Secure` (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub login_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Timeout applied to every API request. `None` waits indefinitely.
    pub api_timeout_seconds: Option<u64>,
    /// Editor sessions idle this long are discarded.
    pub session_ttl_seconds: u64,
    pub secure_cookies: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable doesn't parse.
    pub fn from_env() -> Result<Self> {
        let api_base = env::var("API_BASE").context("API_BASE must be set")?;
        let login_url = env::var("LOGIN_URL").context("LOGIN_URL must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env_flag("BEHIND_PROXY");
        let secure_cookies = env_flag("SECURE_COOKIES");

        let api_timeout_seconds = match env::var("API_TIMEOUT_SECONDS") {
            Ok(v) if !v.trim().is_empty() => Some(
                v.trim()
                    .parse()
                    .with_context(|| format!("API_TIMEOUT_SECONDS must be a number, got '{v}'"))?,
            ),
            _ => None,
        };

        let session_ttl_seconds = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        Ok(Self {
            api_base,
            login_url,
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            api_timeout_seconds,
            session_ttl_seconds,
            secure_cookies,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `api_base` is not an absolute http(s) URL
    /// - `login_url` is empty
    /// - `api_timeout_seconds` or `session_ttl_seconds` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match Url::parse(&self.api_base) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => anyhow::bail!(
                "API_BASE must be an http:// or https:// URL, got '{}'",
                self.api_base
            ),
        }

        if self.login_url.trim().is_empty() {
            anyhow::bail!("LOGIN_URL must not be empty");
        }

        if self.api_timeout_seconds == Some(0) {
            anyhow::bail!("API_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.session_ttl_seconds == 0 {
            anyhow::bail!("SESSION_TTL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    pub fn api_timeout(&self) -> Option<Duration> {
        self.api_timeout_seconds.map(Duration::from_secs)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  API base: {}", mask_url(&self.api_base));
        tracing::info!("  Login URL: {}", mask_url(&self.login_url));

        match self.api_timeout_seconds {
            Some(secs) => tracing::info!("  API timeout: {}s", secs),
            None => tracing::info!("  API timeout: disabled"),
        }

        tracing::info!("  Session TTL: {}s", self.session_ttl_seconds);
        tracing::info!("  Secure cookies: {}", self.secure_cookies);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

/// Strips credentials and the query string from a URL for logging.
///
/// OAuth URLs carry client ids and state in the query, and API URLs may
/// embed `user:password@`.
fn mask_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            if url.query().is_some() {
                url.set_query(Some("***"));
            }
            url.to_string()
        }
        Err(_) => raw.to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
