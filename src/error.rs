//! Error types for each layer.
//!
//! - [`ApiError`] - failures reported by the profile REST API client
//! - [`EditorError`] - failures of editor store/session operations
//! - [`AppError`] - web-layer errors rendered as HTML error screens or redirects

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::web::handlers::ErrorTemplate;

/// Errors returned by [`crate::domain::repositories::SiteApi`] implementations.
///
/// Callers branch only on [`ApiError::Unauthorized`] and [`ApiError::NotFound`];
/// every other variant is surfaced as an opaque message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 401: the session is missing or expired.
    #[error("The user is not logged in.")]
    Unauthorized,

    /// HTTP 404: the site or resource doesn't exist.
    #[error("The requested resource was not found.")]
    NotFound,

    /// Any other non-2xx response, carrying the response body text.
    #[error("API request failed: {body}")]
    Failed { status: u16, body: String },

    /// The request never produced a response.
    #[error("API request failed: {0}")]
    Transport(String),

    /// The response body couldn't be decoded.
    #[error("Invalid API response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

/// Errors returned by editor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Editor session not found")]
    NoSession,

    #[error("No site is loaded in this editor session")]
    NotLoaded,

    #[error("A save is already in progress")]
    SaveInProgress,

    #[error("You are logged in as someone else now. Reload the dashboard.")]
    AccountChanged,

    #[error("Unknown kink: {0}")]
    UnknownKink(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<validator::ValidationErrors> for EditorError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid {field}"),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        EditorError::Validation(message)
    }
}

/// Web-layer error rendered as a full-page response.
#[derive(Debug)]
pub enum AppError {
    /// Not logged in: send the browser back to the landing page.
    Unauthorized,
    /// Public profile doesn't exist; invites the visitor to claim the slug.
    SiteNotFound { slug: String },
    /// Editor couldn't load the user's own site.
    LoadFailed { message: String },
    /// Any other failure while rendering a page.
    Unknown,
    /// The editor session cookie is missing or stale.
    NoSession,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::NoSession => StatusCode::SEE_OTHER,
            AppError::SiteNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::LoadFailed { .. } | AppError::Unknown => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown on the error screen.
    pub fn message(&self) -> String {
        match self {
            AppError::SiteNotFound { slug } => {
                format!("There's no /{slug} site. What about making this your own?")
            }
            AppError::LoadFailed { message } => format!("Failed to load site data: {message}"),
            AppError::Unauthorized | AppError::NoSession | AppError::Unknown => {
                "An unknown error occurred.".to_string()
            }
        }
    }
}

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::NoSession => AppError::NoSession,
            EditorError::Api(ApiError::Unauthorized) => AppError::Unauthorized,
            other => AppError::LoadFailed {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => Redirect::to("/").into_response(),
            AppError::NoSession => Redirect::to("/dashboard").into_response(),
            other => {
                let status = other.status();
                let template = ErrorTemplate {
                    message: Some(other.message()),
                };
                (status, template).into_response()
            }
        }
    }
}
