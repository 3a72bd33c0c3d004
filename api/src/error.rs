//! Unified error types for the timeline proxy
//!
//! This module defines error types for each layer:
//! - `LookupError`: structured error reported by the Twitter API
//! - `TwitterError`: Twitter API client errors (transport and application level)
//! - `AppError`: Application layer errors (converted into HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Known categories of upstream application errors.
///
/// The Twitter API reports errors with a free-form `title`. The common ones
/// get their own variant; anything else lands in `Unclassified` with the
/// title preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupErrorKind {
    NotFound,
    Authorization,
    Forbidden,
    ClientForbidden,
    InvalidRequest,
    UsageCapped,
    Unclassified(String),
}

impl LookupErrorKind {
    pub fn from_title(title: &str) -> Self {
        match title {
            "Not Found Error" => LookupErrorKind::NotFound,
            "Authorization Error" => LookupErrorKind::Authorization,
            "Forbidden" => LookupErrorKind::Forbidden,
            "Client Forbidden" => LookupErrorKind::ClientForbidden,
            "Invalid Request" => LookupErrorKind::InvalidRequest,
            "Usage Capped" | "UsageCapExceeded" => LookupErrorKind::UsageCapped,
            other => LookupErrorKind::Unclassified(other.to_string()),
        }
    }
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupErrorKind::NotFound => write!(f, "not_found"),
            LookupErrorKind::Authorization => write!(f, "authorization"),
            LookupErrorKind::Forbidden => write!(f, "forbidden"),
            LookupErrorKind::ClientForbidden => write!(f, "client_forbidden"),
            LookupErrorKind::InvalidRequest => write!(f, "invalid_request"),
            LookupErrorKind::UsageCapped => write!(f, "usage_capped"),
            LookupErrorKind::Unclassified(title) => write!(f, "unclassified({})", title),
        }
    }
}

/// Application-level error reported by the Twitter API in its `errors` payload
#[derive(Debug, Clone, Error)]
#[error("{title}: {detail}")]
pub struct LookupError {
    pub kind: LookupErrorKind,
    pub title: String,
    pub detail: String,
}

impl LookupError {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            kind: LookupErrorKind::from_title(&title),
            title,
            detail: detail.into(),
        }
    }
}

/// Twitter API client errors
#[derive(Debug, Error)]
pub enum TwitterError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Unauthorized - invalid bearer token")]
    Unauthorized,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Twitter error: {0}")]
    Twitter(#[from] TwitterError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream failures are never surfaced to the client.
        match &self {
            AppError::Twitter(TwitterError::Lookup(e)) => {
                tracing::error!(kind = %e.kind, "Twitter lookup error: {}", e);
            }
            AppError::Twitter(e) => {
                tracing::error!("Twitter error: {}", e);
            }
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
