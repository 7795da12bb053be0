//! Unified SDK error types.

use thiserror::Error;

use crate::domain::post::ValidationError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Remote query error: {0}")]
    RemoteQuery(#[from] RemoteQueryError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Failure of a query against the content service.
///
/// Every variant is the same error kind to callers of the query operations;
/// the variants only say which part of the round trip failed.
#[derive(Error, Debug)]
pub enum RemoteQueryError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited (reset in {reset_secs:?}s)")]
    RateLimited { reset_secs: Option<u64> },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl RemoteQueryError {
    /// HTTP status that produced this error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteQueryError::Unauthorized(_) => Some(401),
            RemoteQueryError::NotFound(_) => Some(404),
            RemoteQueryError::RateLimited { .. } => Some(429),
            RemoteQueryError::ServerError { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            RemoteQueryError::Transport(e) => e.status().map(|s| s.as_u16()),
            RemoteQueryError::BadRequest(_) | RemoteQueryError::MalformedResponse(_) => None,
        }
    }
}

/// Configuration errors, raised before any request is issued.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Space identifier is empty")]
    EmptySpace,

    #[error("Access token is empty")]
    EmptyAccessToken,

    #[error("Environment is empty")]
    EmptyEnvironment,

    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),
}
