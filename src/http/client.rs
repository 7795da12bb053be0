//! Low-level HTTP client — `ContentHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the high-level client). Every call is exactly one request: no
//! retries, no caching.

use crate::config::ClientConfig;
use crate::domain::entry::wire::{EntriesResponse, ErrorResponse};
use crate::domain::entry::EntryQuery;
use crate::error::RemoteQueryError;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Reset window (seconds) sent with 429 responses.
const RATE_LIMIT_RESET_HEADER: &str = "x-contentful-ratelimit-reset";

/// Low-level HTTP client for the Content Delivery API.
pub struct ContentHttp {
    base_url: String,
    space: String,
    environment: String,
    client: Client,
    /// Delivery token. NEVER exposed publicly.
    access_token: Arc<str>,
}

impl ContentHttp {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(config.timeout)
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            space: config.space.clone(),
            environment: config.environment.clone(),
            client: builder.build()?,
            access_token: Arc::from(config.access_token.as_str()),
        })
    }

    pub fn space(&self) -> &str {
        &self.space
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    // ── Entries ──────────────────────────────────────────────────────────

    pub fn entries_url(&self, query: &EntryQuery) -> String {
        let url = format!(
            "{}/spaces/{}/environments/{}/entries",
            self.base_url,
            urlencoding::encode(&self.space),
            urlencoding::encode(&self.environment)
        );
        if query.is_empty() {
            url
        } else {
            format!("{}?{}", url, query.to_query_string())
        }
    }

    pub async fn get_entries(&self, query: &EntryQuery) -> Result<EntriesResponse, RemoteQueryError> {
        let url = self.entries_url(query);
        tracing::debug!(
            space = %self.space,
            environment = %self.environment,
            params = %query.to_query_string(),
            "Querying entries"
        );
        let resp: EntriesResponse = self.get(&url).await?;
        tracing::debug!(items = resp.items.len(), total = resp.total, "Entries received");
        Ok(resp)
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteQueryError> {
        let resp = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()
            .await?;
        let status = resp.status();
        let reset_secs = rate_limit_reset(resp.headers());
        let body_text = resp.text().await?;

        if status.is_success() {
            return serde_json::from_str::<T>(&body_text)
                .map_err(|e| RemoteQueryError::MalformedResponse(e.to_string()));
        }

        Err(error_for_status(status.as_u16(), reset_secs, body_text))
    }
}

impl Clone for ContentHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            space: self.space.clone(),
            environment: self.environment.clone(),
            client: self.client.clone(),
            access_token: self.access_token.clone(),
        }
    }
}

fn rate_limit_reset(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RATE_LIMIT_RESET_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Map a non-2xx response onto the error kind callers see.
pub(crate) fn error_for_status(
    status: u16,
    reset_secs: Option<u64>,
    body: String,
) -> RemoteQueryError {
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(parsed) => parsed.get_message(),
        Err(_) => body,
    };

    match status {
        401 => RemoteQueryError::Unauthorized(message),
        404 => RemoteQueryError::NotFound(message),
        429 => RemoteQueryError::RateLimited { reset_secs },
        400..=499 => RemoteQueryError::BadRequest(message),
        _ => RemoteQueryError::ServerError {
            status,
            body: message,
        },
    }
}
