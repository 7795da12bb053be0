//! High-level client — `ContentClient` with the post queries and sub-client accessors.
//!
//! The typed sub-client lives in `domain/post/client.rs`. This module keeps
//! the builder, the query operations, and accessor methods.

use crate::config::ClientConfig;
use crate::domain::entry::{EntryCollection, EntryQuery};
use crate::domain::post::client::Posts;
use crate::domain::post::BLOG_CONTENT_TYPE;
use crate::error::{RemoteQueryError, SdkError};
use crate::http::ContentHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::post::client::Posts as PostsClient;

/// The primary entry point: one configured connection to a space.
///
/// Holds no mutable state, so a single instance (or clones of it) can serve
/// any number of concurrent queries.
#[derive(Clone)]
pub struct ContentClient {
    pub(crate) http: ContentHttp,
    config: ClientConfig,
}

impl ContentClient {
    pub fn builder() -> ContentClientBuilder {
        ContentClientBuilder::default()
    }

    /// Build a client from an explicit config.
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        config.validate()?;
        let http = ContentHttp::new(&config).map_err(RemoteQueryError::from)?;
        Ok(Self { http, config })
    }

    /// Build a client from `CONTENTFUL_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Every entry in the space. No content type filter is applied.
    pub async fn fetch_all_posts(&self) -> Result<EntryCollection, RemoteQueryError> {
        self.get_entries(&EntryQuery::new()).await
    }

    /// `blog` entries whose `slug` field equals `slug`.
    ///
    /// The slug is sent as given; an empty slug is left to the service.
    /// No match yields an empty collection.
    pub async fn fetch_post_by_slug(&self, slug: &str) -> Result<EntryCollection, RemoteQueryError> {
        let query = EntryQuery::new()
            .field_eq("slug", slug)
            .content_type(BLOG_CONTENT_TYPE);
        self.get_entries(&query).await
    }

    /// Run an arbitrary entries query.
    pub async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, RemoteQueryError> {
        Ok(self.http.get_entries(query).await?.into())
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn posts(&self) -> Posts<'_> {
        Posts { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ContentClientBuilder {
    config: ClientConfig,
}

impl Default for ContentClientBuilder {
    fn default() -> Self {
        Self {
            config: ClientConfig::new(String::new(), String::new()),
        }
    }
}

impl ContentClientBuilder {
    pub fn space(mut self, space: &str) -> Self {
        self.config.space = space.to_string();
        self
    }

    pub fn access_token(mut self, token: &str) -> Self {
        self.config.access_token = token.to_string();
        self
    }

    pub fn environment(mut self, environment: &str) -> Self {
        self.config.environment = environment.to_string();
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    /// Query the Content Preview API instead of the delivery CDN.
    pub fn preview(self) -> Self {
        self.base_url(crate::network::PREVIEW_URL)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Fails with `ConfigError` when space or token is empty.
    pub fn build(self) -> Result<ContentClient, SdkError> {
        ContentClient::new(self.config)
    }
}
