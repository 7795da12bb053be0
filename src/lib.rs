//! # blog-content
//!
//! A small Rust client for blog posts stored in a Contentful space.
//!
//! ## Architecture
//!
//! 1. **Core** — Entry / query / post domain types (always available, WASM-safe)
//! 2. **HTTP API** — `ContentHttp`, one method per Content Delivery API endpoint
//! 3. **High-Level Client** — `ContentClient` with the post queries and a `posts()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blog_content::prelude::*;
//!
//! let client = ContentClient::builder()
//!     .space("3af6cjtdd6tx")
//!     .access_token("<delivery token>")
//!     .build()?;
//!
//! let everything = client.fetch_all_posts().await?;
//! let matches = client.fetch_post_by_slug("hello-world").await?;
//! let post = client.posts().get("hello-world").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Client configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ContentClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::entry::{Asset, Entry, EntryCollection, EntryQuery, Includes, Linked};
    pub use crate::domain::post::{BlogPost, ValidationError, BLOG_CONTENT_TYPE};

    // Config
    pub use crate::config::ClientConfig;

    // Errors
    pub use crate::error::{ConfigError, RemoteQueryError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_CDN_URL, DEFAULT_ENVIRONMENT, PREVIEW_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{ContentClient, ContentClientBuilder, PostsClient};
}
