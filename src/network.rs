//! Network URL constants for the Content Delivery API.

/// Default Content Delivery API base URL.
pub const DEFAULT_CDN_URL: &str = "https://cdn.contentful.com";

/// Content Preview API base URL (draft entries, preview tokens).
pub const PREVIEW_URL: &str = "https://preview.contentful.com";

/// Environment used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "master";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
