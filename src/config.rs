//! Connection configuration for the content service.

use crate::error::ConfigError;
use crate::network::{DEFAULT_CDN_URL, DEFAULT_ENVIRONMENT, DEFAULT_TIMEOUT_SECS};
use std::fmt;
use std::time::Duration;

pub const ENV_SPACE_ID: &str = "CONTENTFUL_SPACE_ID";
pub const ENV_ACCESS_TOKEN: &str = "CONTENTFUL_ACCESS_TOKEN";
pub const ENV_ENVIRONMENT: &str = "CONTENTFUL_ENVIRONMENT";
pub const ENV_BASE_URL: &str = "CONTENTFUL_BASE_URL";

/// Immutable connection settings, owned by a single client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub space: String,
    /// Delivery (or preview) token. Redacted from `Debug` output.
    pub access_token: String,
    pub environment: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(space: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            access_token: access_token.into(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            base_url: DEFAULT_CDN_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read the config from `CONTENTFUL_*` process environment variables.
    ///
    /// Space and token are required; environment and base URL fall back to
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let space = lookup(ENV_SPACE_ID).ok_or(ConfigError::MissingVar(ENV_SPACE_ID))?;
        let token = lookup(ENV_ACCESS_TOKEN).ok_or(ConfigError::MissingVar(ENV_ACCESS_TOKEN))?;

        let mut config = Self::new(space, token);
        if let Some(env) = lookup(ENV_ENVIRONMENT) {
            config.environment = env;
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that could never produce a successful query.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.space.trim().is_empty() {
            return Err(ConfigError::EmptySpace);
        }
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        if self.environment.trim().is_empty() {
            return Err(ConfigError::EmptyEnvironment);
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("space", &self.space)
            .field("access_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
