//! Client configuration
//!
//! Construction-time settings for a [`Client`](crate::Client). Defaults point
//! at the production Up API; tests and proxies override the base URL.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Production API root. The trailing slash matters for relative resolution.
pub const DEFAULT_BASE_URL: &str = "https://api.up.com.au/api/v1/";

/// Default `User-Agent` sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("up-client/", env!("CARGO_PKG_VERSION"));

/// Default upper bound on pages fetched by one list call
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Environment variable holding the personal access token
pub const TOKEN_ENV: &str = "UP_TOKEN";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "UP_BASE_URL";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL that relative paths resolve against
    pub base_url: String,
    /// Client identifier header
    pub user_agent: String,
    /// Per-request timeout applied by the transport
    pub timeout: Duration,
    /// Maximum pages one list call may fetch (`None` = unbounded)
    pub max_pages: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults, with the base URL taken from `UP_BASE_URL` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }

    /// Parse the base URL, forcing a trailing slash so joins append
    /// rather than replace the last segment
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL cannot be used as a base: {}",
                self.base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum pages a list call may fetch
    ///
    /// Must be at least 1; a client built with 0 is rejected.
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = Some(max_pages);
        self
    }

    /// Remove the page cap; only the cycle check remains
    pub fn no_page_limit(mut self) -> Self {
        self.config.max_pages = None;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
