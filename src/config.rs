//! Client configuration
//!
//! `ClientConfig` is built once (from code, a YAML file, or the environment),
//! validated, and then handed to the transport. Nothing in it changes after
//! construction.

use crate::auth::Credential;
use crate::error::{Error, Result};
use crate::pagination::PageBounds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Environment variable holding a v3 API key
pub const ENV_API_KEY: &str = "TMDB_API_KEY";

/// Environment variable holding a v4 read access token
pub const ENV_BEARER_TOKEN: &str = "TMDB_BEARER_TOKEN";

/// Environment variable holding the default response language
pub const ENV_LANGUAGE: &str = "TMDB_LANGUAGE";

// ============================================================================
// Client Config
// ============================================================================

/// Validated, immutable client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Credential applied to every request
    pub credential: Credential,
    /// Default `language` query parameter (e.g. "en-US")
    pub language: Option<String>,
    /// API root every request path is joined onto
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// How paginators treat page numbers beyond the known last page
    pub page_bounds: PageBounds,
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Config with an API key and every other setting at its default
    pub fn with_api_key(key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(key).build()
    }

    /// Config with a bearer token and every other setting at its default
    pub fn with_bearer_token(token: impl Into<String>) -> Result<Self> {
        Self::builder().bearer_token(token).build()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        file.into_config()
    }

    /// Load a YAML config file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        ConfigFile::from_yaml_file(path)?.into_config()
    }

    /// Read `TMDB_API_KEY`, `TMDB_BEARER_TOKEN` and `TMDB_LANGUAGE`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(key) = lookup(ENV_API_KEY) {
            builder = builder.api_key(key);
        }
        if let Some(token) = lookup(ENV_BEARER_TOKEN) {
            builder = builder.bearer_token(token);
        }
        if let Some(language) = lookup(ENV_LANGUAGE) {
            builder = builder.language(language);
        }
        builder.build()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ClientConfig`]
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    bearer_token: Option<String>,
    language: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    page_bounds: PageBounds,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            bearer_token: None,
            language: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(default_timeout_secs()),
            user_agent: default_user_agent(),
            page_bounds: PageBounds::default(),
        }
    }
}

impl ClientConfigBuilder {
    /// Authenticate with a v3 API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Authenticate with a v4 read access token
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Use `credential`, replacing whichever credential was set before
    #[must_use]
    pub fn credential(mut self, credential: Credential) -> Self {
        match credential {
            Credential::ApiKey(key) => {
                self.api_key = Some(key);
                self.bearer_token = None;
            }
            Credential::BearerToken(token) => {
                self.api_key = None;
                self.bearer_token = Some(token);
            }
        }
        self
    }

    /// Set the default response language
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Override the API root
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the out-of-range page policy for paginators
    #[must_use]
    pub fn page_bounds(mut self, bounds: PageBounds) -> Self {
        self.page_bounds = bounds;
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        let credential = Credential::from_parts(self.api_key, self.bearer_token)?;

        let base = Url::parse(&self.base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::invalid_value(
                "base_url",
                format!("'{}' cannot be used as a base URL", self.base_url),
            ));
        }

        if self.timeout.is_zero() {
            return Err(Error::invalid_value("timeout", "must be greater than zero"));
        }

        let language = self.language.filter(|l| !l.trim().is_empty());

        Ok(ClientConfig {
            credential,
            language,
            base_url: self.base_url,
            timeout: self.timeout,
            user_agent: self.user_agent,
            page_bounds: self.page_bounds,
        })
    }
}

// ============================================================================
// YAML File
// ============================================================================

/// On-disk configuration shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// v3 API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// v4 read access token
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// Default response language
    #[serde(default)]
    pub language: Option<String>,

    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Out-of-range page policy
    #[serde(default)]
    pub page_bounds: PageBounds,
}

impl ConfigFile {
    /// Read and parse a YAML config file without validating it
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Validate into a [`ClientConfig`]
    pub fn into_config(self) -> Result<ClientConfig> {
        self.into_builder().build()
    }

    /// Builder pre-filled with the file's settings, for callers layering
    /// further overrides on top
    pub fn into_builder(self) -> ClientConfigBuilder {
        let mut builder = ClientConfig::builder()
            .base_url(self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .page_bounds(self.page_bounds);

        if let Some(key) = self.api_key {
            builder = builder.api_key(key);
        }
        if let Some(token) = self.bearer_token {
            builder = builder.bearer_token(token);
        }
        if let Some(language) = self.language {
            builder = builder.language(language);
        }
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("tmdb-client/{}", env!("CARGO_PKG_VERSION"))
}
