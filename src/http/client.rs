//! reqwest-backed transport
//!
//! Joins request paths onto the configured API root, applies the credential
//! and default language, and classifies the response.

use super::transport::Transport;
use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::QueryParams;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Query parameter selecting the response language
pub(crate) const LANGUAGE_PARAM: &str = "language";

/// HTTP client for the API
pub struct HttpClient {
    client: Client,
    base_url: String,
    authenticator: Authenticator,
    language: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from a validated config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self::with_client(config, client))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(config: &ClientConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            authenticator: Authenticator::new(config.credential.clone()),
            language: config.language.clone(),
        }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Default response language, if configured
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Build full URL from path
    pub(crate) fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }

        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Query pairs actually sent: default language first, then the request's own
    fn effective_query(&self, query: &QueryParams) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(query.len() + 1);
        if let Some(language) = &self.language {
            if !query.contains(LANGUAGE_PARAM) {
                pairs.push((LANGUAGE_PARAM.to_string(), language.clone()));
            }
        }
        pairs.extend(query.to_pairs());
        pairs
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_json(&self, path: &str, query: &QueryParams) -> Result<Value> {
        let url = self.build_url(path)?;
        let pairs = self.effective_query(query);

        debug!(method = %Method::GET, path, params = ?pairs, "Sending request");

        let mut req = self.client.request(Method::GET, url);
        if !pairs.is_empty() {
            req = req.query(&pairs);
        }
        req = self.authenticator.apply(req);

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(path, status = status.as_u16(), "Request failed");
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)?;
        debug!(path, status = status.as_u16(), "Request succeeded");
        Ok(json)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("credential", self.authenticator.credential())
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
