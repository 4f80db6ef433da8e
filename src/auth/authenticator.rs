//! Authenticator implementation
//!
//! Handles applying the configured credential to requests.

use super::types::Credential;
use reqwest::RequestBuilder;

/// Query parameter carrying a v3 API key
pub const API_KEY_PARAM: &str = "api_key";

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    credential: Credential,
}

impl Authenticator {
    /// Create a new authenticator for the given credential
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// The credential being applied
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::ApiKey(key) => req.query(&[(API_KEY_PARAM, key.as_str())]),
            Credential::BearerToken(token) => req.bearer_auth(token),
        }
    }
}
