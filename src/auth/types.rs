//! Credential types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential used to authenticate every request
///
/// The API accepts either a v3 API key passed as a query parameter or a v4
/// read access token passed as a bearer token. Exactly one is used.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Credential {
    /// v3 API key, sent as the `api_key` query parameter
    ApiKey(String),
    /// v4 read access token, sent as `Authorization: Bearer <token>`
    BearerToken(String),
}

impl Credential {
    /// Create an API key credential
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    /// Create a bearer token credential
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::BearerToken(token.into())
    }

    /// Build a credential from optional parts, requiring exactly one
    pub fn from_parts(
        api_key: Option<String>,
        bearer_token: Option<String>,
    ) -> crate::Result<Self> {
        let api_key = api_key.filter(|k| !k.is_empty());
        let bearer_token = bearer_token.filter(|t| !t.is_empty());

        match (api_key, bearer_token) {
            (Some(key), None) => Ok(Self::ApiKey(key)),
            (None, Some(token)) => Ok(Self::BearerToken(token)),
            (Some(_), Some(_)) => Err(crate::Error::ConflictingCredentials),
            (None, None) => Err(crate::Error::MissingCredential),
        }
    }

    /// The raw secret value
    pub fn secret(&self) -> &str {
        match self {
            Credential::ApiKey(v) | Credential::BearerToken(v) => v,
        }
    }

    /// Short name of the credential kind
    pub fn kind(&self) -> &'static str {
        match self {
            Credential::ApiKey(_) => "api_key",
            Credential::BearerToken(_) => "bearer_token",
        }
    }
}

// Secrets never end up in logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ApiKey(_) => f.debug_tuple("ApiKey").field(&"***").finish(),
            Credential::BearerToken(_) => f.debug_tuple("BearerToken").field(&"***").finish(),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let cred = Credential::api_key("super-secret");
        let printed = format!("{cred:?}");
        assert!(!printed.contains("super-secret"));
        assert_eq!(printed, r#"ApiKey("***")"#);
    }

    #[test]
    fn test_credential_kind() {
        assert_eq!(Credential::api_key("k").kind(), "api_key");
        assert_eq!(Credential::bearer("t").kind(), "bearer_token");
        assert_eq!(Credential::bearer("t").secret(), "t");
    }
}
