//! Common types used throughout the client
//!
//! Query parameter values, media kinds and other small shared types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Query Parameters
// ============================================================================

/// A scalar query parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Free-form string
    Str(String),
    /// Integer (years, ids, page numbers)
    Int(i64),
    /// Flag, rendered as `true` / `false`
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(i) => write!(f, "{i}"),
            QueryValue::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! query_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

query_value_from_int!(i32, i64, u8, u16, u32);

/// Query parameters for a single request, keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, QueryValue>);

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter only when a value is present
    #[must_use]
    pub fn with_opt<V: Into<QueryValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Insert a parameter, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    /// Check if a parameter is set
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy every parameter of `other` over this set
    pub fn extend(&mut self, other: &QueryParams) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Render as string pairs, ready for a query string
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

// ============================================================================
// Media Kind
// ============================================================================

/// Top-level media kind exposed by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Feature films
    Movie,
    /// TV series
    Tv,
}

impl MediaKind {
    /// Path segment used by the API for this kind
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}
