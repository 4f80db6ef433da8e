//! Transport contract

use crate::error::Result;
use crate::types::QueryParams;
use async_trait::async_trait;
use serde_json::Value;

/// Performs one authenticated GET and returns the parsed JSON body
///
/// Implementations return `Error::HttpStatus` for non-2xx responses and
/// `Error::Http` for network failures. They must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` (relative to the API root) with the given query parameters
    async fn get_json(&self, path: &str, query: &QueryParams) -> Result<Value>;
}
