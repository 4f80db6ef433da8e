//! Pagination types
//!
//! The endpoint binding, the response envelope and the out-of-range policy.

use crate::decode::kind_of;
use crate::error::{Error, Result};
use crate::types::QueryParams;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameter carrying the 1-based page number
pub const PAGE_PARAM: &str = "page";

// ============================================================================
// Endpoint
// ============================================================================

/// A listing endpoint: path plus the filters fixed for one search or listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    params: QueryParams,
}

impl Endpoint {
    /// Endpoint with no fixed filters
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: QueryParams::new(),
        }
    }

    /// Endpoint with fixed filters
    pub fn with_params(path: impl Into<String>, params: QueryParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Request path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fixed filters
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Full query for one page; the page number overrides any `page` filter
    pub fn query_for_page(&self, page: u32) -> QueryParams {
        self.params.clone().with(PAGE_PARAM, page)
    }
}

// ============================================================================
// Page Bounds
// ============================================================================

/// What `get_page` does with a page number beyond the known last page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageBounds {
    /// Send the page number as-is and let the server decide
    #[default]
    Delegate,
    /// Request the last known page instead
    Clamp,
    /// Fail with `Error::PageOutOfRange` without a request
    Reject,
}

impl PageBounds {
    /// Page to actually request for `requested`, given the last known total
    pub fn resolve(self, requested: u32, total_pages: Option<u32>) -> Result<u32> {
        let Some(total) = total_pages else {
            return Ok(requested);
        };
        if requested <= total {
            return Ok(requested);
        }

        match self {
            PageBounds::Delegate => Ok(requested),
            PageBounds::Clamp => Ok(total.max(1)),
            PageBounds::Reject => Err(Error::PageOutOfRange {
                page: requested,
                total_pages: total,
            }),
        }
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Outer structure of a listing response
///
/// Metadata fields that are missing or not unsigned integers are reported as
/// unknown; only `results` is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvelope {
    /// Page number echoed by the server
    pub page: Option<u32>,
    /// Total number of pages
    pub total_pages: Option<u32>,
    /// Total number of items across all pages
    pub total_results: Option<u64>,
    /// Raw items of this page, in server order
    pub results: Vec<Value>,
}

impl PageEnvelope {
    /// Split a response body into metadata and raw items
    pub fn from_value(body: Value) -> Result<Self> {
        let mut map = match body {
            Value::Object(map) => map,
            other => {
                return Err(Error::decode(
                    ".",
                    format!("expected a page object, found {}", kind_of(&other)),
                ))
            }
        };

        let results = match map.remove("results") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(Error::decode(
                    "results",
                    format!("expected an array, found {}", kind_of(&other)),
                ))
            }
            None => return Err(Error::decode("results", "missing field")),
        };

        Ok(Self {
            page: read_u32(&map, "page"),
            total_pages: read_u32(&map, "total_pages"),
            total_results: map.get("total_results").and_then(Value::as_u64),
            results,
        })
    }
}

fn read_u32(map: &Map<String, Value>, key: &str) -> Option<u32> {
    map.get(key)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
}
