//! Error types for the TMDb client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the TMDb client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No credential configured: provide either an API key or a bearer token")]
    MissingCredential,

    #[error("Conflicting credentials: provide either an API key or a bearer token, not both")]
    ConflictingCredentials,

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode '{path}': {message}")]
    Decode { path: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("Invalid page number {page}: pages start at 1")]
    InvalidPage { page: u32 },

    #[error("No page after {page} (total pages: {total_pages})")]
    NoNextPage { page: u32, total_pages: u32 },

    #[error("Page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },

    #[error("Genre with id {id} not found")]
    GenreNotFound { id: u64 },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// HTTP status code, if this error came from a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a caller mistake rather than a remote failure
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPage { .. }
                | Error::NoNextPage { .. }
                | Error::PageOutOfRange { .. }
                | Error::GenreNotFound { .. }
        )
    }

    /// Check if this error came from the transport (network or HTTP status)
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }
}

/// Result type alias for the TMDb client
pub type Result<T> = std::result::Result<T, Error>;
