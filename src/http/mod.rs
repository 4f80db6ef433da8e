//! HTTP transport module
//!
//! Performs authenticated GET requests against the API and returns parsed
//! JSON. Everything above this layer depends only on the [`Transport`] trait.
//!
//! # Features
//!
//! - **Authentication**: credential applied uniformly by the transport
//! - **Default language**: configured `language` added unless overridden
//! - **Error classification**: non-2xx responses become `Error::HttpStatus`
//!
//! No retry or rate limiting happens here: every call maps to
//! exactly one HTTP request.

mod client;
mod transport;

pub use client::HttpClient;
pub(crate) use client::LANGUAGE_PARAM;
pub use transport::Transport;
