// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # tmdb-client
//!
//! A typed, async client for The Movie Database (TMDb) v3 API.
//!
//! ## Features
//!
//! - **Lazy pagination**: listing endpoints return a `Paginator` that fetches
//!   one page per navigation call and remembers the server's page counts
//! - **Typed records**: movies, series, seasons, episodes, credits, images
//! - **Explicit failures**: transport, HTTP status and decode errors (with the
//!   failing field path) are all surfaced, nothing is silently skipped
//! - **Pluggable transport**: everything above HTTP talks to the `Transport`
//!   trait, so tests can serve canned JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tmdb_client::{ClientConfig, TmdbClient};
//!
//! #[tokio::main]
//! async fn main() -> tmdb_client::Result<()> {
//!     let config = ClientConfig::builder()
//!         .api_key("your-api-key")
//!         .language("en-US")
//!         .build()?;
//!     let client = TmdbClient::new(&config)?;
//!
//!     let mut popular = client.popular_movies();
//!     for movie in popular.get_data().await? {
//!         println!("{} ({:?})", movie.title, movie.release_date);
//!     }
//!     while popular.has_next_page().await? && popular.page() < 3 {
//!         let count = popular.next_page().await?.len();
//!         println!("page {} has {count} movies", popular.page());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ TmdbClient   discover / lists / search / details / genres │
//! └──────────────────────────────────────────────────────────┘
//!          │ Paginator<T>                   │ single records
//! ┌────────┴─────────┬──────────────────────┴─────────────────┐
//! │ Pagination       │ Decode                                 │
//! │ page state,      │ serde + field paths                    │
//! │ envelope         │                                        │
//! └────────┬─────────┴────────────────────────────────────────┘
//!          │ Transport::get_json(path, query)
//! ┌────────┴─────────────────────────────────────────────────┐
//! │ HttpClient   base URL, credential, default language       │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credentials
pub mod auth;

/// HTTP transport
pub mod http;

/// Lazy page-numbered listings
pub mod pagination;

/// JSON to typed record decoding
pub mod decode;

/// Typed API records
pub mod models;

/// Client configuration
pub mod config;

/// Endpoint bindings
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::Credential;
pub use client::{MovieSearch, TmdbClient, TvSearch};
pub use config::ClientConfig;
pub use http::{HttpClient, Transport};
pub use pagination::{Endpoint, PageBounds, Paginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
