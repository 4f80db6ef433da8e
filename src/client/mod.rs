//! High-level API client
//!
//! # Overview
//!
//! `TmdbClient` binds every supported endpoint to a typed result. Listing
//! endpoints return a [`Paginator`](crate::pagination::Paginator) that has not
//! fetched anything yet; single-record endpoints fetch and decode right away.
//!
//! ```rust,no_run
//! use tmdb_client::{ClientConfig, MovieSearch, TmdbClient};
//!
//! # async fn run() -> tmdb_client::Result<()> {
//! let client = TmdbClient::new(&ClientConfig::from_env()?)?;
//!
//! let mut results = client.search_movies(MovieSearch::new("alien").year(1979));
//! if let Some(movie) = results.first().await? {
//!     let details = client.movie_details(movie.id).await?;
//!     println!("{} ({:?} min)", details.title, details.runtime);
//! }
//! # Ok(())
//! # }
//! ```

mod tmdb;
mod types;

pub use tmdb::TmdbClient;
pub use types::{MovieSearch, TvSearch};
