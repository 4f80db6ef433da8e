//! Pagination module
//!
//! # Overview
//!
//! Page-numbered collection endpoints return one slice of results per call
//! together with `page`, `total_pages` and `total_results`. A [`Paginator`]
//! binds one such endpoint (path plus fixed filters) to a per-item decoder
//! and walks it a page at a time:
//!
//! ```rust,ignore
//! let mut popular = client.popular_movies();
//! for movie in popular.get_data().await? {
//!     println!("{}", movie.title);
//! }
//! while popular.has_next_page().await? {
//!     let page = popular.next_page().await?;
//!     // ...
//! }
//! ```
//!
//! Only the most recently fetched page is kept in memory.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{Endpoint, PageBounds, PageEnvelope, PAGE_PARAM};
