//! Typed API records
//!
//! # Overview
//!
//! Serde records mirroring the API's JSON. Listing items (`Movie`,
//! `TvSeries`, `MultiSearchResult`) are what paginators yield; the rest come
//! back from single-record endpoints.
//!
//! Release and air dates decode to `Option<NaiveDate>`, with `""` and `null`
//! both meaning "not known yet"; the key itself must be present. Image paths are kept as returned and turned
//! into full URLs on demand:
//!
//! ```
//! use tmdb_client::models::image_url;
//!
//! assert_eq!(
//!     image_url("/abc.jpg", "w500"),
//!     "https://image.tmdb.org/t/p/w500/abc.jpg"
//! );
//! ```

mod common;
mod media;
mod movie;
mod people;
mod search;
mod tv;

pub use common::{Certification, Certifications, Country, Genre, Language, Network, SpokenLanguage};
pub use media::{
    EpisodeImages, MediaImage, MediaVideo, MovieImages, SeasonImages, TvSeriesImages,
};
pub use movie::{Movie, MovieDetails};
pub use people::{CastMember, Creator, CrewMember, MovieCredits, PersonSummary, TvSeriesCredits};
pub use search::MultiSearchResult;
pub use tv::{EpisodeDetails, SeasonDetails, TvSeries, TvSeriesDetails, TvSeriesEpisode, TvSeriesSeason};

/// Root of the image CDN
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Size segment used by the `*_url()` helpers
pub const DEFAULT_IMAGE_SIZE: &str = "original";

/// Full URL of an image path at the given size (`w500`, `original`, ...)
pub fn image_url(path: &str, size: &str) -> String {
    format!("{IMAGE_BASE_URL}{size}{path}")
}

/// `image_url` at the default size, skipping absent or empty paths
pub(crate) fn optional_image_url(path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| image_url(p, DEFAULT_IMAGE_SIZE))
}

#[cfg(test)]
mod tests;
