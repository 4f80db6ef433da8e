//! Movie records

use super::common::{Country, Genre, Network, SpokenLanguage};
use super::optional_image_url;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie as it appears in listings and search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    #[serde(deserialize_with = "crate::decode::optional_date")]
    pub release_date: Option<NaiveDate>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genre_ids: Vec<u64>,
    pub original_language: String,
    pub original_title: String,
    pub popularity: f64,
    pub video: bool,
    #[serde(default)]
    pub adult: bool,
}

impl Movie {
    pub fn poster_url(&self) -> Option<String> {
        optional_image_url(self.poster_path.as_deref())
    }

    pub fn backdrop_url(&self) -> Option<String> {
        optional_image_url(self.backdrop_path.as_deref())
    }
}

/// Full movie record from `/movie/{id}`
///
/// Carries resolved `genres` in place of the listing's `genre_ids`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub overview: String,
    #[serde(deserialize_with = "crate::decode::optional_date")]
    pub release_date: Option<NaiveDate>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub original_language: String,
    pub original_title: String,
    pub popularity: f64,
    pub video: bool,
    pub adult: bool,
    pub budget: u64,
    pub revenue: u64,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    /// Minutes
    pub runtime: Option<u32>,
    pub status: Option<String>,
    pub tagline: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub production_companies: Vec<Network>,
    #[serde(default)]
    pub production_countries: Vec<Country>,
}

impl MovieDetails {
    pub fn poster_url(&self) -> Option<String> {
        optional_image_url(self.poster_path.as_deref())
    }

    pub fn backdrop_url(&self) -> Option<String> {
        optional_image_url(self.backdrop_path.as_deref())
    }

    /// IMDb page, when the movie has an IMDb id
    pub fn imdb_url(&self) -> Option<String> {
        self.imdb_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://www.imdb.com/title/{id}/"))
    }
}
