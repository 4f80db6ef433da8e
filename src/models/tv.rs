//! TV series, season and episode records

use super::common::{Country, Genre, Language, Network};
use super::optional_image_url;
use super::people::{CastMember, Creator, CrewMember};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// TV series as it appears in listings and search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvSeries {
    pub id: u64,
    pub name: String,
    pub overview: String,
    #[serde(deserialize_with = "crate::decode::optional_date")]
    pub first_air_date: Option<NaiveDate>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genre_ids: Vec<u64>,
    pub origin_country: Vec<String>,
    pub original_language: String,
    pub original_name: String,
    pub popularity: f64,
}

impl TvSeries {
    pub fn poster_url(&self) -> Option<String> {
        optional_image_url(self.poster_path.as_deref())
    }

    pub fn backdrop_url(&self) -> Option<String> {
        optional_image_url(self.backdrop_path.as_deref())
    }
}

/// Season summary embedded in a series record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvSeriesSeason {
    pub id: u64,
    #[serde(deserialize_with = "crate::decode::optional_date")]
    pub air_date: Option<NaiveDate>,
    /// Absent on `/tv/{id}/season/{n}` responses
    #[serde(default)]
    pub episode_count: Option<u32>,
    pub name: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub season_number: u32,
    pub vote_average: f64,
}

impl TvSeriesSeason {
    pub fn poster_url(&self) -> Option<String> {
        optional_image_url(self.poster_path.as_deref())
    }
}

/// Episode summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvSeriesEpisode {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub vote_average: f64,
    pub vote_count: u64,
    #[serde(deserialize_with = "crate::decode::optional_date")]
    pub air_date: Option<NaiveDate>,
    pub episode_number: u32,
    pub production_code: String,
    /// Minutes
    pub runtime: Option<u32>,
    pub season_number: u32,
    #[serde(default)]
    pub show_id: Option<u64>,
    pub still_path: Option<String>,
}

impl TvSeriesEpisode {
    pub fn still_url(&self) -> Option<String> {
        optional_image_url(self.still_path.as_deref())
    }

    /// `S01E05` style label
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season_number, self.episode_number)
    }
}

/// Episode with its crew and guest cast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetails {
    #[serde(flatten)]
    pub episode: TvSeriesEpisode,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub guest_stars: Vec<CastMember>,
}

/// Full series record from `/tv/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvSeriesDetails {
    pub id: u64,
    pub name: String,
    pub overview: String,
    #[serde(deserialize_with = "crate::decode::optional_date")]
    pub first_air_date: Option<NaiveDate>,
    #[serde(deserialize_with = "crate::decode::optional_date")]
    pub last_air_date: Option<NaiveDate>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub origin_country: Vec<String>,
    pub original_language: String,
    pub original_name: String,
    pub popularity: f64,
    pub created_by: Vec<Creator>,
    /// Minutes, one entry per distinct typical runtime
    pub episode_run_time: Vec<u32>,
    pub genres: Vec<Genre>,
    pub homepage: String,
    pub in_production: bool,
    pub languages: Vec<String>,
    pub last_episode_to_air: Option<TvSeriesEpisode>,
    pub next_episode_to_air: Option<TvSeriesEpisode>,
    pub networks: Vec<Network>,
    pub number_of_episodes: u32,
    pub number_of_seasons: u32,
    pub production_companies: Vec<Network>,
    pub production_countries: Vec<Country>,
    pub seasons: Vec<TvSeriesSeason>,
    pub spoken_languages: Vec<Language>,
    pub status: String,
    pub tagline: String,
    /// "Scripted", "Miniseries", "Documentary", ...
    #[serde(rename = "type")]
    pub kind: String,
}

impl TvSeriesDetails {
    pub fn poster_url(&self) -> Option<String> {
        optional_image_url(self.poster_path.as_deref())
    }

    pub fn backdrop_url(&self) -> Option<String> {
        optional_image_url(self.backdrop_path.as_deref())
    }
}

/// Season with every episode, from `/tv/{id}/season/{n}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDetails {
    #[serde(flatten)]
    pub season: TvSeriesSeason,
    pub episodes: Vec<EpisodeDetails>,
}

impl SeasonDetails {
    pub fn poster_url(&self) -> Option<String> {
        self.season.poster_url()
    }

    /// Episode by its number within the season
    pub fn episode(&self, episode_number: u32) -> Option<&EpisodeDetails> {
        self.episodes
            .iter()
            .find(|e| e.episode.episode_number == episode_number)
    }
}
