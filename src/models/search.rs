//! Mixed-kind search results

use super::movie::Movie;
use super::people::PersonSummary;
use super::tv::TvSeries;
use serde::{Deserialize, Serialize};

/// One hit of `/search/multi`, discriminated by its `media_type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MultiSearchResult {
    Movie(Movie),
    Tv(TvSeries),
    Person(PersonSummary),
}

impl MultiSearchResult {
    pub fn id(&self) -> u64 {
        match self {
            MultiSearchResult::Movie(m) => m.id,
            MultiSearchResult::Tv(t) => t.id,
            MultiSearchResult::Person(p) => p.id,
        }
    }

    /// Title for movies, name for series and people
    pub fn display_name(&self) -> &str {
        match self {
            MultiSearchResult::Movie(m) => &m.title,
            MultiSearchResult::Tv(t) => &t.name,
            MultiSearchResult::Person(p) => &p.name,
        }
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            MultiSearchResult::Movie(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_tv(&self) -> Option<&TvSeries> {
        match self {
            MultiSearchResult::Tv(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_person(&self) -> Option<&PersonSummary> {
        match self {
            MultiSearchResult::Person(p) => Some(p),
            _ => None,
        }
    }
}
