//! Search parameter types

use crate::types::QueryParams;

/// Parameters of `/search/movie`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSearch {
    pub query: String,
    pub include_adult: Option<bool>,
    /// Release year
    pub year: Option<u32>,
}

impl MovieSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            include_adult: None,
            year: None,
        }
    }

    #[must_use]
    pub fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    #[must_use]
    pub fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Query parameters, leaving out unset options
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("query", &self.query)
            .with_opt("include_adult", self.include_adult)
            .with_opt("year", self.year)
    }
}

/// Parameters of `/search/tv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TvSearch {
    pub query: String,
    pub include_adult: Option<bool>,
    /// Year of the first episode
    pub first_air_date_year: Option<u32>,
    /// Year of any episode
    pub year: Option<u32>,
}

impl TvSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            include_adult: None,
            first_air_date_year: None,
            year: None,
        }
    }

    #[must_use]
    pub fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    #[must_use]
    pub fn first_air_date_year(mut self, year: u32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    #[must_use]
    pub fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("query", &self.query)
            .with_opt("include_adult", self.include_adult)
            .with_opt("first_air_date_year", self.first_air_date_year)
            .with_opt("year", self.year)
    }
}

impl From<&str> for MovieSearch {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<&str> for TvSearch {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}
