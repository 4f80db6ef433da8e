//! Small records shared across movie and TV responses

use super::optional_image_url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Genre id and display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Language spoken in a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub english_name: String,
    pub iso_639_1: String,
    pub name: String,
}

/// Language spoken in a TV series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub english_name: String,
    pub iso_639_1: String,
    pub name: String,
}

/// Production country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub iso_3166_1: String,
    pub name: String,
}

/// Broadcast network or production company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: String,
}

impl Network {
    pub fn logo_url(&self) -> Option<String> {
        optional_image_url(self.logo_path.as_deref())
    }
}

/// One age rating of a country's rating system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub certification: String,
    pub meaning: String,
    pub order: i32,
}

/// Rating systems keyed by ISO 3166-1 country code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certifications {
    pub certifications: BTreeMap<String, Vec<Certification>>,
}

impl Certifications {
    /// Ratings of one country, in the server's order
    pub fn for_country(&self, iso_3166_1: &str) -> Option<&[Certification]> {
        self.certifications.get(iso_3166_1).map(Vec::as_slice)
    }
}
