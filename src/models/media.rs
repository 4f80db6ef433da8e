//! Images and videos attached to movies, series, seasons and episodes

use super::{image_url, DEFAULT_IMAGE_SIZE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One image file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaImage {
    pub aspect_ratio: f64,
    pub file_path: String,
    pub height: u32,
    pub width: u32,
    /// Language of any text in the image, `None` for textless images
    pub iso_639_1: Option<String>,
    pub vote_average: f64,
    pub vote_count: u64,
}

impl MediaImage {
    /// Full URL at original size
    pub fn url(&self) -> String {
        image_url(&self.file_path, DEFAULT_IMAGE_SIZE)
    }

    /// Full URL at the given size
    pub fn sized_url(&self, size: &str) -> String {
        image_url(&self.file_path, size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieImages {
    pub backdrops: Vec<MediaImage>,
    pub logos: Vec<MediaImage>,
    pub posters: Vec<MediaImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvSeriesImages {
    pub backdrops: Vec<MediaImage>,
    pub logos: Vec<MediaImage>,
    pub posters: Vec<MediaImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonImages {
    pub posters: Vec<MediaImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeImages {
    pub stills: Vec<MediaImage>,
}

/// Trailer, teaser, clip or featurette hosted on an external site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaVideo {
    pub id: String,
    pub iso_639_1: String,
    pub iso_3166_1: String,
    /// Site-specific video key (the YouTube video id for `site == "YouTube"`)
    pub key: String,
    pub name: String,
    pub site: String,
    /// Vertical resolution
    pub size: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub official: bool,
    pub published_at: DateTime<Utc>,
}
