//! Cast, crew and people records

use super::optional_image_url;
use serde::{Deserialize, Serialize};

/// Person credited behind the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub credit_id: String,
    pub name: String,
    pub original_name: String,
    pub adult: bool,
    /// 0 unspecified, 1 female, 2 male, 3 non-binary
    pub gender: u8,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    pub known_for_department: String,
    pub popularity: f64,
}

impl CrewMember {
    pub fn profile_url(&self) -> Option<String> {
        optional_image_url(self.profile_path.as_deref())
    }
}

/// Person credited in front of the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub credit_id: String,
    pub name: String,
    pub original_name: String,
    pub adult: bool,
    pub gender: u8,
    pub profile_path: Option<String>,
    pub known_for_department: String,
    pub popularity: f64,
    pub character: String,
    /// Billing position
    #[serde(default)]
    pub order: Option<u32>,
}

impl CastMember {
    pub fn profile_url(&self) -> Option<String> {
        optional_image_url(self.profile_path.as_deref())
    }
}

/// Series creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: u64,
    pub credit_id: String,
    pub name: String,
    pub gender: u8,
    pub profile_path: Option<String>,
}

impl Creator {
    pub fn profile_url(&self) -> Option<String> {
        optional_image_url(self.profile_path.as_deref())
    }
}

/// Person as returned by multi search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub gender: u8,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub popularity: f64,
}

impl PersonSummary {
    pub fn profile_url(&self) -> Option<String> {
        optional_image_url(self.profile_path.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCredits {
    pub id: u64,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl MovieCredits {
    /// Crew members with the given job ("Director", "Screenplay", ...)
    pub fn crew_with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a CrewMember> + 'a {
        self.crew.iter().filter(move |c| c.job.as_deref() == Some(job))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvSeriesCredits {
    pub id: u64,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}
