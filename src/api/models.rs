use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::slugify;

/// A playable podcast episode as the player sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Episode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_at: Option<NaiveDateTime>,
    /// Audio source handed to the `<audio>` element.
    pub url: String,
    /// Length in whole seconds.
    #[serde(default)]
    pub duration: u32,
}

impl Episode {
    pub fn slug(&self) -> String {
        slugify(&self.id)
    }
}

/// Media block of a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeFile {
    pub url: String,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub duration: u32,
}

/// Episode exactly as the catalog document stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default, alias = "publishedAt")]
    pub published_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: EpisodeFile,
}

impl From<EpisodeRecord> for Episode {
    fn from(record: EpisodeRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            members: record.members,
            thumbnail: record.thumbnail,
            description: record.description,
            published_at: record.published_at,
            url: record.file.url,
            duration: record.file.duration,
        }
    }
}

/// `HH:MM:SS`, zero padded.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}
