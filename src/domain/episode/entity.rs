use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single playable video unit under a Season
/// Episodes are what gets handed to the player surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Back-reference to the owning season (not ownership)
    pub season_id: Uuid,

    /// Episode title
    pub title: String,

    /// Remote video source handed to the player surface
    pub video_url: String,

    /// Optional display number; insertion order is the ordering source of truth
    pub number: Option<u32>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Episode {
    /// Create a new Episode
    /// season_id MUST reference an existing season (checked by the caller)
    pub fn new(season_id: Uuid, title: String, video_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            season_id,
            title,
            video_url,
            number: None,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{}. {}", number, self.title),
            None => write!(f, "{}", self.title),
        }
    }
}
