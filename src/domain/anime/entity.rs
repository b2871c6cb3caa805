use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::season::Season;

/// A catalog entry (a show) with its metadata and ordered seasons
/// This is the root entity of the library tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Display title
    pub title: String,

    /// Synopsis shown on the detail surface
    pub description: String,

    /// Cover image reference (remote URI)
    pub image_url: String,

    /// Seasons owned by this anime, kept sorted ascending by number
    pub seasons: Vec<Season>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Anime {
    /// Create a new Anime with no seasons
    /// This is the only way to construct a valid Anime
    pub fn new(title: String, description: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            image_url,
            seasons: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge updated metadata
    /// Only title, description and image_url can change; id and seasons never do.
    /// Preserves the creation timestamp and refreshes the modification timestamp.
    pub fn update_metadata(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        image_url: Option<String>,
    ) {
        if let Some(t) = title {
            self.title = t;
        }
        if let Some(d) = description {
            self.description = d;
        }
        if let Some(i) = image_url {
            self.image_url = i;
        }
        self.updated_at = Utc::now();
    }

    /// Season lookup by id
    pub fn season(&self, season_id: Uuid) -> Option<&Season> {
        self.seasons.iter().find(|s| s.id == season_id)
    }

    /// Mutable season lookup by id
    pub fn season_mut(&mut self, season_id: Uuid) -> Option<&mut Season> {
        self.seasons.iter_mut().find(|s| s.id == season_id)
    }

    /// Whether a sibling season already uses this number
    pub fn has_season_number(&self, number: u32) -> bool {
        self.seasons.iter().any(|s| s.number == number)
    }

    /// Insert a season keeping the list sorted ascending by number
    /// The caller must have rejected duplicate numbers already
    pub fn insert_season(&mut self, season: Season) {
        let at = self.seasons.partition_point(|s| s.number < season.number);
        self.seasons.insert(at, season);
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Display for Anime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
