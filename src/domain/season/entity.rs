use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::episode::Episode;

/// An ordered grouping of episodes under an Anime, identified by a
/// sequence number unique among its siblings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Back-reference to the owning anime (not ownership)
    pub anime_id: Uuid,

    /// Sequence number, positive and unique within the parent anime
    pub number: u32,

    /// Optional label ("Final Season")
    pub title: Option<String>,

    /// Episodes in insertion order
    pub episodes: Vec<Episode>,
}

impl Season {
    /// Create a new Season with no episodes
    /// anime_id MUST reference an existing anime (checked by the caller)
    pub fn new(anime_id: Uuid, number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            anime_id,
            number,
            title: None,
            episodes: Vec::new(),
        }
    }

    /// Episode lookup by id
    pub fn episode(&self, episode_id: Uuid) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.id == episode_id)
    }

    /// Append an episode, preserving insertion order
    pub fn push_episode(&mut self, episode: Episode) {
        self.episodes.push(episode);
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => write!(f, "Season {} ({})", self.number, title),
            None => write!(f, "Season {}", self.number),
        }
    }
}
