use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::anime::Anime;
use crate::domain::episode::Episode;

/// The full set of anime entries and their nested seasons/episodes.
/// This is the unit of persistence: the whole tree is serialized as one blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Anime entries in insertion order
    pub animes: Vec<Anime>,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of anime entries
    pub fn len(&self) -> usize {
        self.animes.len()
    }

    /// Whether the collection holds no entries
    pub fn is_empty(&self) -> bool {
        self.animes.is_empty()
    }

    /// Anime lookup by id
    pub fn anime(&self, anime_id: Uuid) -> Option<&Anime> {
        self.animes.iter().find(|a| a.id == anime_id)
    }

    /// Mutable anime lookup by id
    pub fn anime_mut(&mut self, anime_id: Uuid) -> Option<&mut Anime> {
        self.animes.iter_mut().find(|a| a.id == anime_id)
    }

    /// Append an anime, preserving insertion order
    pub fn push_anime(&mut self, anime: Anime) {
        self.animes.push(anime);
    }

    /// Remove an anime and, by ownership, every season and episode under it.
    /// Returns the removed entry, or None when the id is absent.
    pub fn remove_anime(&mut self, anime_id: Uuid) -> Option<Anime> {
        let at = self.animes.iter().position(|a| a.id == anime_id)?;
        Some(self.animes.remove(at))
    }

    /// Episode lookup through the full anime → season → episode path
    pub fn find_episode(
        &self,
        anime_id: Uuid,
        season_id: Uuid,
        episode_id: Uuid,
    ) -> Option<&Episode> {
        self.anime(anime_id)?.season(season_id)?.episode(episode_id)
    }
}
