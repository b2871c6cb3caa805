// src/services/library_service.rs
//
// Library Service - the collection store
//
// CRITICAL RULES:
// - Owns the in-memory collection; nothing else mutates it
// - Every mutation persists the whole collection before it becomes visible
// - Mutations are serialized through a single-flight gate, so concurrent
//   callers observe a linearized history (no lost updates)
// - A failed write leaves the committed state untouched; memory and disk
//   never silently diverge

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    validate_anime, validate_collection, validate_episode, validate_season, Anime, Collection,
    Episode, Season,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    AnimeAdded, AnimeDeleted, AnimeUpdated, EpisodeAdded, EventBus, LibraryCleared, LibraryLoaded,
    SeasonAdded,
};
use crate::repositories::LibraryRepository;

/// Request to add a new anime to the library
#[derive(Debug, Clone)]
pub struct AddAnimeRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Request to insert a season under an anime
#[derive(Debug, Clone)]
pub struct AddSeasonRequest {
    pub anime_id: Uuid,
    pub number: u32,
    pub title: Option<String>,
}

/// Request to append an episode to a season
#[derive(Debug, Clone)]
pub struct AddEpisodeRequest {
    pub anime_id: Uuid,
    pub season_id: Uuid,
    pub title: String,
    pub video_url: String,
    pub number: Option<u32>,
}

/// Request to merge updated metadata into an anime.
/// Only these three fields can change; seasons and id never do.
#[derive(Debug, Clone)]
pub struct UpdateAnimeRequest {
    pub anime_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub struct LibraryService {
    repo: Arc<dyn LibraryRepository>,
    event_bus: Arc<EventBus>,

    /// Committed snapshot; readers see it synchronously
    collection: RwLock<Collection>,

    /// Uninitialized until load() completes, Ready afterwards
    loaded: AtomicBool,

    /// Single-flight mutation gate, held across the persistence await
    write_gate: Mutex<()>,
}

impl LibraryService {
    pub fn new(repo: Arc<dyn LibraryRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repo,
            event_bus,
            collection: RwLock::new(Collection::new()),
            loaded: AtomicBool::new(false),
            write_gate: Mutex::new(()),
        }
    }

    /// Load the persisted collection into memory.
    ///
    /// Called once at process start. Never fails: an absent key, a read
    /// error, an unparseable blob, or a structurally invalid collection all
    /// fall back to an empty collection (logged). Idempotent.
    pub async fn load(&self) {
        let _gate = self.write_gate.lock().await;

        let collection = match self.repo.load().await {
            Ok(Some(collection)) => match validate_collection(&collection) {
                Ok(()) => collection,
                Err(e) => {
                    log::warn!("persisted library is structurally invalid, starting empty: {e}");
                    Collection::new()
                }
            },
            Ok(None) => Collection::new(),
            Err(e) => {
                log::warn!("failed to read persisted library, starting empty: {e}");
                Collection::new()
            }
        };

        let anime_count = collection.len();
        *self.collection.write().unwrap() = collection;
        self.loaded.store(true, Ordering::SeqCst);

        self.event_bus.emit(LibraryLoaded::new(anime_count));
    }

    /// Whether load() has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    /// Add a new anime with a fresh id and no seasons
    pub async fn add_anime(&self, request: AddAnimeRequest) -> AppResult<Uuid> {
        let _gate = self.write_gate.lock().await;
        self.ensure_ready()?;

        // 1. Build and validate the entity
        let anime = Anime::new(request.title, request.description, request.image_url);
        validate_anime(&anime)?;

        // 2. Mutate a copy of the committed snapshot
        let anime_id = anime.id;
        let title = anime.title.clone();
        let mut next = self.snapshot();
        next.push_anime(anime);

        // 3. Persist, then commit
        self.persist_and_commit(next).await?;

        // 4. Emit
        self.event_bus.emit(AnimeAdded::new(anime_id, title));

        Ok(anime_id)
    }

    /// Insert a season under an anime, keeping siblings sorted ascending
    pub async fn add_season(&self, request: AddSeasonRequest) -> AppResult<Uuid> {
        let _gate = self.write_gate.lock().await;
        self.ensure_ready()?;

        // 1. Build and validate the entity
        let mut season = Season::new(request.anime_id, request.number);
        season.title = request.title;
        validate_season(&season)?;

        // 2. Locate the parent in a copy of the committed snapshot
        let mut next = self.snapshot();
        let anime = next
            .anime_mut(request.anime_id)
            .ok_or_else(|| AppError::anime_not_found(request.anime_id))?;

        if anime.has_season_number(request.number) {
            return Err(AppError::DuplicateSeason {
                anime_id: request.anime_id,
                number: request.number,
            });
        }

        // 3. Insert in number order
        let season_id = season.id;
        anime.insert_season(season);

        // 4. Persist, then commit
        self.persist_and_commit(next).await?;

        // 5. Emit
        self.event_bus
            .emit(SeasonAdded::new(request.anime_id, season_id, request.number));

        Ok(season_id)
    }

    /// Append an episode to a season, preserving insertion order
    pub async fn add_episode(&self, request: AddEpisodeRequest) -> AppResult<Uuid> {
        let _gate = self.write_gate.lock().await;
        self.ensure_ready()?;

        // 1. Build and validate the entity
        let mut episode = Episode::new(request.season_id, request.title, request.video_url);
        episode.number = request.number;
        validate_episode(&episode)?;

        // 2. Locate the parent season under the given anime
        let mut next = self.snapshot();
        let anime = next
            .anime_mut(request.anime_id)
            .ok_or_else(|| AppError::anime_not_found(request.anime_id))?;
        let season = anime
            .season_mut(request.season_id)
            .ok_or_else(|| AppError::season_not_found(request.season_id))?;

        // 3. Append
        let episode_id = episode.id;
        let title = episode.title.clone();
        season.push_episode(episode);

        // 4. Persist, then commit
        self.persist_and_commit(next).await?;

        // 5. Emit
        self.event_bus.emit(EpisodeAdded::new(
            request.anime_id,
            request.season_id,
            episode_id,
            title,
        ));

        Ok(episode_id)
    }

    /// Merge updated metadata into an existing anime
    pub async fn update_anime(&self, request: UpdateAnimeRequest) -> AppResult<()> {
        let _gate = self.write_gate.lock().await;
        self.ensure_ready()?;

        // 1. Locate and merge in a copy of the committed snapshot
        let mut next = self.snapshot();
        let anime = next
            .anime_mut(request.anime_id)
            .ok_or_else(|| AppError::anime_not_found(request.anime_id))?;

        anime.update_metadata(request.title, request.description, request.image_url);
        validate_anime(anime)?;

        // 2. Persist, then commit
        self.persist_and_commit(next).await?;

        // 3. Emit
        self.event_bus.emit(AnimeUpdated::new(request.anime_id));

        Ok(())
    }

    /// Remove an anime and, by ownership, all its seasons and episodes.
    /// An absent id is a no-op, not an error, and performs no write.
    pub async fn delete_anime(&self, anime_id: Uuid) -> AppResult<()> {
        let _gate = self.write_gate.lock().await;
        self.ensure_ready()?;

        let mut next = self.snapshot();
        if next.remove_anime(anime_id).is_none() {
            return Ok(());
        }

        self.persist_and_commit(next).await?;
        self.event_bus.emit(AnimeDeleted::new(anime_id));

        Ok(())
    }

    /// Drop the whole collection, in memory and in storage
    pub async fn clear(&self) -> AppResult<()> {
        let _gate = self.write_gate.lock().await;
        self.ensure_ready()?;

        self.repo.clear().await.map_err(|e| {
            log::error!("library clear failed, state unchanged: {e}");
            AppError::Persistence(e)
        })?;

        *self.collection.write().unwrap() = Collection::new();
        self.event_bus.emit(LibraryCleared::new());

        Ok(())
    }

    /// Pure lookup, no side effects
    pub fn get_anime(&self, anime_id: Uuid) -> Option<Anime> {
        self.collection.read().unwrap().anime(anime_id).cloned()
    }

    /// Snapshot of every anime in insertion order
    pub fn list_animes(&self) -> Vec<Anime> {
        self.collection.read().unwrap().animes.clone()
    }

    /// Pure lookup through the anime → season → episode path
    pub fn find_episode(
        &self,
        anime_id: Uuid,
        season_id: Uuid,
        episode_id: Uuid,
    ) -> Option<Episode> {
        self.collection
            .read()
            .unwrap()
            .find_episode(anime_id, season_id, episode_id)
            .cloned()
    }

    /// Number of anime entries in the committed snapshot
    pub fn anime_count(&self) -> usize {
        self.collection.read().unwrap().len()
    }

    fn ensure_ready(&self) -> AppResult<()> {
        if self.is_loaded() {
            Ok(())
        } else {
            Err(AppError::NotLoaded)
        }
    }

    fn snapshot(&self) -> Collection {
        self.collection.read().unwrap().clone()
    }

    /// Write the snapshot to storage, then make it the committed state.
    /// On write failure the committed state is untouched.
    async fn persist_and_commit(&self, next: Collection) -> AppResult<()> {
        if let Err(e) = self.repo.save(&next).await {
            log::error!("library write failed, state unchanged: {e}");
            return Err(AppError::Persistence(e));
        }

        *self.collection.write().unwrap() = next;
        Ok(())
    }
}
