// src/services/playback_service.rs
//
// Playback Service - the player boundary
//
// The library resolves an episode to a (title, video URL) target for the
// external player surface and republishes the surface's coarse status ticks
// as events. The store itself never depends on player state.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::events::{EventBus, PlaybackProgressUpdated, PlaybackStarted, PlaybackStopped};
use crate::services::LibraryService;

/// Request to hand an episode to the player surface
#[derive(Debug, Clone)]
pub struct StartPlaybackRequest {
    pub anime_id: Uuid,
    pub season_id: Uuid,
    pub episode_id: Uuid,
}

/// What the player surface needs to begin streaming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackTarget {
    pub episode_id: Uuid,
    pub title: String,
    pub video_url: String,
}

/// Coarse player state reported on each progress tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Loaded,
    Playing,
    Paused,
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerState::Loaded => write!(f, "loaded"),
            PlayerState::Playing => write!(f, "playing"),
            PlayerState::Paused => write!(f, "paused"),
        }
    }
}

/// One status tick from the player surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStatus {
    pub state: PlayerState,
    pub position_seconds: u64,
    pub duration_seconds: Option<u64>,
    pub buffering: bool,
}

pub struct PlaybackService {
    library: Arc<LibraryService>,
    event_bus: Arc<EventBus>,
}

impl PlaybackService {
    pub fn new(library: Arc<LibraryService>, event_bus: Arc<EventBus>) -> Self {
        Self { library, event_bus }
    }

    /// Resolve an episode to its playback target
    pub fn start_playback(&self, request: StartPlaybackRequest) -> AppResult<PlaybackTarget> {
        let episode = self
            .library
            .find_episode(request.anime_id, request.season_id, request.episode_id)
            .ok_or_else(|| AppError::episode_not_found(request.episode_id))?;

        self.event_bus.emit(PlaybackStarted::new(episode.id));

        Ok(PlaybackTarget {
            episode_id: episode.id,
            title: episode.title,
            video_url: episode.video_url,
        })
    }

    /// Republish one coarse status tick from the player surface
    pub fn report_progress(&self, episode_id: Uuid, status: PlayerStatus) {
        self.event_bus.emit(PlaybackProgressUpdated::new(
            episode_id,
            status.state.to_string(),
            status.position_seconds,
            status.duration_seconds,
            status.buffering,
        ));
    }

    /// Note that the player surface stopped an episode
    pub fn stop_playback(&self, episode_id: Uuid) {
        self.event_bus.emit(PlaybackStopped::new(episode_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repositories::{KvLibraryRepository, LibraryRepository};
    use crate::services::{AddAnimeRequest, AddEpisodeRequest, AddSeasonRequest};
    use crate::storage::FsKeyValueStore;
    use tempfile::TempDir;

    async fn library_with_episode(dir: &TempDir) -> (Arc<LibraryService>, StartPlaybackRequest) {
        let store = Arc::new(FsKeyValueStore::new(dir.path().join("store")).unwrap());
        let repo: Arc<dyn LibraryRepository> = Arc::new(KvLibraryRepository::new(store));
        let library = Arc::new(LibraryService::new(repo, Arc::new(EventBus::new())));
        library.load().await;

        let anime_id = library
            .add_anime(AddAnimeRequest {
                title: "Cowboy Bebop".to_string(),
                description: "Space bounty hunters".to_string(),
                image_url: "https://example.com/cover.jpg".to_string(),
            })
            .await
            .unwrap();
        let season_id = library
            .add_season(AddSeasonRequest {
                anime_id,
                number: 1,
                title: None,
            })
            .await
            .unwrap();
        let episode_id = library
            .add_episode(AddEpisodeRequest {
                anime_id,
                season_id,
                title: "Asteroid Blues".to_string(),
                video_url: "https://cdn.example.com/ep1.m3u8".to_string(),
                number: Some(1),
            })
            .await
            .unwrap();

        (
            library,
            StartPlaybackRequest {
                anime_id,
                season_id,
                episode_id,
            },
        )
    }

    #[tokio::test]
    async fn test_start_playback_resolves_target_and_emits() {
        let dir = TempDir::new().unwrap();
        let (library, request) = library_with_episode(&dir).await;
        let event_bus = Arc::new(EventBus::new());
        let playback = PlaybackService::new(library, event_bus.clone());

        let target = playback.start_playback(request.clone()).unwrap();

        assert_eq!(target.episode_id, request.episode_id);
        assert_eq!(target.title, "Asteroid Blues");
        assert_eq!(target.video_url, "https://cdn.example.com/ep1.m3u8");

        let log = event_bus.event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "PlaybackStarted");
    }

    #[tokio::test]
    async fn test_start_playback_for_unknown_episode_fails_not_found() {
        let dir = TempDir::new().unwrap();
        let (library, mut request) = library_with_episode(&dir).await;
        let playback = PlaybackService::new(library, Arc::new(EventBus::new()));

        request.episode_id = Uuid::new_v4();
        let err = playback.start_playback(request).unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_progress_ticks_are_republished_as_events() {
        let dir = TempDir::new().unwrap();
        let (library, request) = library_with_episode(&dir).await;
        let event_bus = Arc::new(EventBus::new());
        let playback = PlaybackService::new(library, event_bus.clone());

        playback.report_progress(
            request.episode_id,
            PlayerStatus {
                state: PlayerState::Playing,
                position_seconds: 42,
                duration_seconds: Some(1440),
                buffering: false,
            },
        );
        playback.stop_playback(request.episode_id);

        let types: Vec<String> = event_bus
            .event_log()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(types, vec!["PlaybackProgressUpdated", "PlaybackStopped"]);
    }
}
