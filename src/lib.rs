// src/lib.rs
// AnimeLib - Local-first anime catalog and episode library
//
// Architecture:
// - Domain-centric: entities and invariants live in domains
// - Event-driven: every committed mutation emits a change notification
// - Explicit: no implicit behavior, no ambient singletons
// - Local-first: the whole collection persists as one key-value blob

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod application;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;
pub mod storage;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_anime,
    validate_collection,
    validate_episode,
    validate_season,
    // Anime
    Anime,
    // Collection
    Collection,
    // Episode
    Episode,
    // Settings
    Language,
    QualityPreference,
    // Season
    Season,
    Theme,
    UserSettings,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    AnimeAdded,
    AnimeDeleted,
    AnimeUpdated,
    DomainEvent,
    EpisodeAdded,
    EventBus,
    EventLogEntry,
    LibraryCleared,
    LibraryLoaded,
    PlaybackProgressUpdated,
    PlaybackStarted,
    PlaybackStopped,
    SeasonAdded,
    SettingsUpdated,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use storage::{keys, FsKeyValueStore, KeyValueStore, StorageError};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    KvLibraryRepository,
    KvSettingsRepository,
    LibraryRepository,
    SettingsRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AddAnimeRequest,
    AddEpisodeRequest,
    AddSeasonRequest,
    // Library Service
    LibraryService,
    // Playback Service
    PlaybackService,
    PlaybackTarget,
    PlayerState,
    PlayerStatus,
    // Settings Service
    SettingsService,
    StartPlaybackRequest,
    UpdateAnimeRequest,
    UpdateSettingsRequest,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
