// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// LIBRARY LIFECYCLE EVENTS
// ============================================================================

/// Emitted once the persisted collection has been loaded into memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub anime_count: usize,
}

impl LibraryLoaded {
    pub fn new(anime_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            anime_count,
        }
    }
}

impl DomainEvent for LibraryLoaded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "LibraryLoaded"
    }
}

/// Emitted when the whole collection is cleared
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl LibraryCleared {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for LibraryCleared {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for LibraryCleared {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "LibraryCleared"
    }
}

// ============================================================================
// COLLECTION MUTATION EVENTS
// ============================================================================

/// Emitted when a new Anime entry is added to the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub anime_id: Uuid,
    pub title: String,
}

impl AnimeAdded {
    pub fn new(anime_id: Uuid, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            anime_id,
            title,
        }
    }
}

impl DomainEvent for AnimeAdded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "AnimeAdded"
    }
}

/// Emitted when anime metadata is updated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub anime_id: Uuid,
}

impl AnimeUpdated {
    pub fn new(anime_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            anime_id,
        }
    }
}

impl DomainEvent for AnimeUpdated {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "AnimeUpdated"
    }
}

/// Emitted when an anime and its whole subtree are removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub anime_id: Uuid,
}

impl AnimeDeleted {
    pub fn new(anime_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            anime_id,
        }
    }
}

impl DomainEvent for AnimeDeleted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "AnimeDeleted"
    }
}

/// Emitted when a season is inserted under an anime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub anime_id: Uuid,
    pub season_id: Uuid,
    pub number: u32,
}

impl SeasonAdded {
    pub fn new(anime_id: Uuid, season_id: Uuid, number: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            anime_id,
            season_id,
            number,
        }
    }
}

impl DomainEvent for SeasonAdded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SeasonAdded"
    }
}

/// Emitted when an episode is appended to a season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub anime_id: Uuid,
    pub season_id: Uuid,
    pub episode_id: Uuid,
    pub title: String,
}

impl EpisodeAdded {
    pub fn new(anime_id: Uuid, season_id: Uuid, episode_id: Uuid, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            anime_id,
            season_id,
            episode_id,
            title,
        }
    }
}

impl DomainEvent for EpisodeAdded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "EpisodeAdded"
    }
}

// ============================================================================
// SETTINGS EVENTS
// ============================================================================

/// Emitted when user settings are committed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl SettingsUpdated {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for SettingsUpdated {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for SettingsUpdated {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SettingsUpdated"
    }
}

// ============================================================================
// PLAYBACK BOUNDARY EVENTS
// ============================================================================

/// Emitted when an episode is handed to the player surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: Uuid,
}

impl PlaybackStarted {
    pub fn new(episode_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id,
        }
    }
}

impl DomainEvent for PlaybackStarted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "PlaybackStarted"
    }
}

/// Emitted for each coarse status tick reported by the player surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackProgressUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: Uuid,
    /// "loaded", "playing" or "paused"
    pub state: String,
    pub position_seconds: u64,
    pub duration_seconds: Option<u64>,
    pub buffering: bool,
}

impl PlaybackProgressUpdated {
    pub fn new(
        episode_id: Uuid,
        state: String,
        position_seconds: u64,
        duration_seconds: Option<u64>,
        buffering: bool,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id,
            state,
            position_seconds,
            duration_seconds,
            buffering,
        }
    }
}

impl DomainEvent for PlaybackProgressUpdated {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "PlaybackProgressUpdated"
    }
}

/// Emitted when the player surface stops an episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStopped {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: Uuid,
}

impl PlaybackStopped {
    pub fn new(episode_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id,
        }
    }
}

impl DomainEvent for PlaybackStopped {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "PlaybackStopped"
    }
}
