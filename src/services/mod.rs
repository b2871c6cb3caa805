// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod library_service;
pub mod playback_service;
pub mod settings_service;


// Re-export all services and their types
pub use library_service::{
    AddAnimeRequest,
    AddEpisodeRequest,
    AddSeasonRequest,
    LibraryService,
    UpdateAnimeRequest,
};

pub use settings_service::{
    SettingsService,
    UpdateSettingsRequest,
};

pub use playback_service::{
    PlaybackService,
    PlaybackTarget,
    PlayerState,
    PlayerStatus,
    StartPlaybackRequest,
};
