// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::services::{LibraryService, PlaybackService, SettingsService};

/// Application state shared with UI surfaces.
/// All fields are Arc-wrapped for thread-safe sharing across callers.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub library_service: Arc<LibraryService>,
    pub settings_service: Arc<SettingsService>,
    pub playback_service: Arc<PlaybackService>,
}
