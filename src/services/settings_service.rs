// src/services/settings_service.rs
//
// Settings Service - user preferences
//
// Settings follow the same commit-after-write policy as the library store,
// but reads never gate on load(): the defaults are always a valid state.

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;

use crate::domain::{Language, QualityPreference, Theme, UserSettings};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SettingsUpdated};
use crate::repositories::SettingsRepository;

/// Partial settings update; unspecified fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsRequest {
    pub language: Option<Language>,
    pub theme: Option<Theme>,
    pub auto_play: Option<bool>,
    pub quality: Option<QualityPreference>,
}

pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
    event_bus: Arc<EventBus>,
    settings: RwLock<UserSettings>,
    write_gate: Mutex<()>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repo,
            event_bus,
            settings: RwLock::new(UserSettings::default()),
            write_gate: Mutex::new(()),
        }
    }

    /// Load persisted settings; an absent or unreadable blob falls back to
    /// the defaults (logged, never an error)
    pub async fn load(&self) {
        let settings = match self.repo.load().await {
            Ok(Some(settings)) => settings,
            Ok(None) => UserSettings::default(),
            Err(e) => {
                log::warn!("failed to read persisted settings, using defaults: {e}");
                UserSettings::default()
            }
        };

        *self.settings.write().unwrap() = settings;
    }

    /// The current settings snapshot
    pub fn current(&self) -> UserSettings {
        self.settings.read().unwrap().clone()
    }

    /// Merge a partial update and persist the result
    pub async fn update(&self, request: UpdateSettingsRequest) -> AppResult<UserSettings> {
        let _gate = self.write_gate.lock().await;

        let mut next = self.current();
        next.merge(
            request.language,
            request.theme,
            request.auto_play,
            request.quality,
        );

        if let Err(e) = self.repo.save(&next).await {
            log::error!("settings write failed, state unchanged: {e}");
            return Err(AppError::Persistence(e));
        }

        *self.settings.write().unwrap() = next.clone();
        self.event_bus.emit(SettingsUpdated::new());

        Ok(next)
    }
}
