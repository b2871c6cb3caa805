// src/repositories/settings_repository.rs
//
// User settings persistence over the key-value boundary

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::UserSettings;
use crate::storage::{keys, KeyValueStore, StorageError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read the persisted settings; None when nothing has been saved yet
    async fn load(&self) -> Result<Option<UserSettings>, StorageError>;

    /// Replace the persisted settings
    async fn save(&self, settings: &UserSettings) -> Result<(), StorageError>;
}

pub struct KvSettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvSettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for KvSettingsRepository {
    async fn load(&self) -> Result<Option<UserSettings>, StorageError> {
        match self.store.get(keys::SETTINGS).await? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, settings: &UserSettings) -> Result<(), StorageError> {
        let blob = serde_json::to_string(settings)?;
        self.store.set(keys::SETTINGS, &blob).await
    }
}
