// src/repositories/library_repository.rs
//
// Collection persistence over the key-value boundary

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Collection;
use crate::storage::{keys, KeyValueStore, StorageError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// Read the persisted collection; None when nothing has been saved yet
    async fn load(&self) -> Result<Option<Collection>, StorageError>;

    /// Replace the persisted collection with the given snapshot
    async fn save(&self, collection: &Collection) -> Result<(), StorageError>;

    /// Drop the persisted blob entirely
    async fn clear(&self) -> Result<(), StorageError>;
}

pub struct KvLibraryRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvLibraryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LibraryRepository for KvLibraryRepository {
    async fn load(&self) -> Result<Option<Collection>, StorageError> {
        match self.store.get(keys::LIBRARY).await? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        let blob = serde_json::to_string(collection)?;
        self.store.set(keys::LIBRARY, &blob).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(keys::LIBRARY).await
    }
}
