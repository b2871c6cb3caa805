// src/storage/key_value.rs
//
// Key-value store contract

use async_trait::async_trait;
use thiserror::Error;

/// Storage keys for the blobs this application persists.
/// The whole collection lives under one key; settings under another.
pub mod keys {
    /// The anime collection, serialized as a single JSON blob
    pub const LIBRARY: &str = "anime_library_data_v1";

    /// User settings blob
    pub const SETTINGS: &str = "app_settings_v1";
}

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage path unavailable: {0}")]
    Path(String),
}

/// A string-blob key-value store.
///
/// `get` returns None for an absent key; `set` replaces the whole blob;
/// `remove` is a no-op for an absent key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
