// src/storage/fs.rs
//
// Filesystem-backed key-value store
//
// PRINCIPLES:
// - One JSON file per key under the application data directory
// - Atomic replacement: write to a temp file, then rename over the target
// - Clear error propagation, no hidden directory creation after open

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::key_value::{KeyValueStore, StorageError};

/// Directory name under the platform data dir
const APP_DIR: &str = "animelib";

/// Key-value store mapping each key to `<root>/<key>.json`
pub struct FsKeyValueStore {
    root: PathBuf,
}

impl FsKeyValueStore {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the store at the platform default location.
    ///
    /// Path structure: `{APP_DATA}/animelib/<key>.json`
    pub fn open_default() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StorageError::Path("could not determine app data directory".into()))?;
        Self::new(data_dir.join(APP_DIR))
    }

    /// The directory this store writes into
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FsKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.blob_path(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Write the new blob beside the target, then rename over it so a
        // crash mid-write leaves the previous blob intact
        let path = self.blob_path(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));

        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.blob_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
