// src/storage/mod.rs
//
// Storage layer - the key-value persistence boundary
//
// CRITICAL RULES:
// - Blobs are opaque strings here; shaping them is the repositories' job
// - One key, one blob; no partial or range operations
// - Writes are atomic: readers never observe a half-written blob

pub mod fs;
pub mod key_value;

pub use fs::FsKeyValueStore;
pub use key_value::{keys, KeyValueStore, StorageError};
