// src/error/types.rs
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was blank or a domain rule was broken
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// A referenced entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    /// A season with this number already exists under the anime
    #[error("Season {number} already exists for anime {anime_id}")]
    DuplicateSeason { anime_id: Uuid, number: u32 },

    /// The underlying key-value store failed to read or write
    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    /// A store operation was invoked before load() completed
    #[error("Library not loaded")]
    NotLoaded,
}

impl AppError {
    pub fn anime_not_found(id: Uuid) -> Self {
        AppError::NotFound {
            entity: "Anime",
            id,
        }
    }

    pub fn season_not_found(id: Uuid) -> Self {
        AppError::NotFound {
            entity: "Season",
            id,
        }
    }

    pub fn episode_not_found(id: Uuid) -> Self {
        AppError::NotFound {
            entity: "Episode",
            id,
        }
    }
}

// Errors cross the UI boundary as their display strings
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
