// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod anime;
pub mod collection;
pub mod episode;
pub mod season;
pub mod settings;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Anime Domain
pub use anime::{validate_anime, Anime};

// Season Domain
pub use season::{validate_season, Season};

// Episode Domain
pub use episode::{validate_episode, Episode};

// Collection Domain
pub use collection::{validate_collection, Collection};

// Settings Domain
pub use settings::{Language, QualityPreference, Theme, UserSettings};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
