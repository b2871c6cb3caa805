use super::entity::Episode;
use crate::domain::{DomainError, DomainResult};

/// Validates all Episode invariants
pub fn validate_episode(episode: &Episode) -> DomainResult<()> {
    if episode.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Episode title cannot be empty".to_string(),
        ));
    }
    if episode.video_url.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Episode video source cannot be empty".to_string(),
        ));
    }
    if episode.number == Some(0) {
        return Err(DomainError::InvariantViolation(
            "Episode display number must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Episode domain:
///
/// 1. Title cannot be blank
/// 2. Video source cannot be blank
/// 3. Display number, when present, is positive
/// 4. season_id always references the owning season
