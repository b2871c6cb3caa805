use super::entity::Season;
use crate::domain::{DomainError, DomainResult};

/// Validates all Season invariants
pub fn validate_season(season: &Season) -> DomainResult<()> {
    if season.number == 0 {
        return Err(DomainError::InvariantViolation(
            "Season number must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Season domain:
///
/// 1. Number is positive (1-based)
/// 2. Number is unique among siblings (enforced by the store on insert)
/// 3. Episodes keep insertion order
/// 4. anime_id always references the owning anime
