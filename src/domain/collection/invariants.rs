use std::collections::HashSet;

use super::entity::Collection;
use crate::domain::{DomainError, DomainResult};

/// Validates the structural invariants of a whole collection.
/// Used on load to decide whether a persisted blob is trustworthy.
pub fn validate_collection(collection: &Collection) -> DomainResult<()> {
    let mut anime_ids = HashSet::new();

    for anime in &collection.animes {
        if !anime_ids.insert(anime.id) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate anime id {}",
                anime.id
            )));
        }

        let mut season_numbers = HashSet::new();
        let mut season_ids = HashSet::new();
        let mut previous_number = 0u32;

        for season in &anime.seasons {
            if season.anime_id != anime.id {
                return Err(DomainError::InvariantViolation(format!(
                    "Season {} does not reference its owning anime",
                    season.id
                )));
            }
            if !season_ids.insert(season.id) {
                return Err(DomainError::InvariantViolation(format!(
                    "Duplicate season id {}",
                    season.id
                )));
            }
            if !season_numbers.insert(season.number) {
                return Err(DomainError::InvariantViolation(format!(
                    "Duplicate season number {} under anime {}",
                    season.number, anime.id
                )));
            }
            if season.number <= previous_number {
                return Err(DomainError::InvariantViolation(format!(
                    "Seasons under anime {} are not sorted ascending",
                    anime.id
                )));
            }
            previous_number = season.number;

            let mut episode_ids = HashSet::new();
            for episode in &season.episodes {
                if episode.season_id != season.id {
                    return Err(DomainError::InvariantViolation(format!(
                        "Episode {} does not reference its owning season",
                        episode.id
                    )));
                }
                if !episode_ids.insert(episode.id) {
                    return Err(DomainError::InvariantViolation(format!(
                        "Duplicate episode id {}",
                        episode.id
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::anime::Anime;
    use crate::domain::season::Season;

    fn collection_with_seasons(numbers: &[u32]) -> Collection {
        let mut anime = Anime::new(
            "Steins;Gate".to_string(),
            "desc".to_string(),
            "https://example.com/cover.jpg".to_string(),
        );
        for &number in numbers {
            anime.insert_season(Season::new(anime.id, number));
        }
        let mut collection = Collection::new();
        collection.push_anime(anime);
        collection
    }

    #[test]
    fn test_empty_collection_is_valid() {
        assert!(validate_collection(&Collection::new()).is_ok());
    }

    #[test]
    fn test_ordered_seasons_are_valid() {
        let collection = collection_with_seasons(&[1, 2, 5]);
        assert!(validate_collection(&collection).is_ok());
    }

    #[test]
    fn test_duplicate_season_number_fails() {
        let mut collection = collection_with_seasons(&[1]);
        // Bypass insert_season to simulate a corrupted blob
        let anime = &mut collection.animes[0];
        let duplicate = Season::new(anime.id, 1);
        anime.seasons.push(duplicate);

        assert!(validate_collection(&collection).is_err());
    }

    #[test]
    fn test_unsorted_seasons_fail() {
        let mut collection = collection_with_seasons(&[2]);
        let anime = &mut collection.animes[0];
        let out_of_order = Season::new(anime.id, 1);
        anime.seasons.push(out_of_order);

        assert!(validate_collection(&collection).is_err());
    }

    #[test]
    fn test_foreign_season_back_reference_fails() {
        let mut collection = collection_with_seasons(&[1]);
        collection.animes[0].seasons[0].anime_id = uuid::Uuid::new_v4();
        assert!(validate_collection(&collection).is_err());
    }
}
