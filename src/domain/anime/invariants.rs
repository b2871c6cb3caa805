use super::entity::Anime;
use crate::domain::{DomainError, DomainResult};

/// Validates all Anime invariants
/// These are the absolute rules that must hold for an Anime to be valid
pub fn validate_anime(anime: &Anime) -> DomainResult<()> {
    validate_title(&anime.title)?;
    validate_image_url(&anime.image_url)?;
    Ok(())
}

/// Title cannot be empty or blank
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Anime title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Cover reference cannot be empty or blank
fn validate_image_url(image_url: &str) -> DomainResult<()> {
    if image_url.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Anime cover image reference cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Anime domain:
///
/// 1. Anime can exist without seasons
/// 2. Identity (UUID) is immutable
/// 3. Title cannot be blank
/// 4. Cover image reference cannot be blank
/// 5. Seasons are sorted ascending by number
/// 6. Created timestamp never changes
/// 7. Updated timestamp reflects last modification

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::season::Season;

    fn anime(title: &str, image_url: &str) -> Anime {
        Anime::new(
            title.to_string(),
            "A time travel story".to_string(),
            image_url.to_string(),
        )
    }

    #[test]
    fn test_valid_anime() {
        let anime = anime("Steins;Gate", "https://example.com/cover.jpg");
        assert!(validate_anime(&anime).is_ok());
    }

    #[test]
    fn test_blank_title_fails() {
        let anime = anime("   ", "https://example.com/cover.jpg");
        assert!(validate_anime(&anime).is_err());
    }

    #[test]
    fn test_blank_image_url_fails() {
        let anime = anime("Steins;Gate", "");
        assert!(validate_anime(&anime).is_err());
    }

    #[test]
    fn test_insert_season_keeps_ascending_order() {
        let mut anime = anime("Monogatari", "https://example.com/cover.jpg");
        for number in [3, 1, 2] {
            anime.insert_season(Season::new(anime.id, number));
        }

        let numbers: Vec<u32> = anime.seasons.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_metadata_preserves_creation_timestamp() {
        let mut anime = anime("Old Title", "https://example.com/cover.jpg");
        let created = anime.created_at;

        anime.update_metadata(Some("New Title".to_string()), None, None);

        assert_eq!(anime.title, "New Title");
        assert_eq!(anime.created_at, created);
        assert!(anime.updated_at >= created);
    }
}
