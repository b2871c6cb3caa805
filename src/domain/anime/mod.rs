pub mod entity;
pub mod invariants;

pub use entity::Anime;
pub use invariants::validate_anime;
