pub mod entity;
pub mod invariants;

pub use entity::Season;
pub use invariants::validate_season;
