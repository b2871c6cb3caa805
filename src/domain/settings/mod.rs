pub mod entity;

pub use entity::{Language, QualityPreference, Theme, UserSettings};
