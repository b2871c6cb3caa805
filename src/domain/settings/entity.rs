use serde::{Deserialize, Serialize};

/// User-facing application settings, persisted under their own storage key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Interface language
    pub language: Language,

    /// Color theme
    pub theme: Theme,

    /// Start the next episode automatically when one finishes
    pub auto_play: bool,

    /// Preferred stream quality
    pub quality: QualityPreference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Ar,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityPreference {
    Auto,
    P720,
    P1080,
}

impl Default for UserSettings {
    /// Matches the application defaults: Arabic interface, system theme,
    /// auto-play on, automatic quality
    fn default() -> Self {
        Self {
            language: Language::Ar,
            theme: Theme::System,
            auto_play: true,
            quality: QualityPreference::Auto,
        }
    }
}

impl UserSettings {
    /// Merge partial updates, leaving unspecified fields untouched
    pub fn merge(
        &mut self,
        language: Option<Language>,
        theme: Option<Theme>,
        auto_play: Option<bool>,
        quality: Option<QualityPreference>,
    ) {
        if let Some(l) = language {
            self.language = l;
        }
        if let Some(t) = theme {
            self.theme = t;
        }
        if let Some(a) = auto_play {
            self.auto_play = a;
        }
        if let Some(q) = quality {
            self.quality = q;
        }
    }
}
