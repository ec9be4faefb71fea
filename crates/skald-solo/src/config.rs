//! Configuration for a solo session.

use skald_mechanics::CharacterStats;

use crate::character::{Character, CharacterClass};

/// Configuration for a solo session.
#[derive(Debug, Clone)]
pub struct SoloConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Character name.
    pub name: String,
    /// Class preset supplying the stats.
    pub class: CharacterClass,
    /// Explicit stats, overriding the class preset.
    pub stats: Option<CharacterStats>,
}

impl Default for SoloConfig {
    fn default() -> Self {
        Self {
            seed: None,
            name: "Adventurer".to_string(),
            class: CharacterClass::Fighter,
            stats: None,
        }
    }
}

impl SoloConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the character name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the class preset.
    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.class = class;
        self
    }

    /// Use explicit stats instead of the class preset.
    pub fn with_stats(mut self, stats: CharacterStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Build the configured character.
    pub fn character(&self) -> Character {
        let mut character = Character::from_class(self.name.clone(), self.class);
        if let Some(stats) = self.stats {
            character.stats = stats;
        }
        character
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SoloConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.class, CharacterClass::Fighter);
        assert_eq!(cfg.character().stats, CharacterClass::Fighter.base_stats());
    }

    #[test]
    fn builder_methods() {
        let cfg = SoloConfig::default()
            .with_seed(123)
            .with_name("Vex")
            .with_class(CharacterClass::Rogue);
        assert_eq!(cfg.seed, Some(123));
        let character = cfg.character();
        assert_eq!(character.name, "Vex");
        assert_eq!(character.stats.dex, 16);
    }

    #[test]
    fn explicit_stats_override_class() {
        let stats = CharacterStats::uniform(13);
        let character = SoloConfig::default()
            .with_class(CharacterClass::Bard)
            .with_stats(stats)
            .character();
        assert_eq!(character.stats, stats);
        assert_eq!(character.class, Some(CharacterClass::Bard));
    }
}
