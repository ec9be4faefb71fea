//! Player characters and class presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skald_mechanics::{AbilityType, CharacterStats, format_modifier, modifier};

use crate::error::SoloError;

/// A starting class, which supplies the default stat block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// Martial combatant.
    Fighter,
    /// Arcane scholar.
    Wizard,
    /// Stealthy trickster.
    Rogue,
    /// Divine servant.
    Cleric,
    /// Wilderness hunter.
    Ranger,
    /// Charismatic performer.
    Bard,
}

impl CharacterClass {
    /// All classes.
    pub const ALL: [CharacterClass; 6] = [
        Self::Fighter,
        Self::Wizard,
        Self::Rogue,
        Self::Cleric,
        Self::Ranger,
        Self::Bard,
    ];

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fighter => "Fighter",
            Self::Wizard => "Wizard",
            Self::Rogue => "Rogue",
            Self::Cleric => "Cleric",
            Self::Ranger => "Ranger",
            Self::Bard => "Bard",
        }
    }

    /// The class's starting ability scores.
    pub fn base_stats(self) -> CharacterStats {
        match self {
            Self::Fighter => CharacterStats::new(16, 12, 14, 10, 10, 8),
            Self::Wizard => CharacterStats::new(8, 12, 12, 16, 14, 10),
            Self::Rogue => CharacterStats::new(10, 16, 12, 12, 10, 14),
            Self::Cleric => CharacterStats::new(12, 10, 14, 10, 16, 12),
            Self::Ranger => CharacterStats::new(12, 16, 12, 10, 14, 8),
            Self::Bard => CharacterStats::new(8, 14, 12, 12, 10, 16),
        }
    }

    /// The ability the class leans on.
    pub fn primary_ability(self) -> AbilityType {
        match self {
            Self::Fighter => AbilityType::Str,
            Self::Wizard => AbilityType::Int,
            Self::Rogue | Self::Ranger => AbilityType::Dex,
            Self::Cleric => AbilityType::Wis,
            Self::Bard => AbilityType::Cha,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CharacterClass {
    type Err = SoloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
            .ok_or_else(|| SoloError::UnknownClass(s.trim().to_string()))
    }
}

/// The character whose stats modify every roll in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name, used as the actor in the journal.
    pub name: String,
    /// Starting class, if the stats came from a preset.
    pub class: Option<CharacterClass>,
    /// Ability scores.
    pub stats: CharacterStats,
}

impl Character {
    /// A character with explicit stats.
    pub fn new(name: impl Into<String>, stats: CharacterStats) -> Self {
        Self {
            name: name.into(),
            class: None,
            stats,
        }
    }

    /// A character using a class's base stats.
    pub fn from_class(name: impl Into<String>, class: CharacterClass) -> Self {
        Self {
            name: name.into(),
            class: Some(class),
            stats: class.base_stats(),
        }
    }

    /// Multi-line sheet: one ability per line with score and modifier.
    pub fn sheet(&self) -> String {
        let mut out = match self.class {
            Some(class) => format!("{} the {class}\n", self.name),
            None => format!("{}\n", self.name),
        };
        for (ability, score) in self.stats.iter() {
            out.push_str(&format!(
                "  {} {score:>3} ({})\n",
                ability.abbreviation(),
                format_modifier(modifier(score))
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_favour_primary_ability() {
        for class in CharacterClass::ALL {
            let stats = class.base_stats();
            let primary = stats.score(class.primary_ability());
            assert_eq!(primary, 16, "{class}");
            assert!(stats.iter().all(|(_, s)| s <= primary));
        }
    }

    #[test]
    fn parse_class() {
        assert_eq!("rogue".parse::<CharacterClass>().unwrap(), CharacterClass::Rogue);
        assert_eq!(" Bard ".parse::<CharacterClass>().unwrap(), CharacterClass::Bard);
        let err = "paladin".parse::<CharacterClass>().unwrap_err();
        assert_eq!(err.to_string(), "unknown class: paladin");
    }

    #[test]
    fn from_class_copies_stats() {
        let c = Character::from_class("Mira", CharacterClass::Wizard);
        assert_eq!(c.stats.int, 16);
        assert_eq!(c.class, Some(CharacterClass::Wizard));
    }

    #[test]
    fn sheet_lists_modifiers() {
        let sheet = Character::from_class("Brom", CharacterClass::Fighter).sheet();
        assert!(sheet.starts_with("Brom the Fighter\n"));
        assert!(sheet.contains("  STR  16 (+3)\n"));
        assert!(sheet.contains("  CHA   8 (-1)\n"));
    }
}
