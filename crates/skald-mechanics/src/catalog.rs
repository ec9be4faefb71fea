//! Ability and skill catalog.
//!
//! The six ability scores and eighteen skills of the d20 system, each skill
//! governed by exactly one ability. The mapping is an exhaustive `match`,
//! so adding a skill without assigning its ability does not compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityType {
    /// Strength.
    Str,
    /// Dexterity.
    Dex,
    /// Constitution.
    Con,
    /// Intelligence.
    Int,
    /// Wisdom.
    Wis,
    /// Charisma.
    Cha,
}

impl AbilityType {
    /// All abilities in sheet order.
    pub const ALL: [AbilityType; 6] = [
        Self::Str,
        Self::Dex,
        Self::Con,
        Self::Int,
        Self::Wis,
        Self::Cha,
    ];

    /// Full display name, e.g. "Strength".
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    /// Three-letter upper-case abbreviation, e.g. "STR".
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// Lower-case short code used on the wire, e.g. "str".
    pub fn code(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Dex => "dex",
            Self::Con => "con",
            Self::Int => "int",
            Self::Wis => "wis",
            Self::Cha => "cha",
        }
    }
}

impl fmt::Display for AbilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AbilityType {
    type Err = MechError;

    /// Accepts the short code or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.code() == wanted || a.name().to_lowercase() == wanted)
            .ok_or_else(|| MechError::UnknownAbility(s.trim().to_string()))
    }
}

/// One of the eighteen named skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    /// Acrobatics (Dex).
    Acrobatics,
    /// Animal Handling (Wis).
    AnimalHandling,
    /// Arcana (Int).
    Arcana,
    /// Athletics (Str).
    Athletics,
    /// Deception (Cha).
    Deception,
    /// History (Int).
    History,
    /// Insight (Wis).
    Insight,
    /// Intimidation (Cha).
    Intimidation,
    /// Investigation (Int).
    Investigation,
    /// Medicine (Wis).
    Medicine,
    /// Nature (Int).
    Nature,
    /// Perception (Wis).
    Perception,
    /// Performance (Cha).
    Performance,
    /// Persuasion (Cha).
    Persuasion,
    /// Religion (Int).
    Religion,
    /// Sleight of Hand (Dex).
    SleightOfHand,
    /// Stealth (Dex).
    Stealth,
    /// Survival (Wis).
    Survival,
}

impl SkillType {
    /// All skills in alphabetical order.
    pub const ALL: [SkillType; 18] = [
        Self::Acrobatics,
        Self::AnimalHandling,
        Self::Arcana,
        Self::Athletics,
        Self::Deception,
        Self::History,
        Self::Insight,
        Self::Intimidation,
        Self::Investigation,
        Self::Medicine,
        Self::Nature,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Religion,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
    ];

    /// The ability that governs this skill.
    pub fn ability(self) -> AbilityType {
        match self {
            Self::Athletics => AbilityType::Str,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => AbilityType::Dex,
            Self::Arcana | Self::History | Self::Investigation | Self::Nature | Self::Religion => {
                AbilityType::Int
            }
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => AbilityType::Wis,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                AbilityType::Cha
            }
        }
    }

    /// Display name, e.g. "Sleight of Hand".
    pub fn name(self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        }
    }

    /// Snake-case identifier used on the wire, e.g. "sleight_of_hand".
    pub fn code(self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }

    /// All skills governed by the given ability.
    pub fn for_ability(ability: AbilityType) -> Vec<SkillType> {
        Self::ALL
            .into_iter()
            .filter(|s| s.ability() == ability)
            .collect()
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkillType {
    type Err = MechError;

    /// Accepts "sleight_of_hand", "sleight-of-hand" or "Sleight of Hand".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|skill| skill.code() == wanted)
            .ok_or_else(|| MechError::UnknownSkill(s.trim().to_string()))
    }
}
