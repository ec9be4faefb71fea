//! Checks: what is being tested and how it resolves.
//!
//! A [`SkillCheck`] names the skill or ability under test and whether the
//! roll has advantage or disadvantage. [`perform_skill_check`] rolls it
//! against a [`CharacterStats`](crate::sheet::CharacterStats) block.

pub mod resolve;

pub use resolve::{SkillCheckResult, perform_skill_check};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{AbilityType, SkillType};
use crate::dice::RollMode;
use crate::error::MechError;

/// What kind of test a check is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// A named skill, governed by its ability.
    Skill,
    /// A bare ability check.
    Ability,
    /// A saving throw against an ability.
    SavingThrow,
    /// An attack roll using an ability.
    Attack,
}

impl CheckKind {
    /// Heading for display, e.g. "Skill Check".
    pub fn label(self) -> &'static str {
        match self {
            Self::Skill => "Skill Check",
            Self::Ability => "Ability Check",
            Self::SavingThrow => "Saving Throw",
            Self::Attack => "Attack Roll",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CheckKind {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "skill" => Ok(Self::Skill),
            "ability" => Ok(Self::Ability),
            "saving_throw" | "save" => Ok(Self::SavingThrow),
            "attack" => Ok(Self::Attack),
            _ => Err(MechError::UnknownCheckKind(s.trim().to_string())),
        }
    }
}

/// A check to be rolled.
///
/// Build with [`SkillCheck::skill`], [`SkillCheck::ability`],
/// [`SkillCheck::saving_throw`] or [`SkillCheck::attack`] so that `ability`
/// always agrees with `skill`. Deserializing rejects a `skill` that does not
/// match `kind`, and replaces the `ability` of a skill check with the
/// skill's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSkillCheck")]
pub struct SkillCheck {
    /// What kind of test this is.
    #[serde(rename = "type")]
    pub kind: CheckKind,
    /// The skill under test; set iff `kind` is [`CheckKind::Skill`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<SkillType>,
    /// The ability under test (the skill's governing ability for skill checks).
    pub ability: AbilityType,
    /// Roll two dice and keep the higher.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub advantage: bool,
    /// Roll two dice and keep the lower.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disadvantage: bool,
}

impl SkillCheck {
    /// A skill check; the ability comes from the catalog.
    pub fn skill(skill: SkillType) -> Self {
        Self {
            kind: CheckKind::Skill,
            skill: Some(skill),
            ability: skill.ability(),
            advantage: false,
            disadvantage: false,
        }
    }

    /// A bare ability check.
    pub fn ability(ability: AbilityType) -> Self {
        Self::without_skill(CheckKind::Ability, ability)
    }

    /// A saving throw.
    pub fn saving_throw(ability: AbilityType) -> Self {
        Self::without_skill(CheckKind::SavingThrow, ability)
    }

    /// An attack roll.
    pub fn attack(ability: AbilityType) -> Self {
        Self::without_skill(CheckKind::Attack, ability)
    }

    fn without_skill(kind: CheckKind, ability: AbilityType) -> Self {
        Self {
            kind,
            skill: None,
            ability,
            advantage: false,
            disadvantage: false,
        }
    }

    /// Set the advantage flag.
    pub fn with_advantage(mut self, advantage: bool) -> Self {
        self.advantage = advantage;
        self
    }

    /// Set the disadvantage flag.
    pub fn with_disadvantage(mut self, disadvantage: bool) -> Self {
        self.disadvantage = disadvantage;
        self
    }

    /// The ability the roll is modified by.
    ///
    /// A skill's governing ability always wins over the `ability` field.
    pub fn effective_ability(&self) -> AbilityType {
        self.skill.map_or(self.ability, SkillType::ability)
    }

    /// How the d20 is rolled for this check.
    pub fn roll_mode(&self) -> RollMode {
        RollMode::from_flags(self.advantage, self.disadvantage)
    }

    /// Display name: the skill name, or the ability name.
    pub fn name(&self) -> &'static str {
        match self.skill {
            Some(skill) => skill.name(),
            None => self.ability.name(),
        }
    }

    /// Heading for display, e.g. "Skill Check".
    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Wire form of [`SkillCheck`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSkillCheck {
    #[serde(rename = "type")]
    kind: CheckKind,
    #[serde(default)]
    skill: Option<SkillType>,
    ability: AbilityType,
    #[serde(default)]
    advantage: bool,
    #[serde(default)]
    disadvantage: bool,
}

impl TryFrom<RawSkillCheck> for SkillCheck {
    type Error = MechError;

    fn try_from(raw: RawSkillCheck) -> Result<Self, Self::Error> {
        let check = match (raw.kind, raw.skill) {
            (CheckKind::Skill, Some(skill)) => Self::skill(skill),
            (CheckKind::Skill, None) => {
                return Err(MechError::InvalidCheck(
                    "skill check without a skill".to_string(),
                ));
            }
            (kind, Some(skill)) => {
                return Err(MechError::InvalidCheck(format!(
                    "{} names skill {}",
                    kind.label(),
                    skill.name()
                )));
            }
            (kind, None) => Self::without_skill(kind, raw.ability),
        };
        Ok(check
            .with_advantage(raw.advantage)
            .with_disadvantage(raw.disadvantage))
    }
}

impl From<SkillType> for SkillCheck {
    fn from(skill: SkillType) -> Self {
        Self::skill(skill)
    }
}

impl From<AbilityType> for SkillCheck {
    fn from(ability: AbilityType) -> Self {
        Self::ability(ability)
    }
}

impl FromStr for SkillCheck {
    type Err = MechError;

    /// Parses a skill name into a skill check, or an ability into an ability check.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(skill) = s.parse::<SkillType>() {
            return Ok(Self::skill(skill));
        }
        s.parse::<AbilityType>()
            .map(Self::ability)
            .map_err(|_| MechError::UnknownSkill(s.trim().to_string()))
    }
}

impl fmt::Display for SkillCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.skill {
            Some(skill) => write!(
                f,
                "{} ({})",
                skill.name(),
                self.effective_ability().abbreviation()
            )?,
            None => write!(f, "{} {}", self.ability.name(), self.kind.label())?,
        }
        match self.roll_mode() {
            RollMode::Normal => Ok(()),
            mode => write!(f, " with {mode}"),
        }
    }
}
