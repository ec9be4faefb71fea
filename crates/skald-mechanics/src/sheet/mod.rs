//! Character ability scores.
//!
//! A [`CharacterStats`] block holds the six raw ability scores. Scores are
//! plain integers: the conventional 3-20 range is not enforced here, and
//! the modifier formula in [`modifier`] is applied to whatever is stored.

pub mod modifier;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::AbilityType;
use crate::error::{MechError, MechResult};

/// The six ability scores of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterStats {
    /// Strength score.
    pub str: i32,
    /// Dexterity score.
    pub dex: i32,
    /// Constitution score.
    pub con: i32,
    /// Intelligence score.
    pub int: i32,
    /// Wisdom score.
    pub wis: i32,
    /// Charisma score.
    pub cha: i32,
}

impl Default for CharacterStats {
    /// Every score at 10 (modifier +0).
    fn default() -> Self {
        Self::uniform(10)
    }
}

impl CharacterStats {
    /// Create a stat block from scores in sheet order (STR, DEX, CON, INT, WIS, CHA).
    pub fn new(str: i32, dex: i32, con: i32, int: i32, wis: i32, cha: i32) -> Self {
        Self {
            str,
            dex,
            con,
            int,
            wis,
            cha,
        }
    }

    /// A stat block with every score set to `score`.
    pub fn uniform(score: i32) -> Self {
        Self::new(score, score, score, score, score, score)
    }

    /// The raw score for an ability.
    pub fn score(&self, ability: AbilityType) -> i32 {
        match ability {
            AbilityType::Str => self.str,
            AbilityType::Dex => self.dex,
            AbilityType::Con => self.con,
            AbilityType::Int => self.int,
            AbilityType::Wis => self.wis,
            AbilityType::Cha => self.cha,
        }
    }

    /// Replace the score for an ability.
    pub fn with(mut self, ability: AbilityType, score: i32) -> Self {
        let slot = match ability {
            AbilityType::Str => &mut self.str,
            AbilityType::Dex => &mut self.dex,
            AbilityType::Con => &mut self.con,
            AbilityType::Int => &mut self.int,
            AbilityType::Wis => &mut self.wis,
            AbilityType::Cha => &mut self.cha,
        };
        *slot = score;
        self
    }

    /// Scores paired with their abilities, in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (AbilityType, i32)> + '_ {
        AbilityType::ALL.into_iter().map(|a| (a, self.score(a)))
    }

    /// Parse a stat block from JSON (`{"str": 16, "dex": 12, ...}`).
    pub fn from_json(json: &str) -> MechResult<Self> {
        serde_json::from_str(json).map_err(|e| MechError::InvalidStats(e.to_string()))
    }
}

impl FromStr for CharacterStats {
    type Err = MechError;

    /// Parses either six comma-separated scores in sheet order
    /// (`16,12,14,10,10,8`) or `ability=score` pairs (`str=16 dex=12`).
    /// Abilities omitted from the pair form stay at 10.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains('=') {
            let mut stats = Self::default();
            for pair in s.split([',', ' ']).filter(|p| !p.is_empty()) {
                let (name, value) = pair
                    .split_once('=')
                    .ok_or_else(|| MechError::InvalidStats(format!("expected ability=score, got '{pair}'")))?;
                let ability: AbilityType = name.parse()?;
                stats = stats.with(ability, parse_score(value)?);
            }
            return Ok(stats);
        }

        let scores = s
            .split(',')
            .map(parse_score)
            .collect::<MechResult<Vec<i32>>>()?;
        match scores.as_slice() {
            [str, dex, con, int, wis, cha] => Ok(Self::new(*str, *dex, *con, *int, *wis, *cha)),
            _ => Err(MechError::InvalidStats(format!(
                "expected 6 scores, got {}",
                scores.len()
            ))),
        }
    }
}

fn parse_score(raw: &str) -> MechResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| MechError::InvalidStats(format!("'{}' is not a score", raw.trim())))
}

impl fmt::Display for CharacterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(a, score)| format!("{} {score}", a.abbreviation()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
