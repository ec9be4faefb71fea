//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skald_mechanics::{SkillCheckResult, format_modifier};
use uuid::Uuid;

/// How a rolled entry should be styled in a combat log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogEntryType {
    /// An ordinary roll.
    Roll,
    /// A natural 20.
    Critical,
    /// A natural 1.
    Fumble,
}

impl LogEntryType {
    /// Classify by the natural face of a d20.
    pub fn for_face(face: u32) -> Self {
        match face {
            20 => Self::Critical,
            1 => Self::Fumble,
            _ => Self::Roll,
        }
    }
}

impl std::fmt::Display for LogEntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roll => write!(f, "roll"),
            Self::Critical => write!(f, "critical"),
            Self::Fumble => write!(f, "fumble"),
        }
    }
}

/// A dice roll as shown in the log: `D20: 14 +3 = 17`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Die label, e.g. "D20".
    pub dice: String,
    /// Number of dice thrown.
    pub count: u32,
    /// Individual faces.
    pub rolls: Vec<u32>,
    /// Modifier applied to the kept face.
    pub modifier: i32,
    /// Final total.
    pub total: i32,
    /// What the roll was for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl DiceRoll {
    /// The log view of a resolved check.
    pub fn from_result(result: &SkillCheckResult) -> Self {
        Self {
            dice: "D20".to_string(),
            count: result.rolls().len() as u32,
            rolls: result.rolls().to_vec(),
            modifier: result.modifier(),
            total: result.total(),
            purpose: Some(result.check().kind_label().to_lowercase()),
        }
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
        let label = if self.count > 1 {
            format!("{}{}", self.count, self.dice)
        } else {
            self.dice.clone()
        };
        write!(f, "{label}: {}", faces.join(", "))?;
        if self.modifier != 0 {
            write!(f, " {}", format_modifier(self.modifier))?;
        }
        write!(f, " = {}", self.total)
    }
}

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A check triggered by a player action (or requested directly).
    SkillCheck {
        /// Entry identifier.
        id: Uuid,
        /// Who rolled.
        actor: String,
        /// The action text that called for the check.
        action: String,
        /// Log styling: roll, critical or fumble.
        entry_type: LogEntryType,
        /// The dice as displayed.
        dice_roll: DiceRoll,
        /// The full resolved check.
        result: SkillCheckResult,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// A player action that needed no check.
    Action {
        /// Who acted.
        actor: String,
        /// The action text.
        action: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
    /// A freeform d20 roll (not tied to a check).
    DiceRoll {
        /// Log styling: roll, critical or fumble.
        entry_type: LogEntryType,
        /// The dice as displayed.
        dice_roll: DiceRoll,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// A player note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// A check entry for a resolved result.
    pub fn skill_check(
        actor: impl Into<String>,
        action: impl Into<String>,
        result: SkillCheckResult,
    ) -> Self {
        Self::SkillCheck {
            id: Uuid::new_v4(),
            actor: actor.into(),
            action: action.into(),
            entry_type: LogEntryType::for_face(result.roll()),
            dice_roll: DiceRoll::from_result(&result),
            result,
            timestamp: Utc::now(),
        }
    }

    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::SkillCheck { timestamp, .. }
            | Self::Action { timestamp, .. }
            | Self::DiceRoll { timestamp, .. }
            | Self::Note { timestamp, .. } => *timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skald_mechanics::{CharacterStats, FixedRolls, SkillCheck, SkillType, perform_skill_check};

    fn result(faces: Vec<u32>, check: SkillCheck) -> SkillCheckResult {
        perform_skill_check(
            &check,
            &CharacterStats::new(16, 12, 14, 10, 10, 8),
            "Climbing the surface",
            &mut FixedRolls::new(faces),
        )
    }

    #[test]
    fn entry_type_by_face() {
        assert_eq!(LogEntryType::for_face(20), LogEntryType::Critical);
        assert_eq!(LogEntryType::for_face(1), LogEntryType::Fumble);
        assert_eq!(LogEntryType::for_face(11), LogEntryType::Roll);
    }

    #[test]
    fn dice_roll_from_result() {
        let roll = DiceRoll::from_result(&result(vec![15], SkillCheck::skill(SkillType::Athletics)));
        assert_eq!(roll.count, 1);
        assert_eq!(roll.rolls, vec![15]);
        assert_eq!(roll.total, 18);
        assert_eq!(roll.purpose.as_deref(), Some("skill check"));
        assert_eq!(roll.to_string(), "D20: 15 +3 = 18");
    }

    #[test]
    fn dice_roll_display_advantage() {
        let check = SkillCheck::skill(SkillType::Athletics).with_advantage(true);
        let roll = DiceRoll::from_result(&result(vec![4, 12], check));
        assert_eq!(roll.to_string(), "2D20: 4, 12 +3 = 15");
    }

    #[test]
    fn skill_check_entry_classifies_face() {
        let entry = JournalEntry::skill_check(
            "Brom",
            "climb the wall",
            result(vec![20], SkillCheck::skill(SkillType::Athletics)),
        );
        let JournalEntry::SkillCheck { entry_type, actor, .. } = entry else {
            panic!("expected a skill check entry");
        };
        assert_eq!(entry_type, LogEntryType::Critical);
        assert_eq!(actor, "Brom");
    }
}
