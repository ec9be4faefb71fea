//! Check resolution.

use serde::{Deserialize, Serialize};

use crate::check::SkillCheck;
use crate::dice::{self, RollMode, RollSource};
use crate::error::MechError;
use crate::sheet::CharacterStats;
use crate::sheet::modifier::{ability_modifier, format_modifier};

/// The outcome of one rolled check.
///
/// Built only by [`perform_skill_check`] and never changed afterwards.
/// `is_critical` and `is_fumble` follow the natural die face, not the total.
/// Deserializing rejects results whose numbers disagree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSkillCheckResult")]
pub struct SkillCheckResult {
    check: SkillCheck,
    reason: String,
    roll: u32,
    rolls: Vec<u32>,
    modifier: i32,
    total: i32,
    is_critical: bool,
    is_fumble: bool,
}

impl SkillCheckResult {
    /// The check that was rolled.
    pub fn check(&self) -> &SkillCheck {
        &self.check
    }

    /// Why the check was called for.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The natural d20 face that counts (1-20).
    pub fn roll(&self) -> u32 {
        self.roll
    }

    /// Every face rolled: one for a flat roll, two with advantage or disadvantage.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    /// The ability modifier applied.
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// `roll + modifier`, unclamped.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// A natural 20.
    pub fn is_critical(&self) -> bool {
        self.is_critical
    }

    /// A natural 1.
    pub fn is_fumble(&self) -> bool {
        self.is_fumble
    }
}

/// Wire form of [`SkillCheckResult`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSkillCheckResult {
    check: SkillCheck,
    reason: String,
    roll: u32,
    rolls: Vec<u32>,
    modifier: i32,
    total: i32,
    is_critical: bool,
    is_fumble: bool,
}

impl TryFrom<RawSkillCheckResult> for SkillCheckResult {
    type Error = MechError;

    fn try_from(raw: RawSkillCheckResult) -> Result<Self, Self::Error> {
        let bad = |msg: String| Err(MechError::InconsistentResult(msg));

        if let Some(face) = raw.rolls.iter().find(|f| !(1..=dice::D20).contains(*f)) {
            return bad(format!("face {face} is not on a d20"));
        }
        let kept = match (raw.check.roll_mode(), raw.rolls.as_slice()) {
            (RollMode::Normal, &[face]) => face,
            (RollMode::Advantage, &[a, b]) => a.max(b),
            (RollMode::Disadvantage, &[a, b]) => a.min(b),
            (mode, faces) => {
                return bad(format!("{} faces for a {mode} roll", faces.len()));
            }
        };
        if raw.roll != kept {
            return bad(format!("roll {} but the kept face is {kept}", raw.roll));
        }
        if (raw.roll as i32).checked_add(raw.modifier) != Some(raw.total) {
            return bad(format!(
                "total {} is not {} {}",
                raw.total,
                raw.roll,
                format_modifier(raw.modifier)
            ));
        }
        if raw.is_critical != (raw.roll == dice::D20) || raw.is_fumble != (raw.roll == 1) {
            return bad(format!("natural flags disagree with roll {}", raw.roll));
        }

        Ok(Self {
            check: raw.check,
            reason: raw.reason,
            roll: raw.roll,
            rolls: raw.rolls,
            modifier: raw.modifier,
            total: raw.total,
            is_critical: raw.is_critical,
            is_fumble: raw.is_fumble,
        })
    }
}

impl std::fmt::Display for SkillCheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice = match self.check.roll_mode() {
            RollMode::Normal => format!("d20 {}", self.roll),
            mode => {
                let faces: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
                format!("2d20 ({mode}) [{}] {}", faces.join(", "), self.roll)
            }
        };
        write!(
            f,
            "{}: {dice} {} {} = {}",
            self.check.name(),
            self.check.effective_ability().abbreviation(),
            format_modifier(self.modifier),
            self.total
        )?;
        if self.is_critical {
            write!(f, " (natural 20)")?;
        } else if self.is_fumble {
            write!(f, " (natural 1)")?;
        }
        Ok(())
    }
}

/// Roll a check against a character's stats.
///
/// Advantage keeps the higher of two d20s and disadvantage the lower; when
/// both flags are set, or neither, a single d20 is rolled. The modifier
/// comes from the skill's governing ability when the check names a skill.
pub fn perform_skill_check(
    check: &SkillCheck,
    stats: &CharacterStats,
    reason: impl Into<String>,
    source: &mut impl RollSource,
) -> SkillCheckResult {
    let thrown = dice::roll_check(source, check.roll_mode());
    let ability = check.effective_ability();
    let modifier = ability_modifier(stats, ability);
    let roll = thrown.kept;
    let total = roll as i32 + modifier;

    let result = SkillCheckResult {
        check: *check,
        reason: reason.into(),
        roll,
        rolls: thrown.faces,
        modifier,
        total,
        is_critical: roll == dice::D20,
        is_fumble: roll == 1,
    };
    tracing::debug!(
        check = %check,
        roll,
        modifier,
        total,
        critical = result.is_critical,
        fumble = result.is_fumble,
        "resolved check"
    );
    result
}
