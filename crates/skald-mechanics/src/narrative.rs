//! Handoff of resolved checks to the narrative generator.
//!
//! The generator receives the numbers from a [`SkillCheckResult`] plus a
//! fixed textual policy ([`ROLL_POLICY`]) describing how to narrate them.
//! Outcome bands live only in that policy text; nothing here branches on
//! the total.

use serde::{Deserialize, Serialize};

use crate::check::SkillCheckResult;
use crate::sheet::modifier::format_modifier;

/// Instructions sent alongside every rolled check.
pub const ROLL_POLICY: &str = "\
SKILL CHECK RULES:
- A natural 20 is an automatic, dramatic success regardless of the total.
- A natural 1 is a fumble: the attempt goes wrong in an interesting way.
- Otherwise scale the outcome with the total:
  - 20 or higher: exceptional success with an extra benefit
  - 15-19: clear success
  - 10-14: partial success, or success at a cost
  - below 10: failure, but never a harsh or run-ending punishment
- Narrate the result consistently with these numbers; never reroll.";

/// The fields of a resolved check, as sent to the narrative generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeCheck {
    /// Skill name, or ability name for ability checks.
    pub check_name: String,
    /// "Skill Check", "Ability Check", ...
    pub check_type: String,
    /// Name of the ability that modified the roll.
    pub ability: String,
    /// Skill name, when the check named one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    /// Why the check was rolled.
    pub reason: String,
    /// The natural d20 face.
    pub roll: u32,
    /// The ability modifier.
    pub modifier: i32,
    /// Roll plus modifier.
    pub total: i32,
    /// A natural 20.
    pub is_critical: bool,
    /// A natural 1.
    pub is_fumble: bool,
}

impl NarrativeCheck {
    /// Extract the generator-facing fields from a result.
    pub fn from_result(result: &SkillCheckResult) -> Self {
        let check = result.check();
        Self {
            check_name: check.name().to_string(),
            check_type: check.kind_label().to_string(),
            ability: check.effective_ability().name().to_string(),
            skill: check.skill.map(|s| s.name().to_string()),
            reason: result.reason().to_string(),
            roll: result.roll(),
            modifier: result.modifier(),
            total: result.total(),
            is_critical: result.is_critical(),
            is_fumble: result.is_fumble(),
        }
    }

    /// The check as a text block for the generator's prompt.
    pub fn to_prompt_block(&self) -> String {
        let mut out = format!(
            "SKILL CHECK: {} {} ({})\nReason: {}\nRoll: d20 {} {} = {}\n",
            self.check_name,
            self.check_type,
            self.ability,
            self.reason,
            self.roll,
            format_modifier(self.modifier),
            self.total
        );
        if self.is_critical {
            out.push_str("Natural 20: critical success\n");
        } else if self.is_fumble {
            out.push_str("Natural 1: fumble\n");
        }
        out
    }

    /// The player's action followed by the check block and [`ROLL_POLICY`].
    pub fn annotate_action(&self, action: &str) -> String {
        format!(
            "PLAYER ACTION: {action}\n\n{}\n{ROLL_POLICY}\n",
            self.to_prompt_block()
        )
    }

    /// JSON payload for the generator request.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&SkillCheckResult> for NarrativeCheck {
    fn from(result: &SkillCheckResult) -> Self {
        Self::from_result(result)
    }
}
