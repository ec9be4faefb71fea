//! Short justifications for detected checks.

use crate::catalog::SkillType;
use crate::check::SkillCheck;

/// One phrase rule: the skill and, optionally, a keyword the action must contain.
struct ReasonRule {
    skill: SkillType,
    keyword: Option<&'static str>,
    phrase: &'static str,
}

const fn rule(skill: SkillType, keyword: Option<&'static str>, phrase: &'static str) -> ReasonRule {
    ReasonRule {
        skill,
        keyword,
        phrase,
    }
}

static REASONS: &[ReasonRule] = &[
    rule(SkillType::Arcana, Some("rune"), "Deciphering the ancient runes"),
    rule(SkillType::Arcana, Some("magic"), "Identifying magical properties"),
    rule(SkillType::Perception, None, "Observing your surroundings"),
    rule(SkillType::Stealth, None, "Moving silently"),
    rule(SkillType::Investigation, None, "Searching for clues"),
    rule(SkillType::Athletics, Some("climb"), "Climbing the surface"),
    rule(SkillType::Athletics, Some("jump"), "Making the leap"),
    rule(SkillType::Persuasion, None, "Convincing them"),
    rule(SkillType::Intimidation, None, "Intimidating them"),
    rule(SkillType::Deception, None, "Deceiving them"),
    rule(SkillType::Insight, None, "Reading their intentions"),
    rule(SkillType::History, None, "Recalling ancient knowledge"),
];

/// A human-readable reason for `check`, falling back to the action text verbatim.
pub fn get_check_reason(action: &str, check: &SkillCheck) -> String {
    let Some(skill) = check.skill else {
        return action.to_string();
    };
    let lowered = action.to_lowercase();
    REASONS
        .iter()
        .find(|r| r.skill == skill && r.keyword.is_none_or(|k| lowered.contains(k)))
        .map_or_else(|| action.to_string(), |r| r.phrase.to_string())
}
