//! The ordered trigger table.
//!
//! Order is significant: the first rule with a matching keyword wins, so
//! moving a rule changes which check an ambiguous action gets. Keywords are
//! lower-case and matched as plain substrings.

use crate::catalog::{AbilityType, SkillType};

/// One detection rule: any keyword selects the rule's check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTrigger {
    /// Lower-case substrings, tried in order.
    pub keywords: &'static [&'static str],
    /// The skill to test, or `None` for a bare ability check.
    pub skill: Option<SkillType>,
    /// The ability to test.
    pub ability: AbilityType,
}

const fn skill(keywords: &'static [&'static str], skill: SkillType, ability: AbilityType) -> CheckTrigger {
    CheckTrigger {
        keywords,
        skill: Some(skill),
        ability,
    }
}

/// All detection rules, in evaluation order.
pub static CHECK_TRIGGERS: &[CheckTrigger] = &[
    // Intelligence
    skill(
        &["read", "rune", "magical", "spell", "enchant", "arcane", "decipher", "magic"],
        SkillType::Arcana,
        AbilityType::Int,
    ),
    skill(
        &["examine", "investigate", "inspect", "analyze", "search for clues", "look for"],
        SkillType::Investigation,
        AbilityType::Int,
    ),
    skill(
        &["recall", "remember", "history", "ancient", "lore", "knowledge"],
        SkillType::History,
        AbilityType::Int,
    ),
    skill(
        &["nature", "plant", "animal", "weather", "track animal", "identify creature"],
        SkillType::Nature,
        AbilityType::Int,
    ),
    skill(
        &["pray", "religious", "holy", "divine", "god", "deity", "undead lore"],
        SkillType::Religion,
        AbilityType::Int,
    ),
    // Wisdom
    skill(
        &["look around", "observe", "notice", "spot", "watch", "listen", "hear"],
        SkillType::Perception,
        AbilityType::Wis,
    ),
    skill(
        &["sense motive", "detect lie", "read emotion", "tell if", "lying", "trust"],
        SkillType::Insight,
        AbilityType::Wis,
    ),
    skill(
        &["heal", "treat wound", "medicine", "stabilize", "diagnose", "cure"],
        SkillType::Medicine,
        AbilityType::Wis,
    ),
    skill(
        &["track", "forage", "survive", "navigate", "find food", "wilderness"],
        SkillType::Survival,
        AbilityType::Wis,
    ),
    skill(
        &["calm animal", "tame", "train", "ride", "handle animal"],
        SkillType::AnimalHandling,
        AbilityType::Wis,
    ),
    // Dexterity
    skill(
        &["sneak", "hide", "quietly", "unnoticed", "stealth", "creep", "silently"],
        SkillType::Stealth,
        AbilityType::Dex,
    ),
    skill(
        &["balance", "tumble", "flip", "dodge", "acrobatic", "jump over"],
        SkillType::Acrobatics,
        AbilityType::Dex,
    ),
    skill(
        &["pickpocket", "sleight", "palm", "pick lock", "disarm trap", "lockpick"],
        SkillType::SleightOfHand,
        AbilityType::Dex,
    ),
    // Strength
    skill(
        &["climb", "jump", "swim", "push", "lift", "break down", "force open", "grapple"],
        SkillType::Athletics,
        AbilityType::Str,
    ),
    // Charisma
    skill(
        &["convince", "persuade", "negotiate", "charm", "flatter", "ask nicely"],
        SkillType::Persuasion,
        AbilityType::Cha,
    ),
    skill(
        &["threaten", "scare", "intimidate", "frighten", "menace", "demand"],
        SkillType::Intimidation,
        AbilityType::Cha,
    ),
    skill(
        &["lie", "deceive", "bluff", "mislead", "disguise", "pretend"],
        SkillType::Deception,
        AbilityType::Cha,
    ),
    skill(
        &["perform", "sing", "dance", "play music", "entertain", "act"],
        SkillType::Performance,
        AbilityType::Cha,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_agree_with_catalog() {
        for trigger in CHECK_TRIGGERS {
            if let Some(skill) = trigger.skill {
                assert_eq!(skill.ability(), trigger.ability, "{skill}");
            }
        }
    }

    #[test]
    fn keywords_are_lower_case_and_non_empty() {
        for trigger in CHECK_TRIGGERS {
            assert!(!trigger.keywords.is_empty());
            for keyword in trigger.keywords {
                assert!(!keyword.is_empty());
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn rule_order_is_fixed() {
        let order: Vec<SkillType> = CHECK_TRIGGERS.iter().filter_map(|t| t.skill).collect();
        assert_eq!(
            order,
            vec![
                SkillType::Arcana,
                SkillType::Investigation,
                SkillType::History,
                SkillType::Nature,
                SkillType::Religion,
                SkillType::Perception,
                SkillType::Insight,
                SkillType::Medicine,
                SkillType::Survival,
                SkillType::AnimalHandling,
                SkillType::Stealth,
                SkillType::Acrobatics,
                SkillType::SleightOfHand,
                SkillType::Athletics,
                SkillType::Persuasion,
                SkillType::Intimidation,
                SkillType::Deception,
                SkillType::Performance,
            ]
        );
    }
}
