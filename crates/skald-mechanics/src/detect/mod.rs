//! Check detection from free-text player actions.
//!
//! [`detect_skill_check`] lower-cases the action and walks
//! [`CHECK_TRIGGERS`] in order, returning the check for the first rule with
//! a keyword contained in the text. Rule order, then keyword order, breaks
//! ties: "look around and search for clues" is an Investigation check
//! because that rule is declared before Perception.

pub mod reason;
pub mod triggers;

pub use reason::get_check_reason;
pub use triggers::{CHECK_TRIGGERS, CheckTrigger};

use crate::check::SkillCheck;

/// Work out which check, if any, an action calls for.
///
/// `None` means no check is needed; it is not an error.
pub fn detect_skill_check(action: &str) -> Option<SkillCheck> {
    let lowered = action.to_lowercase();
    let (trigger, keyword) = first_match(CHECK_TRIGGERS, &lowered)?;
    tracing::debug!(keyword, skill = ?trigger.skill, ability = ?trigger.ability, "detected check");
    Some(check_for(trigger))
}

/// The first trigger, and its keyword, found in already lower-cased text.
pub fn first_match<'a>(
    triggers: &'a [CheckTrigger],
    lowered: &str,
) -> Option<(&'a CheckTrigger, &'static str)> {
    triggers.iter().find_map(|trigger| {
        trigger
            .keywords
            .iter()
            .find(|keyword| lowered.contains(*keyword))
            .map(|keyword| (trigger, *keyword))
    })
}

fn check_for(trigger: &CheckTrigger) -> SkillCheck {
    match trigger.skill {
        Some(skill) => SkillCheck::skill(skill),
        None => SkillCheck::ability(trigger.ability),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AbilityType, SkillType};
    use crate::check::CheckKind;

    fn detected_skill(action: &str) -> Option<SkillType> {
        detect_skill_check(action).and_then(|c| c.skill)
    }

    #[test]
    fn sneak_is_stealth() {
        let check = detect_skill_check("sneak past the guard").unwrap();
        assert_eq!(check.kind, CheckKind::Skill);
        assert_eq!(check.skill, Some(SkillType::Stealth));
        assert_eq!(check.ability, AbilityType::Dex);
    }

    #[test]
    fn persuade_is_persuasion() {
        let check = detect_skill_check("persuade the merchant to lower the price").unwrap();
        assert_eq!(check.skill, Some(SkillType::Persuasion));
        assert_eq!(check.ability, AbilityType::Cha);
    }

    #[test]
    fn plain_action_needs_no_check() {
        assert_eq!(detect_skill_check("I open the door"), None);
        assert_eq!(detect_skill_check(""), None);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(detected_skill("I CLIMB the wall"), Some(SkillType::Athletics));
        assert_eq!(detected_skill("Decipher The Glyphs"), Some(SkillType::Arcana));
    }

    #[test]
    fn detected_flags_are_clear() {
        let check = detect_skill_check("hide behind the crates").unwrap();
        assert!(!check.advantage);
        assert!(!check.disadvantage);
    }

    #[test]
    fn one_example_per_rule() {
        let cases = [
            ("study the magic circle", SkillType::Arcana),
            ("inspect the lock", SkillType::Investigation),
            ("try to remember the old king's name", SkillType::History),
            ("check the weather", SkillType::Nature),
            ("kneel and pray", SkillType::Religion),
            ("listen at the door", SkillType::Perception),
            ("sense motive on the innkeeper", SkillType::Insight),
            ("stabilize the fallen soldier", SkillType::Medicine),
            ("forage for berries", SkillType::Survival),
            ("tame the wolf pup", SkillType::AnimalHandling),
            ("creep along the wall", SkillType::Stealth),
            ("tumble under the table", SkillType::Acrobatics),
            ("pickpocket the noble", SkillType::SleightOfHand),
            ("grapple the bandit", SkillType::Athletics),
            ("negotiate a better deal", SkillType::Persuasion),
            ("threaten the thug", SkillType::Intimidation),
            ("bluff my way through", SkillType::Deception),
            ("sing a tavern song", SkillType::Performance),
        ];
        for (action, expected) in cases {
            assert_eq!(detected_skill(action), Some(expected), "{action}");
        }
    }

    // Overlapping phrases: the earlier rule wins.

    #[test]
    fn investigation_beats_perception() {
        assert_eq!(
            detected_skill("look around and search for clues"),
            Some(SkillType::Investigation)
        );
    }

    #[test]
    fn arcana_read_shadows_insight_read_emotion() {
        assert_eq!(
            detected_skill("read emotion on her face"),
            Some(SkillType::Arcana)
        );
    }

    #[test]
    fn nature_track_animal_beats_survival_track() {
        assert_eq!(
            detected_skill("track animal prints"),
            Some(SkillType::Nature)
        );
        assert_eq!(detected_skill("track the bandits"), Some(SkillType::Survival));
    }

    #[test]
    fn nature_animal_beats_handling_calm_animal() {
        assert_eq!(detected_skill("calm animal nerves"), Some(SkillType::Nature));
    }

    #[test]
    fn acrobatics_jump_over_beats_athletics_jump() {
        assert_eq!(detected_skill("jump over the pit"), Some(SkillType::Acrobatics));
        assert_eq!(detected_skill("jump across the gap"), Some(SkillType::Athletics));
    }

    #[test]
    fn insight_lying_beats_deception_lie() {
        assert_eq!(detected_skill("is he lying?"), Some(SkillType::Insight));
        assert_eq!(detected_skill("lie to the captain"), Some(SkillType::Deception));
    }

    #[test]
    fn substring_matches_inside_words() {
        // "act" inside "interact".
        assert_eq!(
            detected_skill("interact with the crowd"),
            Some(SkillType::Performance)
        );
    }

    #[test]
    fn deterministic() {
        let action = "quietly examine the runes while you listen";
        let first = detect_skill_check(action);
        for _ in 0..10 {
            assert_eq!(detect_skill_check(action), first);
        }
        assert_eq!(first.and_then(|c| c.skill), Some(SkillType::Arcana));
    }

    #[test]
    fn first_match_reports_keyword() {
        let (trigger, keyword) = first_match(CHECK_TRIGGERS, "search for clues nearby").unwrap();
        assert_eq!(trigger.skill, Some(SkillType::Investigation));
        assert_eq!(keyword, "search for clues");
    }

    #[test]
    fn ability_only_rules() {
        let rules = [CheckTrigger {
            keywords: &["endure"],
            skill: None,
            ability: AbilityType::Con,
        }];
        let (trigger, _) = first_match(&rules, "endure the cold").unwrap();
        let check = check_for(trigger);
        assert_eq!(check.kind, CheckKind::Ability);
        assert_eq!(check.skill, None);
        assert_eq!(check.ability, AbilityType::Con);
    }
}
