//! Solo session management.
//!
//! `SoloSession` owns the character, the roll source and the journal.
//! Lines that are not session commands are treated as player actions: the
//! check detector decides whether a roll is needed, and the resolved result
//! is journaled and packaged as a prompt for the narrator.

use chrono::Utc;

use skald_mechanics::dice::{self, RollMode};
use skald_mechanics::{
    NarrativeCheck, SeededRolls, SkillCheck, SkillCheckResult, detect_skill_check,
    get_check_reason, perform_skill_check,
};

use crate::character::Character;
use crate::config::SoloConfig;
use crate::error::{SoloError, SoloResult};
use crate::journal::entry::{DiceRoll, JournalEntry, LogEntryType};
use crate::journal::log::Journal;

/// An interactive solo session.
pub struct SoloSession {
    character: Character,
    rolls: SeededRolls,
    journal: Journal,
    last_result: Option<SkillCheckResult>,
    last_prompt: Option<String>,
}

impl SoloSession {
    /// Create a new session.
    pub fn new(config: SoloConfig) -> Self {
        let rolls = match config.seed {
            Some(seed) => SeededRolls::from_seed(seed),
            None => SeededRolls::from_os(),
        };
        Self {
            character: config.character(),
            rolls,
            journal: Journal::new(),
            last_result: None,
            last_prompt: None,
        }
    }

    /// Get the character.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The most recent resolved check.
    pub fn last_result(&self) -> Option<&SkillCheckResult> {
        self.last_result.as_ref()
    }

    /// The narrator prompt for the most recent action.
    pub fn last_prompt(&self) -> Option<&str> {
        self.last_prompt.as_deref()
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SoloResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" => match parse_mode(rest) {
                Some(mode) => Ok(self.do_roll(mode)),
                None => Ok(self.do_action(trimmed)),
            },
            "check" => match parse_check(rest) {
                Some(check) => Ok(self.do_check(check, trimmed)),
                None => Ok(self.do_action(trimmed)),
            },
            "stats" | "sheet" if rest.is_empty() => {
                Ok(self.character.sheet().trim_end().to_string())
            }
            "note" => self.do_note(rest),
            "journal" if rest.is_empty() => Ok(self.do_journal_show()),
            "export" => self.do_journal_export(rest),
            "help" if rest.is_empty() => Ok(HELP.to_string()),
            "quit" | "q" if rest.is_empty() => Ok("Farewell, adventurer.".to_string()),
            _ => Ok(self.do_action(trimmed)),
        }
    }

    /// Detect and resolve the check for an action, journaling the outcome.
    ///
    /// Returns `None` when the action needs no roll.
    pub fn attempt(&mut self, action: &str) -> Option<SkillCheckResult> {
        let Some(check) = detect_skill_check(action) else {
            tracing::debug!(action, "no check needed");
            self.journal.append(JournalEntry::Action {
                actor: self.character.name.clone(),
                action: action.to_string(),
                timestamp: Utc::now(),
            });
            self.last_prompt = Some(format!("PLAYER ACTION: {action}\n"));
            return None;
        };
        let reason = get_check_reason(action, &check);
        Some(self.resolve(check, action, reason))
    }

    fn resolve(&mut self, check: SkillCheck, action: &str, reason: String) -> SkillCheckResult {
        let result = perform_skill_check(&check, &self.character.stats, reason, &mut self.rolls);
        self.last_prompt = Some(NarrativeCheck::from_result(&result).annotate_action(action));
        self.journal.append(JournalEntry::skill_check(
            self.character.name.clone(),
            action,
            result.clone(),
        ));
        self.last_result = Some(result.clone());
        result
    }

    fn do_action(&mut self, action: &str) -> String {
        match self.attempt(action) {
            Some(result) => describe(&result),
            None => "No check needed.".to_string(),
        }
    }

    fn do_check(&mut self, check: SkillCheck, input: &str) -> String {
        let reason = format!("{} requested", check.name());
        let result = self.resolve(check, input, reason);
        describe(&result)
    }

    fn do_roll(&mut self, mode: RollMode) -> String {
        let thrown = dice::roll_check(&mut self.rolls, mode);
        let entry_type = LogEntryType::for_face(thrown.kept);
        let dice_roll = DiceRoll {
            dice: "D20".to_string(),
            count: thrown.faces.len() as u32,
            rolls: thrown.faces.clone(),
            modifier: 0,
            total: thrown.kept as i32,
            purpose: None,
        };
        self.journal.append(JournalEntry::DiceRoll {
            entry_type,
            dice_roll,
            timestamp: Utc::now(),
        });
        match entry_type {
            LogEntryType::Critical => format!("{thrown}  NATURAL 20!"),
            LogEntryType::Fumble => format!("{thrown}  NATURAL 1..."),
            LogEntryType::Roll => thrown.to_string(),
        }
    }

    fn do_note(&mut self, text: &str) -> SoloResult<String> {
        if text.is_empty() {
            return Err(SoloError::InvalidChoice("usage: note <text>".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Note recorded.".to_string())
    }

    fn do_journal_show(&self) -> String {
        if self.journal.is_empty() {
            return "Journal is empty.".to_string();
        }
        let shown = self.journal.len().min(10);
        let (crits, fumbles) = self.journal.natural_counts();
        let mut out = format!(
            "Journal ({} entries, showing last {shown}):\n",
            self.journal.len()
        );
        out.push_str(&format!("Natural 20s: {crits} | Natural 1s: {fumbles}\n\n"));
        out.push_str(&self.journal.tail_text(shown));
        out.trim_end().to_string()
    }

    fn do_journal_export(&self, format: &str) -> SoloResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            "json" => Ok(self.journal.export_json()?),
            other => Err(SoloError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }
}

const HELP: &str = "\
Commands:
  <action>                      Describe what you do; a check is rolled if needed
  check <skill|ability> [adv|dis]
                                Roll a specific check
  roll [adv|dis]                Roll a bare d20
  stats                         Show the character sheet
  note <text>                   Add a journal note
  journal                       Show recent entries
  export [markdown|text|json]   Export the full journal
  help                          Show this help
  quit                          Exit";

/// Heading line plus the result line.
fn describe(result: &SkillCheckResult) -> String {
    let check = result.check();
    let mut out = format!(
        "{}: {} ({})\n{result}",
        check.kind_label(),
        check.name(),
        result.reason()
    );
    if result.is_critical() {
        out.push_str("\nNATURAL 20!");
    } else if result.is_fumble() {
        out.push_str("\nNATURAL 1...");
    }
    out
}

fn parse_mode(word: &str) -> Option<RollMode> {
    match word.to_lowercase().as_str() {
        "" => Some(RollMode::Normal),
        "adv" | "advantage" => Some(RollMode::Advantage),
        "dis" | "disadvantage" => Some(RollMode::Disadvantage),
        _ => None,
    }
}

/// `<skill|ability> [adv|dis]`; `None` when the words are not a check.
fn parse_check(rest: &str) -> Option<SkillCheck> {
    let (name, mode) = rest
        .rsplit_once(' ')
        .and_then(|(name, last)| Some((name, parse_mode(last)?)))
        .unwrap_or((rest, RollMode::Normal));
    let check: SkillCheck = name.parse().ok()?;
    Some(
        check
            .with_advantage(mode == RollMode::Advantage)
            .with_disadvantage(mode == RollMode::Disadvantage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skald_mechanics::{AbilityType, ROLL_POLICY, SkillType};

    use crate::character::CharacterClass;

    fn test_session() -> SoloSession {
        SoloSession::new(
            SoloConfig::default()
                .with_seed(42)
                .with_name("Brom")
                .with_class(CharacterClass::Fighter),
        )
    }

    #[test]
    fn create_session() {
        let s = test_session();
        assert_eq!(s.character().name, "Brom");
        assert!(s.journal().is_empty());
        assert!(s.last_result().is_none());
    }

    #[test]
    fn action_with_check() {
        let mut s = test_session();
        let output = s.process("climb the castle wall").unwrap();
        assert!(output.starts_with("Skill Check: Athletics (Climbing the surface)\n"));
        let result = s.last_result().unwrap();
        assert_eq!(result.check().skill, Some(SkillType::Athletics));
        assert_eq!(result.modifier(), 3);
        assert_eq!(result.total(), result.roll() as i32 + 3);
        assert_eq!(s.journal().len(), 1);
    }

    #[test]
    fn prompt_carries_check() {
        let mut s = test_session();
        s.process("sneak past the guard").unwrap();
        let prompt = s.last_prompt().unwrap();
        assert!(prompt.starts_with("PLAYER ACTION: sneak past the guard\n\nSKILL CHECK: Stealth"));
        assert!(prompt.contains(ROLL_POLICY));
    }

    #[test]
    fn action_without_check() {
        let mut s = test_session();
        let output = s.process("I open the door").unwrap();
        assert_eq!(output, "No check needed.");
        assert!(s.last_result().is_none());
        assert_eq!(s.last_prompt(), Some("PLAYER ACTION: I open the door\n"));
        assert!(matches!(s.journal().entries()[0], JournalEntry::Action { .. }));
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = test_session();
        let mut b = test_session();
        for action in ["climb the wall", "listen at the door", "persuade the guard"] {
            a.process(action).unwrap();
            b.process(action).unwrap();
            assert_eq!(a.last_result(), b.last_result());
        }
    }

    #[test]
    fn explicit_check_command() {
        let mut s = test_session();
        s.process("check con").unwrap();
        let result = s.last_result().unwrap();
        assert_eq!(result.check().effective_ability(), AbilityType::Con);
        assert_eq!(result.modifier(), 2);
        assert_eq!(result.reason(), "Constitution requested");
    }

    #[test]
    fn explicit_check_with_advantage() {
        let mut s = test_session();
        s.process("check sleight of hand adv").unwrap();
        let result = s.last_result().unwrap();
        assert_eq!(result.check().skill, Some(SkillType::SleightOfHand));
        assert!(result.check().advantage);
        assert_eq!(result.rolls().len(), 2);
        assert_eq!(result.roll(), result.rolls()[0].max(result.rolls()[1]));
    }

    #[test]
    fn check_prefix_that_is_not_a_check_is_an_action() {
        let mut s = test_session();
        s.process("check the weather").unwrap();
        let result = s.last_result().unwrap();
        assert_eq!(result.check().skill, Some(SkillType::Nature));
    }

    #[test]
    fn free_roll() {
        let mut s = test_session();
        let output = s.process("roll dis").unwrap();
        assert!(output.starts_with("2d20 ["));
        assert!(matches!(
            s.journal().entries()[0],
            JournalEntry::DiceRoll { .. }
        ));
        assert!(s.last_result().is_none());
    }

    #[test]
    fn roll_followed_by_words_is_an_action() {
        let mut s = test_session();
        s.process("roll the barrel aside").unwrap();
        assert!(matches!(s.journal().entries()[0], JournalEntry::Action { .. }));
    }

    #[test]
    fn stats_and_help() {
        let mut s = test_session();
        assert!(s.process("stats").unwrap().contains("STR  16 (+3)"));
        assert!(s.process("help").unwrap().contains("export [markdown|text|json]"));
        assert!(s.journal().is_empty());
    }

    #[test]
    fn notes_and_journal() {
        let mut s = test_session();
        assert!(s.process("note").is_err());
        assert_eq!(s.process("journal").unwrap(), "Journal is empty.");
        s.process("note the key is under the mat").unwrap();
        s.process("hide behind the crates").unwrap();
        let shown = s.process("journal").unwrap();
        assert!(shown.starts_with("Journal (2 entries, showing last 2):\nNatural 20s: "));
        assert!(shown.contains("Note: the key is under the mat"));
        assert!(shown.contains("Stealth (Moving silently)"));
    }

    #[test]
    fn journal_view_counts_naturals() {
        let mut s = test_session();
        for _ in 0..60 {
            s.process("roll").unwrap();
        }
        let (crits, fumbles) = s.journal().natural_counts();
        let shown = s.process("journal").unwrap();
        assert!(shown.contains(&format!("Natural 20s: {crits} | Natural 1s: {fumbles}\n")));
        assert!(shown.starts_with("Journal (60 entries, showing last 10):\n"));
    }

    #[test]
    fn export_formats() {
        let mut s = test_session();
        s.process("pray to the moon").unwrap();
        assert!(s.process("export").unwrap().starts_with("# Adventure Journal"));
        assert!(s.process("export text").unwrap().starts_with("Adventure Journal"));
        let json = s.process("export json").unwrap();
        assert!(json.contains("\"SkillCheck\""));
        assert!(s.process("export pdf").is_err());
    }

    #[test]
    fn quit() {
        let mut s = test_session();
        assert_eq!(s.process("quit").unwrap(), "Farewell, adventurer.");
    }

    #[test]
    fn parse_check_words() {
        assert_eq!(
            parse_check("stealth dis"),
            Some(SkillCheck::skill(SkillType::Stealth).with_disadvantage(true))
        );
        assert_eq!(
            parse_check("animal handling"),
            Some(SkillCheck::skill(SkillType::AnimalHandling))
        );
        assert_eq!(parse_check("the weather"), None);
    }
}
