use colored::Colorize;

use skald_mechanics::{
    NarrativeCheck, RollMode, SeededRolls, detect_skill_check, get_check_reason,
    perform_skill_check,
};

use crate::CharacterArgs;

/// How a resolved check is printed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Summary,
    Json,
    Prompt,
}

impl Output {
    pub fn from_flags(json: bool, prompt: bool) -> Self {
        match (json, prompt) {
            (true, _) => Self::Json,
            (false, true) => Self::Prompt,
            (false, false) => Self::Summary,
        }
    }
}

pub fn run(
    action: &str,
    character: &CharacterArgs,
    seed: Option<u64>,
    mode: RollMode,
    output: Output,
) -> Result<(), String> {
    let character = super::load_character(character.class, character.stats_file.as_deref())?;

    let Some(check) = detect_skill_check(action) else {
        match output {
            Output::Json => println!("null"),
            Output::Prompt => println!("PLAYER ACTION: {action}"),
            Output::Summary => println!("  No check needed"),
        }
        return Ok(());
    };
    let check = check
        .with_advantage(mode == RollMode::Advantage)
        .with_disadvantage(mode == RollMode::Disadvantage);

    let mut rolls = match seed {
        Some(seed) => SeededRolls::from_seed(seed),
        None => SeededRolls::from_os(),
    };
    let reason = get_check_reason(action, &check);
    let result = perform_skill_check(&check, &character.stats, reason, &mut rolls);
    let narrative = NarrativeCheck::from_result(&result);

    match output {
        Output::Json => {
            let payload = narrative.to_json().map_err(|e| e.to_string())?;
            println!("{payload}");
        }
        Output::Prompt => print!("{}", narrative.annotate_action(action)),
        Output::Summary => {
            println!(
                "  {}: {} ({})",
                check.kind_label(),
                check.name().bold(),
                result.reason().dimmed()
            );
            println!("  {result}");
            if result.is_critical() {
                println!("  {}", "NATURAL 20!".green().bold());
            } else if result.is_fumble() {
                println!("  {}", "NATURAL 1...".red().bold());
            }
        }
    }

    Ok(())
}
