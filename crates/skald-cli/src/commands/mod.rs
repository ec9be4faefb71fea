pub mod check;
pub mod detect;
pub mod modifier;
pub mod roll;
pub mod skills;
pub mod solo;

use std::path::Path;

use skald_mechanics::CharacterStats;
use skald_solo::{Character, CharacterClass};

/// Build the rolling character from a class preset or a stats file.
fn load_character(
    class: CharacterClass,
    stats_file: Option<&Path>,
) -> Result<Character, String> {
    let Some(path) = stats_file else {
        return Ok(Character::from_class(class.label(), class));
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let stats = CharacterStats::from_json(&json).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), %stats, "loaded stats file");
    Ok(Character::new("Character", stats))
}
