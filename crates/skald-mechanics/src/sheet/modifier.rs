//! Ability modifiers.

use crate::catalog::AbilityType;
use crate::sheet::CharacterStats;

/// The modifier for a raw ability score: `floor((score - 10) / 2)`.
///
/// Rounds toward negative infinity, so `modifier(7)` is -2, not -1.
/// Defined for every `i32`; halving before the offset keeps it from overflowing.
pub fn modifier(score: i32) -> i32 {
    score.div_euclid(2) - 5
}

/// The modifier for one of a character's abilities.
pub fn ability_modifier(stats: &CharacterStats, ability: AbilityType) -> i32 {
    modifier(stats.score(ability))
}

/// Render a modifier with an explicit sign: `+3`, `+0`, `-2`.
pub fn format_modifier(n: i32) -> String {
    if n >= 0 { format!("+{n}") } else { n.to_string() }
}
