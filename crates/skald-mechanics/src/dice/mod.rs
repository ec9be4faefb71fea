//! Dice rolling.
//!
//! All rolls draw from an injected [`RollSource`]. A check rolls a single
//! d20, or two d20s keeping the higher (advantage) or lower (disadvantage).

pub mod roll;
pub mod source;

pub use roll::{D20Roll, PairedRoll};
pub use source::{FixedRolls, RollSource, SeededRolls, SharedRolls};

use serde::{Deserialize, Serialize};

/// Sides on the check die.
pub const D20: u32 = 20;

/// How a d20 check is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollMode {
    /// One die.
    #[default]
    Normal,
    /// Two dice, keep the higher.
    Advantage,
    /// Two dice, keep the lower.
    Disadvantage,
}

impl RollMode {
    /// Pick the mode from a check's flags.
    ///
    /// Advantage and disadvantage together fall back to a single flat roll.
    pub fn from_flags(advantage: bool, disadvantage: bool) -> Self {
        match (advantage, disadvantage) {
            (true, false) => Self::Advantage,
            (false, true) => Self::Disadvantage,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for RollMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Advantage => write!(f, "advantage"),
            Self::Disadvantage => write!(f, "disadvantage"),
        }
    }
}

/// Roll one die with `sides` faces.
pub fn roll_die(source: &mut impl RollSource, sides: u32) -> u32 {
    let face = source.roll_die(sides);
    tracing::trace!(sides, face, "rolled die");
    face
}

/// Roll a single d20.
pub fn roll_d20(source: &mut impl RollSource) -> u32 {
    roll_die(source, D20)
}

/// Roll two d20s and keep the higher.
pub fn roll_with_advantage(source: &mut impl RollSource) -> PairedRoll {
    let rolls = [roll_d20(source), roll_d20(source)];
    PairedRoll {
        roll: rolls[0].max(rolls[1]),
        rolls,
    }
}

/// Roll two d20s and keep the lower.
pub fn roll_with_disadvantage(source: &mut impl RollSource) -> PairedRoll {
    let rolls = [roll_d20(source), roll_d20(source)];
    PairedRoll {
        roll: rolls[0].min(rolls[1]),
        rolls,
    }
}

/// Roll a d20 check in the given mode, keeping every face rolled.
pub fn roll_check(source: &mut impl RollSource, mode: RollMode) -> D20Roll {
    match mode {
        RollMode::Normal => {
            let face = roll_d20(source);
            D20Roll {
                mode,
                faces: vec![face],
                kept: face,
            }
        }
        RollMode::Advantage => D20Roll::from_pair(mode, roll_with_advantage(source)),
        RollMode::Disadvantage => D20Roll::from_pair(mode, roll_with_disadvantage(source)),
    }
}
