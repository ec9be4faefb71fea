//! Roll results.

use serde::{Deserialize, Serialize};

use super::RollMode;

/// Two d20s rolled for advantage or disadvantage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedRoll {
    /// The face that counts.
    pub roll: u32,
    /// Both faces, in the order rolled.
    pub rolls: [u32; 2],
}

/// A d20 check roll with every face that was thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct D20Roll {
    /// How the check was rolled.
    pub mode: RollMode,
    /// Every face rolled, in order (one or two).
    pub faces: Vec<u32>,
    /// The face that counts.
    pub kept: u32,
}

impl D20Roll {
    pub(crate) fn from_pair(mode: RollMode, pair: PairedRoll) -> Self {
        Self {
            mode,
            faces: pair.rolls.to_vec(),
            kept: pair.roll,
        }
    }
}

impl std::fmt::Display for D20Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            RollMode::Normal => write!(f, "d20 {}", self.kept),
            _ => {
                let values: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
                write!(f, "2d20 [{}] ({}) {}", values.join(", "), self.mode, self.kept)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_normal() {
        let roll = D20Roll {
            mode: RollMode::Normal,
            faces: vec![14],
            kept: 14,
        };
        assert_eq!(roll.to_string(), "d20 14");
    }

    #[test]
    fn display_advantage() {
        let roll = D20Roll::from_pair(
            RollMode::Advantage,
            PairedRoll {
                roll: 18,
                rolls: [6, 18],
            },
        );
        assert_eq!(roll.to_string(), "2d20 [6, 18] (advantage) 18");
    }
}
