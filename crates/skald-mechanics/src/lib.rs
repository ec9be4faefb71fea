//! d20 skill check engine for Skald.
//!
//! Detects when a free-text player action calls for an ability or skill
//! check, rolls the d20 (with advantage or disadvantage), applies the
//! character's ability modifier, and flags natural 20s and natural 1s.
//! The [`narrative`] module packages a resolved check for the external
//! narrative generator.

pub mod catalog;
pub mod check;
pub mod detect;
pub mod dice;
pub mod error;
pub mod narrative;
pub mod sheet;

pub use catalog::{AbilityType, SkillType};
pub use check::{CheckKind, SkillCheck, SkillCheckResult, perform_skill_check};
pub use detect::{detect_skill_check, get_check_reason};
pub use dice::{FixedRolls, PairedRoll, RollMode, RollSource, SeededRolls, SharedRolls};
pub use error::{MechError, MechResult};
pub use narrative::{NarrativeCheck, ROLL_POLICY};
pub use sheet::CharacterStats;
pub use sheet::modifier::{ability_modifier, format_modifier, modifier};
