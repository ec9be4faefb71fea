//! Error types for the mechanics engine.
//!
//! The check pipeline itself never fails. These errors only arise when
//! parsing names, stat blocks and serialized checks supplied from outside
//! the crate.

/// Errors that can occur while parsing mechanics input.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An ability name or code was not recognised.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A skill name was not recognised.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// A check kind label was not recognised.
    #[error("unknown check kind: {0}")]
    UnknownCheckKind(String),

    /// A stat block could not be parsed.
    #[error("invalid stats: {0}")]
    InvalidStats(String),

    /// A serialized check names a skill that disagrees with its kind.
    #[error("invalid check: {0}")]
    InvalidCheck(String),

    /// A serialized result whose numbers contradict each other.
    #[error("inconsistent check result: {0}")]
    InconsistentResult(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
