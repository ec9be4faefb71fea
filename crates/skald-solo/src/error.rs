//! Error types for the solo session runner.

use thiserror::Error;

/// Result type for solo operations.
pub type SoloResult<T> = Result<T, SoloError>;

/// Errors that can occur during a solo session.
#[derive(Debug, Error)]
pub enum SoloError {
    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Character class not recognised.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// Mechanics parsing error.
    #[error("{0}")]
    Mechanics(#[from] skald_mechanics::MechError),

    /// Journal serialization error.
    #[error("journal serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
