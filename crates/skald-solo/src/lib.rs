//! Solo session runner for Skald.
//!
//! Wraps the check engine in a stateful session: a character with a stat
//! block, a seeded roll source, and a journal recording every check in the
//! shape of a combat log. Free-text actions are scanned for checks,
//! resolved, journaled, and turned into a prompt for the narrator.

pub mod character;
pub mod config;
pub mod error;
pub mod journal;
pub mod session;

pub use character::{Character, CharacterClass};
pub use config::SoloConfig;
pub use error::{SoloError, SoloResult};
pub use journal::{DiceRoll, Journal, JournalEntry, LogEntryType};
pub use session::SoloSession;
