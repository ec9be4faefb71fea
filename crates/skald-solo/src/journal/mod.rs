//! Journaling system for recording checks and actions.

pub mod entry;
pub mod log;

pub use entry::{DiceRoll, JournalEntry, LogEntryType};
pub use log::Journal;
