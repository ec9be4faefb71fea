//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::{JournalEntry, LogEntryType};

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of natural 20s and natural 1s rolled, in that order.
    pub fn natural_counts(&self) -> (usize, usize) {
        self.entries
            .iter()
            .fold((0, 0), |(crits, fumbles), entry| match entry_type(entry) {
                Some(LogEntryType::Critical) => (crits + 1, fumbles),
                Some(LogEntryType::Fumble) => (crits, fumbles + 1),
                _ => (crits, fumbles),
            })
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Adventure Journal\n\n");
        for entry in &self.entries {
            write_entry(&mut out, entry, Markup::Markdown);
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Adventure Journal\n=================\n\n");
        for entry in &self.entries {
            write_entry(&mut out, entry, Markup::Text);
        }
        out
    }

    /// Plain text for the last `n` entries, without the header.
    pub fn tail_text(&self, n: usize) -> String {
        let start = self.entries.len().saturating_sub(n);
        let mut out = String::new();
        for entry in &self.entries[start..] {
            write_entry(&mut out, entry, Markup::Text);
        }
        out
    }

    /// Export the journal as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// How names and notes are marked up in an export.
#[derive(Clone, Copy)]
enum Markup {
    Markdown,
    Text,
}

impl Markup {
    fn strong(self, s: &str) -> String {
        match self {
            Self::Markdown => format!("**{s}**"),
            Self::Text => s.to_string(),
        }
    }

    fn note(self, text: &str) -> String {
        match self {
            Self::Markdown => format!("> {text}"),
            Self::Text => format!("Note: {text}"),
        }
    }
}

fn write_entry(out: &mut String, entry: &JournalEntry, markup: Markup) {
    let line = match entry {
        JournalEntry::SkillCheck {
            actor,
            action,
            entry_type,
            dice_roll,
            result,
            ..
        } => format!(
            "{}: {action}\n  {} ({}): {dice_roll}{}",
            markup.strong(actor),
            markup.strong(result.check().name()),
            result.reason(),
            badge(*entry_type)
        ),
        JournalEntry::Action { actor, action, .. } => {
            format!("{}: {action}", markup.strong(actor))
        }
        JournalEntry::DiceRoll {
            entry_type,
            dice_roll,
            ..
        } => format!("{} {dice_roll}{}", markup.strong("Roll"), badge(*entry_type)),
        JournalEntry::Note { text, .. } => markup.note(text),
    };
    out.push_str(&line);
    out.push_str("\n\n");
}

fn entry_type(entry: &JournalEntry) -> Option<LogEntryType> {
    match entry {
        JournalEntry::SkillCheck { entry_type, .. } | JournalEntry::DiceRoll { entry_type, .. } => {
            Some(*entry_type)
        }
        _ => None,
    }
}

fn badge(entry_type: LogEntryType) -> &'static str {
    match entry_type {
        LogEntryType::Critical => " [NATURAL 20]",
        LogEntryType::Fumble => " [NATURAL 1]",
        LogEntryType::Roll => "",
    }
}
