//! Calculation history.
//!
//! Storage is append-only and unbounded for the life of the session; only
//! the view is truncated, to the most recent [`History::DISPLAY_ENTRIES`]
//! entries.

use serde::{Deserialize, Serialize};

/// A single past calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression exactly as the user entered it (pre-rewrite).
    pub expression: String,
    /// The formatted result string.
    pub result: String,
    /// When the calculation ran (Unix epoch millis).
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(expression: String, result: String) -> Self {
        Self {
            expression,
            result,
            timestamp: Self::current_timestamp(),
        }
    }

    /// Creates an entry with an explicit timestamp (for testing).
    #[must_use]
    pub fn with_timestamp(expression: String, result: String, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// The `expression = result` display form.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Append-only log of past calculations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// How many entries the UI shows.
    pub const DISPLAY_ENTRIES: usize = 5;

    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Records a calculation.
    pub fn record(&mut self, expression: &str, result: &str) {
        self.push(HistoryEntry::new(expression.to_string(), result.to_string()));
    }

    /// Total number of entries ever recorded this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The display view: the last [`Self::DISPLAY_ENTRIES`] entries in
    /// original (oldest-first) order.
    #[must_use]
    pub fn recent(&self) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(Self::DISPLAY_ENTRIES);
        &self.entries[start..]
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
