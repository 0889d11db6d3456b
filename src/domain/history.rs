// ============================================================================
// History Domain Model
// Bounded, append-only log of evaluated expressions
// ============================================================================

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of entries kept; the oldest entry is dropped first.
pub const HISTORY_CAPACITY: usize = 30;

/// One evaluated expression, e.g. `"2 + 3"` -> `"5"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    /// Formatted expression `"<a> <op> <b>"`
    #[cfg_attr(feature = "serde", serde(rename = "expr"))]
    pub expression: String,

    /// Formatted result as it was displayed
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

/// History log stored oldest-first and rendered most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a log from persisted entries (oldest-first), keeping only the most recent ones.
    pub fn from_entries(entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        let mut log = Self::new();
        for entry in entries {
            log.push(entry);
        }
        log
    }

    /// Append an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Storage order (oldest first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Render order (most recent first)
    pub fn iter_recent_first(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter().rev()
    }

    /// Snapshot in storage order
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
