//! Bounded history of recent rolls.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::roll::RollResult;

/// Number of rolls the history keeps.
pub const HISTORY_CAPACITY: usize = 10;

/// A roll recorded in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Monotonic id, unique within one history.
    pub id: u64,
    /// When the roll was recorded.
    pub timestamp: DateTime<Utc>,
    /// The roll itself.
    pub result: RollResult,
}

/// The most recent rolls, newest first. Never holds more than
/// [`HISTORY_CAPACITY`] entries; the oldest is evicted on overflow.
/// A deserialized history is cut back to capacity the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawHistory")]
pub struct RollHistory {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

#[derive(Deserialize)]
struct RawHistory {
    #[serde(default)]
    entries: VecDeque<HistoryEntry>,
    #[serde(default)]
    next_id: u64,
}

impl From<RawHistory> for RollHistory {
    fn from(raw: RawHistory) -> Self {
        let mut entries = raw.entries;
        entries.truncate(HISTORY_CAPACITY);
        // Ids handed out later must not collide with stored ones.
        let highest = entries.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            entries,
            next_id: raw.next_id.max(highest),
        }
    }
}

impl RollHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll now.
    pub fn push(&mut self, result: RollResult) -> &HistoryEntry {
        self.push_at(result, Utc::now())
    }

    /// Record a roll with an explicit timestamp.
    pub fn push_at(&mut self, result: RollResult, timestamp: DateTime<Utc>) -> &HistoryEntry {
        self.next_id += 1;
        self.entries.push_front(HistoryEntry {
            id: self.next_id,
            timestamp,
            result,
        });
        self.entries.truncate(HISTORY_CAPACITY);
        &self.entries[0]
    }

    /// Remove every entry. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn list(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
