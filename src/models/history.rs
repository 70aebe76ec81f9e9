use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted daily aggregate pressure score
///
/// Immutable once appended; the history file is a JSON array of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub score: i32,
}

impl HistoryEntry {
    /// Create a new history entry
    pub fn new(date: NaiveDate, score: i32) -> Self {
        Self { date, score }
    }
}
