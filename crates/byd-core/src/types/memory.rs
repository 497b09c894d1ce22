//! Per-word memory counter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of consecutive correct answers after which a word is mastered.
pub const MASTERY_THRESHOLD: u32 = 27;

/// Memory state of a single word.
///
/// `count` grows by one for every correct quiz answer, drops back to zero
/// on a wrong one, and never exceeds the mastery threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Consecutive correct answers
    pub count: u32,

    /// Day of the last update
    pub last_review: NaiveDate,
}

impl MemoryRecord {
    /// Creates a fresh record for a newly added word.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            count: 0,
            last_review: today,
        }
    }

    /// Creates a record with an explicit count and review date.
    pub fn with_count(count: u32, last_review: NaiveDate) -> Self {
        Self { count, last_review }
    }

    /// Applies a quiz answer.
    ///
    /// A correct answer increments the counter, saturating at `threshold`;
    /// a wrong answer resets it. The review date is set to `today`.
    pub fn record_answer(&mut self, correct: bool, threshold: u32, today: NaiveDate) {
        self.count = if correct {
            self.count.saturating_add(1).min(threshold)
        } else {
            0
        };
        self.last_review = today;
    }

    /// Returns `true` once the counter has reached `threshold`.
    pub fn is_mastered(&self, threshold: u32) -> bool {
        self.count >= threshold
    }
}
