//! A dictionary row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{MemoryRecord, Word};

/// A word together with its meanings and memory state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Normalized key
    pub word: Word,

    /// Meanings joined with `"; "`
    pub meanings: String,

    /// Quiz memory state
    pub memory: MemoryRecord,
}

impl WordEntry {
    /// Creates an entry for a newly added word.
    pub fn new(word: Word, meanings: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            word,
            meanings: meanings.into(),
            memory: MemoryRecord::new(today),
        }
    }

    /// Returns `true` if the word has reached `threshold`.
    pub fn is_mastered(&self, threshold: u32) -> bool {
        self.memory.is_mastered(threshold)
    }
}
