//! In-memory word table.
//!
//! [`Dictionary`] keeps every [`WordEntry`] in a `BTreeMap` keyed by the
//! normalized [`Word`], so iteration order is always alphabetical. This is
//! the order used by the browse pages and by prefix search.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{MASTERY_THRESHOLD, MemoryRecord, Word, WordEntry};

/// Default number of rows on a browse page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The word list with meanings and memory counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<Word, WordEntry>,
    threshold: u32,
}

/// Summary counts over a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DictionaryStats {
    /// Number of words
    pub total: usize,
    /// Number of words at or above the mastery threshold
    pub mastered: usize,
}

/// One page of the alphabetical word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// 0-based page index
    pub index: usize,
    /// Number of pages in the dictionary
    pub total_pages: usize,
    /// 1-based row number of the first entry (0 when empty)
    pub start: usize,
    /// 1-based row number of the last entry (0 when empty)
    pub end: usize,
    /// Number of words in the dictionary
    pub total: usize,
    /// Entries on this page
    pub entries: Vec<&'a WordEntry>,
}

impl Dictionary {
    /// Creates an empty dictionary with the default mastery threshold.
    pub fn new() -> Self {
        Self::with_threshold(MASTERY_THRESHOLD)
    }

    /// Creates an empty dictionary with a custom mastery threshold.
    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            entries: BTreeMap::new(),
            threshold: threshold.max(1),
        }
    }

    /// Returns the mastery threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Changes the mastery threshold.
    pub fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold.max(1);
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a word, replacing any existing entry, with a fresh memory record.
    pub fn insert(
        &mut self,
        word: Word,
        meanings: impl Into<String>,
        today: NaiveDate,
    ) -> &WordEntry {
        let entry = WordEntry::new(word.clone(), meanings, today);
        debug!(word = %word, meanings = %entry.meanings, "Adding word");
        match self.entries.entry(word) {
            Entry::Occupied(mut slot) => {
                slot.insert(entry);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(entry),
        }
    }

    /// Inserts a fully formed entry, as read back from storage.
    pub fn insert_entry(&mut self, entry: WordEntry) {
        self.entries.insert(entry.word.clone(), entry);
    }

    /// Looks up a word given as free text (case-insensitive).
    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(&Word::normalized(word))
    }

    /// Returns the entry for a normalized word.
    pub fn get(&self, word: &Word) -> Option<&WordEntry> {
        self.entries.get(word)
    }

    /// Returns `true` if the word is present.
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.contains_key(word)
    }

    /// Iterates over all entries in alphabetical order.
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }

    /// Applies a quiz answer to a word's memory counter.
    pub fn record_answer(
        &mut self,
        word: &Word,
        correct: bool,
        today: NaiveDate,
    ) -> Result<MemoryRecord> {
        let threshold = self.threshold;
        let entry = self
            .entries
            .get_mut(word)
            .ok_or_else(|| Error::word_not_found(word.as_str()))?;
        entry.memory.record_answer(correct, threshold, today);
        debug!(word = %word, correct, count = entry.memory.count, "Recorded answer");
        Ok(entry.memory)
    }

    /// Words still below the mastery threshold, in alphabetical order.
    pub fn quiz_words(&self) -> Vec<Word> {
        self.entries
            .values()
            .filter(|e| !e.is_mastered(self.threshold))
            .map(|e| e.word.clone())
            .collect()
    }

    /// Total and mastered word counts.
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            total: self.entries.len(),
            mastered: self
                .entries
                .values()
                .filter(|e| e.is_mastered(self.threshold))
                .count(),
        }
    }

    /// Number of pages needed to show every word.
    pub fn total_pages(&self, page_size: usize) -> usize {
        self.entries.len().div_ceil(page_size.max(1))
    }

    /// Returns the requested page, clamped to the last page.
    pub fn page(&self, index: usize, page_size: usize) -> Page<'_> {
        let page_size = page_size.max(1);
        let total = self.entries.len();
        let total_pages = self.total_pages(page_size);
        let index = index.min(total_pages.saturating_sub(1));
        let entries: Vec<&WordEntry> = self
            .entries
            .values()
            .skip(index * page_size)
            .take(page_size)
            .collect();

        let (start, end) = if entries.is_empty() {
            (0, 0)
        } else {
            (index * page_size + 1, index * page_size + entries.len())
        };

        Page {
            index,
            total_pages,
            start,
            end,
            total,
            entries,
        }
    }

    /// Page index holding the first word that starts with `prefix`.
    pub fn find_prefix_page(&self, prefix: &str, page_size: usize) -> Option<usize> {
        self.entries
            .keys()
            .position(|w| w.starts_with(prefix))
            .map(|pos| pos / page_size.max(1))
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
