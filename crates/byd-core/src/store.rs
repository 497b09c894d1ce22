//! Dictionary persistence.
//!
//! The word list lives in a flat CSV table with a header row:
//!
//! ```text
//! word,meanings,memory_data,last_review
//! apple,苹果; apple fruit,3,2024-05-20
//! ```
//!
//! `memory_data` and `last_review` are optional when reading; a file that only
//! has `word` and `meanings` loads with fresh memory records.
//!
//! # Backends
//!
//! - [`CsvStore`]: the on-disk table
//! - [`MemoryStore`]: keeps the last saved dictionary in memory (for tests and
//!   one-shot runs that must not touch the disk)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::types::{MemoryRecord, Word, WordEntry};

/// Date format of the `last_review` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loads and saves a [`Dictionary`].
pub trait DictionaryStore {
    /// Loads the dictionary, using `today` for rows without a review date.
    fn load(&self, threshold: u32, today: NaiveDate) -> Result<Dictionary>;

    /// Persists the dictionary. Empty dictionaries are not written.
    fn save(&self, dictionary: &Dictionary) -> Result<()>;

    /// Human-readable location of the data, for messages.
    fn location(&self) -> String;
}

impl<T: DictionaryStore + ?Sized> DictionaryStore for &T {
    fn load(&self, threshold: u32, today: NaiveDate) -> Result<Dictionary> {
        (**self).load(threshold, today)
    }

    fn save(&self, dictionary: &Dictionary) -> Result<()> {
        (**self).save(dictionary)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

// ============================================================================
// CSV backend
// ============================================================================

/// CSV file backend.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct InputRow {
    word: String,
    meanings: String,
    #[serde(default)]
    memory_data: Option<String>,
    #[serde(default)]
    last_review: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    word: &'a str,
    meanings: &'a str,
    memory_data: u32,
    last_review: String,
}

impl CsvStore {
    /// Creates a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl DictionaryStore for CsvStore {
    fn load(&self, threshold: u32, today: NaiveDate) -> Result<Dictionary> {
        let mut dictionary = Dictionary::with_threshold(threshold);
        if !self.path.exists() {
            info!(path = %self.path.display(), "Dictionary file not found, starting empty");
            return Ok(dictionary);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Fields)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let row: InputRow = record.deserialize(Some(&headers))?;
            match entry_from_row(row, line, today)? {
                Some(entry) => dictionary.insert_entry(entry),
                None => warn!(line, "Skipping row with an empty word"),
            }
        }

        debug!(
            path = %self.path.display(),
            words = dictionary.len(),
            "Loaded dictionary"
        );
        Ok(dictionary)
    }

    fn save(&self, dictionary: &Dictionary) -> Result<()> {
        if dictionary.is_empty() {
            debug!("Dictionary is empty, nothing to save");
            return Ok(());
        }

        let dir = self.parent_dir();
        std::fs::create_dir_all(&dir).map_err(|e| Error::io_with_path(e, &dir))?;

        let tmp =
            tempfile::NamedTempFile::new_in(&dir).map_err(|e| Error::io_with_path(e, &dir))?;
        let mut writer = csv::Writer::from_writer(tmp);
        for entry in dictionary.entries() {
            writer.serialize(OutputRow {
                word: entry.word.as_str(),
                meanings: &entry.meanings,
                memory_data: entry.memory.count,
                last_review: entry.memory.last_review.format(DATE_FORMAT).to_string(),
            })?;
        }
        let tmp = writer
            .into_inner()
            .map_err(|e| Error::io_with_path(e.into_error(), &self.path))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::io_with_path(e, tmp.path()))?;
        tmp.persist(&self.path)
            .map_err(|e| Error::io_with_path(e.error, &self.path))?;

        info!(path = %self.path.display(), words = dictionary.len(), "Saved dictionary");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn entry_from_row(row: InputRow, line: u64, today: NaiveDate) -> Result<Option<WordEntry>> {
    let word = Word::normalized(&row.word);
    if word.as_str().is_empty() {
        return Ok(None);
    }

    let count = match non_empty(row.memory_data) {
        Some(raw) => parse_count(&raw).ok_or_else(|| {
            Error::invalid_record(line, format!("memory_data '{raw}' is not a count"))
        })?,
        None => 0,
    };

    let last_review = match non_empty(row.last_review) {
        Some(raw) => parse_date(&raw).ok_or_else(|| {
            Error::invalid_record(line, format!("last_review '{raw}' is not a date"))
        })?,
        None => today,
    };

    Ok(Some(WordEntry {
        word,
        meanings: row.meanings,
        memory: MemoryRecord::with_count(count, last_review),
    }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts plain integers and integral floats (`"3.0"`), as written by
/// spreadsheet exports.
fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return Some(n);
    }
    let f = raw.parse::<f64>().ok()?;
    (f.fract() == 0.0 && f >= 0.0 && f <= f64::from(u32::MAX)).then_some(f as u32)
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split([' ', 'T']).next()?;
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Store that keeps the last saved dictionary in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    saved: Option<Dictionary>,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a dictionary.
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                saved: Some(dictionary),
                saves: 0,
            }),
        }
    }

    /// The last saved dictionary, if any.
    pub fn saved(&self) -> Option<Dictionary> {
        self.state().saved.clone()
    }

    /// Number of non-empty saves performed.
    pub fn save_count(&self) -> usize {
        self.state().saves
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DictionaryStore for MemoryStore {
    fn load(&self, threshold: u32, _today: NaiveDate) -> Result<Dictionary> {
        let mut dictionary = self.saved().unwrap_or_default();
        dictionary.set_threshold(threshold);
        Ok(dictionary)
    }

    fn save(&self, dictionary: &Dictionary) -> Result<()> {
        if dictionary.is_empty() {
            return Ok(());
        }
        let mut state = self.state();
        state.saved = Some(dictionary.clone());
        state.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
