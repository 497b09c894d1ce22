//! Dictionary keys and meaning strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Separator placed between individual meanings of a word.
pub const MEANING_SEPARATOR: &str = "; ";

/// A normalized dictionary key.
///
/// Keys are trimmed and lowercased, so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Word(String);

impl Word {
    /// Parses user input into a word, rejecting empty input and input
    /// containing digits. Any Unicode digit counts, including full-width
    /// and superscript forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use byd_core::Word;
    ///
    /// let word = Word::parse("  Serendipity ").unwrap();
    /// assert_eq!(word.as_str(), "serendipity");
    /// assert!(Word::parse("r2d2").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_numeric) {
            return Err(Error::invalid_word(trimmed.to_lowercase()));
        }
        Ok(Self::normalized(trimmed))
    }

    /// Normalizes a stored key without validating it.
    ///
    /// Used for rows read back from the dictionary file, which were
    /// validated when they were first added.
    pub fn normalized(input: &str) -> Self {
        Self(input.trim().to_lowercase())
    }

    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the word starts with the (lowercased) prefix.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(&prefix.trim().to_lowercase())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses the meanings typed by the user when adding a word.
///
/// Input is split on whitespace. Returns `None` when nothing remains or
/// when any piece is `q`, which cancels the add.
///
/// # Examples
///
/// ```
/// use byd_core::parse_meanings;
///
/// assert_eq!(parse_meanings("happy  glad"), Some("happy; glad".to_string()));
/// assert_eq!(parse_meanings("   "), None);
/// assert_eq!(parse_meanings("happy Q"), None);
/// ```
pub fn parse_meanings(input: &str) -> Option<String> {
    let pieces: Vec<&str> = input.split_whitespace().collect();
    if pieces.is_empty() || pieces.iter().any(|p| p.eq_ignore_ascii_case("q")) {
        return None;
    }
    Some(pieces.join(MEANING_SEPARATOR))
}

/// Normalizes the spacing of a stored meaning string.
///
/// # Examples
///
/// ```
/// use byd_core::format_meanings;
///
/// assert_eq!(format_meanings("a;b ;  c"), "a; b; c");
/// ```
pub fn format_meanings(meanings: &str) -> String {
    meanings
        .split(';')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(MEANING_SEPARATOR)
}
