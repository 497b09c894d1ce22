//! Error types for byd-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while managing a dictionary.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV reader/writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row of the dictionary file could not be interpreted.
    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord {
        /// 1-based line number in the dictionary file
        line: u64,
        /// What went wrong
        message: String,
    },

    /// A word that cannot be stored (empty, or contains digits).
    #[error("{word} is an invalid word")]
    InvalidWord {
        /// The rejected word
        word: String,
    },

    /// Word not present in the dictionary.
    #[error("Word not found: {word}")]
    WordNotFound {
        /// Word that was not found
        word: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for byd-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error annotated with the path being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid record error for the given line.
    pub fn invalid_record<S: Into<String>>(line: u64, message: S) -> Self {
        Error::InvalidRecord {
            line,
            message: message.into(),
        }
    }

    /// Creates an invalid word error.
    pub fn invalid_word<S: Into<String>>(word: S) -> Self {
        Error::InvalidWord { word: word.into() }
    }

    /// Creates a word-not-found error.
    pub fn word_not_found<S: Into<String>>(word: S) -> Self {
        Error::WordNotFound { word: word.into() }
    }

    /// Returns whether the error came from user input rather than the
    /// filesystem or the dictionary file.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::InvalidWord { .. } | Error::WordNotFound { .. })
    }
}
