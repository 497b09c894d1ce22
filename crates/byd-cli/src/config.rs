//! Configuration file.
//!
//! ```toml
//! [dictionary]
//! path = "/home/me/.local/share/byd/dictionary.csv"
//!
//! [quiz]
//! mastery_threshold = 27
//!
//! [browse]
//! page_size = 10
//!
//! [logging]
//! level = "info"
//! file = "/home/me/.local/share/byd/byd.log"
//! ```
//!
//! Every section and key is optional; missing values take the defaults
//! below.

use byd_core::{ConfigManager, DEFAULT_PAGE_SIZE, Error, MASTERY_THRESHOLD, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const PROJECT_NAME: &str = "byd";

/// Top-level BYD configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BydConfig {
    /// Where the word list is stored
    pub dictionary: DictionaryConfig,
    /// Quiz behaviour
    pub quiz: QuizConfig,
    /// Browse table
    pub browse: BrowseConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// `[dictionary]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// CSV file holding the word list
    pub path: PathBuf,
}

/// `[quiz]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Correct answers in a row needed to master a word
    pub mastery_threshold: u32,
}

/// `[browse]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Rows per page
    pub page_size: usize,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `byd_core=debug`
    pub level: String,
    /// Log file; defaults to `byd.log` in the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// `<platform data dir>/byd`, or the working directory when unknown.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(PROJECT_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: data_dir().join("dictionary.csv"),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            mastery_threshold: MASTERY_THRESHOLD,
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// The configured log file, or the default location.
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| data_dir().join("byd.log"))
    }
}

impl ConfigManager for BydConfig {
    fn project_name() -> &'static str {
        PROJECT_NAME
    }

    fn validate(&self) -> Result<()> {
        if self.quiz.mastery_threshold == 0 {
            return Err(Error::config("quiz.mastery_threshold must be at least 1"));
        }
        if self.browse.page_size == 0 {
            return Err(Error::config("browse.page_size must be at least 1"));
        }
        if self.dictionary.path.as_os_str().is_empty() {
            return Err(Error::config("dictionary.path must not be empty"));
        }
        Ok(())
    }
}
