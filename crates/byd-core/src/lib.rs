#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! BYD Core: Build Your Dictionary.
//!
//! Word list, memory counters, quiz generation and storage for the BYD
//! vocabulary trainer. The terminal front end lives in `byd-cli`.
//!
//! # Modules
//!
//! - [`types`]: words, meanings and memory records
//! - [`dictionary`]: the in-memory word table and paging
//! - [`quiz`]: multiple-choice questions and scoring
//! - [`store`]: CSV persistence
//! - [`layout`]: display-width aware text and box drawing
//! - [`traits`]: configuration trait
//! - [`error`]: error types and Result alias

pub mod dictionary;
pub mod error;
pub mod layout;
pub mod quiz;
pub mod store;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use dictionary::{DEFAULT_PAGE_SIZE, Dictionary, DictionaryStats, Page};
pub use error::{Error, Result};
pub use quiz::{Answer, AnswerOutcome, OPTION_COUNT, Question, QuizSession, QuizSummary};
pub use store::{CsvStore, DictionaryStore, MemoryStore};
pub use traits::ConfigManager;
pub use types::{
    MASTERY_THRESHOLD, MemoryRecord, Word, WordEntry, format_meanings, parse_meanings,
};
