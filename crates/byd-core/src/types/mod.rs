//! Core types for BYD dictionaries.

mod entry;
mod memory;
mod proptests;
mod word;

pub use entry::WordEntry;
pub use memory::{MASTERY_THRESHOLD, MemoryRecord};
pub use word::{MEANING_SEPARATOR, Word, format_meanings, parse_meanings};
