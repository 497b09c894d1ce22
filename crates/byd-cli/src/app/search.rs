//! Search/Add mode.

use byd_core::{DictionaryStore, Word, parse_meanings};
use rand::Rng;
use tracing::info;

use super::App;
use crate::console::Console;
use crate::error::Result;

impl<C, S, R> App<C, S, R>
where
    C: Console,
    S: DictionaryStore,
    R: Rng,
{
    pub(super) fn search_mode(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.write_line("=== Search/Add Word ===")?;
        let input = self.console.read_line("Enter word('q' to quit): ")?;
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        self.lookup_word(input)
    }

    fn lookup_word(&mut self, input: &str) -> Result<()> {
        self.console.clear()?;
        self.console.write_line("=== Search Word ===")?;

        match Word::parse(input) {
            Err(e) if e.is_user_error() => {
                self.console.write_line("")?;
                self.console.write_line(&e.to_string())?;
            }
            Err(e) => return Err(e.into()),
            Ok(word) => match self.dictionary.get(&word) {
                Some(entry) => {
                    let threshold = self.dictionary.threshold();
                    let lines = [
                        String::new(),
                        format!("{input} => {}", entry.meanings),
                        format!("Memory level: {}/{threshold}", entry.memory.count),
                    ];
                    let mastered = entry.is_mastered(threshold);
                    self.console.write_lines(&lines)?;
                    if mastered {
                        self.console.write_line("✓ Mastered! (Excluded from quizzes)")?;
                    }
                }
                None => self.add_word(input, word)?,
            },
        }

        self.console.pause()
    }

    fn add_word(&mut self, input: &str, word: Word) -> Result<()> {
        self.console.clear()?;
        self.console.write_line(&format!("=== Add New Word: {input} ==="))?;
        let raw = self
            .console
            .read_line("Enter meanings (use spaces to separate): ")?;

        match parse_meanings(&raw) {
            Some(meanings) => {
                let today = self.today();
                let entry = self.dictionary.insert(word, meanings, today);
                let message = format!("Added: {input} => {}", entry.meanings);
                info!(word = %entry.word, "Word added");
                self.save()?;
                self.console.write_line("")?;
                self.console.write_line(&message)?;
            }
            None => {
                self.console.write_line("")?;
                self.console.write_line("Nothing added.")?;
            }
        }
        Ok(())
    }
}
