//! Interactive application.
//!
//! The only state machine is main menu -> mode -> main menu. Each mode is a
//! method on [`App`] in its own submodule:
//!
//! - `search`: look up a word, adding it when unknown
//! - `quiz`: multiple-choice review of unmastered words
//! - `browse`: paginated word table with prefix search
//!
//! Errors raised inside a mode are logged and shown, and the menu resumes.
//! Ctrl-C anywhere ends the program.

mod browse;
mod quiz;
mod search;

use byd_core::{Dictionary, DictionaryStore};
use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::{error, info};

use crate::config::BydConfig;
use crate::console::{Console, Key};
use crate::error::{Error, Result};

/// Settings the interactive modes read from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    /// Rows per browse page
    pub page_size: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            page_size: byd_core::DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&BydConfig> for AppSettings {
    fn from(config: &BydConfig) -> Self {
        Self {
            page_size: config.browse.page_size,
        }
    }
}

/// The interactive vocabulary trainer.
pub struct App<C, S, R> {
    console: C,
    store: S,
    rng: R,
    dictionary: Dictionary,
    settings: AppSettings,
    today: Option<NaiveDate>,
}

impl<C, S, R> App<C, S, R>
where
    C: Console,
    S: DictionaryStore,
    R: Rng,
{
    /// Creates the application around an already loaded dictionary.
    pub fn new(
        console: C,
        store: S,
        rng: R,
        dictionary: Dictionary,
        settings: AppSettings,
    ) -> Self {
        Self {
            console,
            store,
            rng,
            dictionary,
            settings,
            today: None,
        }
    }

    /// Pins the date used for review stamps.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The current dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The console.
    pub fn console(&self) -> &C {
        &self.console
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn save(&self) -> Result<()> {
        self.store.save(&self.dictionary)?;
        Ok(())
    }

    /// Runs the main menu until the user quits.
    pub fn run(&mut self) -> Result<()> {
        info!(
            words = self.dictionary.len(),
            store = %self.store.location(),
            "Starting interactive session"
        );

        loop {
            let outcome = self.show_menu().and_then(|()| self.console.read_key());
            let key = match outcome {
                Ok(key) => key,
                Err(Error::Interrupted) => break,
                Err(e) => return Err(e),
            };

            let result = match key.as_char() {
                Some('q') => break,
                Some('1') => self.search_mode(),
                Some('2') => self.quiz_mode(),
                Some('3') => self.browse_mode(),
                _ => self.invalid_choice(),
            };

            match result {
                Ok(()) => {}
                Err(Error::Interrupted) => break,
                Err(e) => {
                    error!(error = %e, "Mode failed");
                    if let Err(report_err) = self.report_error(&e) {
                        if report_err.is_interrupt() {
                            break;
                        }
                        return Err(report_err);
                    }
                }
            }
        }

        self.console.clear()?;
        info!("Interactive session ended");
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.write_line("====== Welcome to BYD! ======")?;
        self.console.write_line("=== Build Your Dictionary ===")?;
        self.console.write_line(&"=".repeat(29))?;
        self.console.write_line("1. Search/Add word")?;
        self.console.write_line("2. Vocabulary quiz")?;
        self.console.write_line("3. Show all words")?;
        self.console.write_line("Q. Exit")?;
        self.console.write_line(&"=".repeat(29))
    }

    fn invalid_choice(&mut self) -> Result<()> {
        self.console.write_line("")?;
        self.console.write_line("Invalid choice. Please enter 1, 2, 3 or Q.")?;
        self.console.pause()
    }

    fn report_error(&mut self, err: &Error) -> Result<()> {
        self.console.clear()?;
        self.console.write_line(&format!("An error occurred: {err}"))?;
        self.console.pause()
    }
}

/// Reads keys until one of `accepted` (or Esc, reported as `'q'`) arrives.
pub(crate) fn read_choice<C: Console>(console: &mut C, accepted: &[char]) -> Result<char> {
    loop {
        match console.read_key()? {
            Key::Esc => return Ok('q'),
            Key::Char(c) if accepted.contains(&c) => return Ok(c),
            _ => {}
        }
    }
}
