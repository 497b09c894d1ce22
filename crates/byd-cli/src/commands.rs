//! Command dispatch.
//!
//! `config` subcommands work on the configuration file alone. Every other
//! command loads the configuration, sets up logging and loads the
//! dictionary before running.

use byd_core::layout::render_page;
use byd_core::{ConfigManager, CsvStore, Dictionary, DictionaryStore, Word, parse_meanings};
use chrono::{Local, NaiveDate};
use std::io::{self, Write};
use tracing::{info, warn};

use crate::app::{App, AppSettings};
use crate::cli::{Cli, Command};
use crate::config::BydConfig;
use crate::config_handlers::handle_config_command;
use crate::console::TerminalConsole;
use crate::error::{Error, Result};
use crate::logging;

/// Runs the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let command = match cli.command {
        Some(Command::Config { action }) => {
            return handle_config_command(&mut io::stdout(), config_path, action);
        }
        Some(command) => command,
        None => Command::Run,
    };

    let config = BydConfig::load(config_path)?;
    if let Err(e) = logging::init(&config.logging, cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }

    let path = cli
        .dictionary
        .unwrap_or_else(|| config.dictionary.path.clone());
    let store = CsvStore::new(path);
    let today = Local::now().date_naive();
    let dictionary = store.load(config.quiz.mastery_threshold, today)?;
    info!(
        words = dictionary.len(),
        store = %store.location(),
        "Dictionary loaded"
    );

    let mut out = io::stdout();
    match command {
        Command::Run => {
            let settings = AppSettings::from(&config);
            let mut app = App::new(
                TerminalConsole::new(),
                &store,
                rand::thread_rng(),
                dictionary,
                settings,
            );
            match app.run() {
                Err(e) if !e.is_interrupt() => Err(e),
                _ => Ok(()),
            }
        }
        Command::Lookup { word } => cmd_lookup(&mut out, &dictionary, &word),
        Command::Add { word, meanings } => {
            let mut dictionary = dictionary;
            cmd_add(&mut out, &store, &mut dictionary, &word, &meanings, today)
        }
        Command::List { page } => {
            cmd_list(&mut out, &dictionary, page, config.browse.page_size)
        }
        Command::Stats => cmd_stats(&mut out, &dictionary),
        Command::Config { action } => handle_config_command(&mut out, config_path, action),
    }
}

/// Prints a word's meanings and memory level.
pub fn cmd_lookup<W: Write>(out: &mut W, dictionary: &Dictionary, word: &str) -> Result<()> {
    let word = Word::parse(word)?;
    let entry = dictionary
        .get(&word)
        .ok_or_else(|| byd_core::Error::word_not_found(word.as_str()))?;
    let threshold = dictionary.threshold();

    writeln!(out, "{} => {}", entry.word, entry.meanings)?;
    writeln!(out, "Memory level: {}/{threshold}", entry.memory.count)?;
    if entry.is_mastered(threshold) {
        writeln!(out, "✓ Mastered! (Excluded from quizzes)")?;
    }
    Ok(())
}

/// Adds (or replaces) a word and saves the dictionary.
pub fn cmd_add<W: Write, S: DictionaryStore>(
    out: &mut W,
    store: &S,
    dictionary: &mut Dictionary,
    word: &str,
    meanings: &[String],
    today: NaiveDate,
) -> Result<()> {
    let word = Word::parse(word)?;
    let meanings = parse_meanings(&meanings.join(" "))
        .ok_or_else(|| Error::input("No meanings given; nothing added."))?;

    let replaced = dictionary.contains(&word);
    if replaced {
        warn!(word = %word, "Replacing existing entry");
    }
    let entry = dictionary.insert(word, meanings, today);
    let verb = if replaced { "Updated" } else { "Added" };
    let message = format!("{verb}: {} => {}", entry.word, entry.meanings);

    store.save(dictionary)?;
    writeln!(out, "{message}")?;
    Ok(())
}

/// Prints one page (1-based) of the word table.
pub fn cmd_list<W: Write>(
    out: &mut W,
    dictionary: &Dictionary,
    page: usize,
    page_size: usize,
) -> Result<()> {
    if dictionary.is_empty() {
        writeln!(out, "No words in dictionary.")?;
        return Ok(());
    }

    let total_pages = dictionary.total_pages(page_size);
    if page == 0 || page > total_pages {
        return Err(Error::input(format!(
            "Page {page} out of range (1-{total_pages})"
        )));
    }

    let lines = render_page(
        &dictionary.page(page - 1, page_size),
        dictionary.stats(),
        dictionary.threshold(),
    );
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Prints word and mastery counts.
pub fn cmd_stats<W: Write>(out: &mut W, dictionary: &Dictionary) -> Result<()> {
    let stats = dictionary.stats();
    writeln!(out, "Words: {}", stats.total)?;
    writeln!(out, "Mastered: {}/{}", stats.mastered, stats.total)?;
    writeln!(out, "To review: {}", stats.total - stats.mastered)?;
    writeln!(out, "Mastery threshold: {}", dictionary.threshold())?;
    Ok(())
}
