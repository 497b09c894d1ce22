//! Common test utilities and harness for the interactive application.

use byd_cli::app::{App, AppSettings};
use byd_cli::console::{Console, Key};
use byd_cli::{Error, Result};
use byd_core::{Dictionary, DictionaryStore, MemoryRecord, Word, WordEntry};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// One scripted user action.
#[derive(Debug, Clone)]
pub enum Input {
    /// A single key press
    Key(Key),
    /// A line typed at a prompt
    Line(String),
    /// Press the number of the option whose text equals this meaning
    Pick(String),
    /// Press the number of the first option whose text differs from this meaning
    Avoid(String),
}

/// Console that replays scripted input and records every screen.
///
/// Running out of input behaves like Ctrl-C.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<Input>,
    screens: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console with an empty script.
    pub fn new() -> Self {
        Self {
            inputs: VecDeque::new(),
            screens: vec![String::new()],
        }
    }

    /// Queues a character key.
    pub fn key(mut self, c: char) -> Self {
        self.inputs.push_back(Input::Key(Key::Char(c)));
        self
    }

    /// Queues an "any key" press.
    pub fn any_key(mut self) -> Self {
        self.inputs.push_back(Input::Key(Key::Enter));
        self
    }

    /// Queues a special key.
    pub fn special(mut self, key: Key) -> Self {
        self.inputs.push_back(Input::Key(key));
        self
    }

    /// Queues a typed line.
    pub fn line(mut self, text: &str) -> Self {
        self.inputs.push_back(Input::Line(text.to_string()));
        self
    }

    /// Queues the quiz option showing `meaning`.
    pub fn pick(mut self, meaning: &str) -> Self {
        self.inputs.push_back(Input::Pick(meaning.to_string()));
        self
    }

    /// Queues a quiz option other than `meaning`.
    pub fn avoid(mut self, meaning: &str) -> Self {
        self.inputs.push_back(Input::Avoid(meaning.to_string()));
        self
    }

    /// Every screen written so far, split at each `clear`.
    pub fn screens(&self) -> &[String] {
        &self.screens
    }

    /// All output joined together.
    pub fn output(&self) -> String {
        self.screens.concat()
    }

    /// Number of scripted inputs not consumed.
    pub fn pending(&self) -> usize {
        self.inputs.len()
    }

    fn current_screen(&self) -> &str {
        self.screens.last().map_or("", String::as_str)
    }

    /// Numbered quiz options on the current screen.
    fn options(&self) -> Vec<(char, String)> {
        self.current_screen()
            .lines()
            .filter_map(|line| {
                let (number, text) = line.split_once(". ")?;
                let c = number.chars().next()?;
                (number.len() == 1 && ('1'..='4').contains(&c)).then(|| (c, text.to_string()))
            })
            .collect()
    }

    fn option_key(&self, matches: impl Fn(&str) -> bool) -> Key {
        let options = self.options();
        let found = options.iter().find(|(_, text)| matches(text));
        match found {
            Some((c, _)) => Key::Char(*c),
            None => panic!("no matching option on screen:\n{}", self.current_screen()),
        }
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> Result<()> {
        self.screens.push(String::new());
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        if let Some(screen) = self.screens.last_mut() {
            screen.push_str(text);
        }
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        match self.inputs.pop_front() {
            None => Err(Error::Interrupted),
            Some(Input::Key(key)) => Ok(key),
            Some(Input::Pick(meaning)) => Ok(self.option_key(|text| text == meaning)),
            Some(Input::Avoid(meaning)) => Ok(self.option_key(|text| text != meaning)),
            Some(Input::Line(line)) => panic!("expected a key press, script has line {line:?}"),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.write(prompt)?;
        match self.inputs.pop_front() {
            None => Err(Error::Interrupted),
            Some(Input::Line(line)) => {
                self.write(&line)?;
                self.write("\n")?;
                Ok(line)
            }
            Some(other) => panic!("expected a line at {prompt:?}, script has {other:?}"),
        }
    }
}

/// Store whose saves always fail.
#[derive(Debug, Default)]
pub struct FailingStore;

impl DictionaryStore for FailingStore {
    fn load(&self, threshold: u32, _today: NaiveDate) -> byd_core::Result<Dictionary> {
        Ok(Dictionary::with_threshold(threshold))
    }

    fn save(&self, _dictionary: &Dictionary) -> byd_core::Result<()> {
        Err(byd_core::Error::io_with_path(
            std::io::Error::other("disk full"),
            "/data/dictionary.csv",
        ))
    }

    fn location(&self) -> String {
        "/data/dictionary.csv".to_string()
    }
}

/// Fixed review date used by every test.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
}

/// Builds a dictionary from `(word, meanings, count)` triples.
pub fn dictionary(threshold: u32, words: &[(&str, &str, u32)]) -> Dictionary {
    let mut dictionary = Dictionary::with_threshold(threshold);
    let earlier = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for (word, meanings, count) in words {
        dictionary.insert_entry(WordEntry {
            word: Word::parse(word).unwrap(),
            meanings: (*meanings).to_string(),
            memory: MemoryRecord::with_count(*count, earlier),
        });
    }
    dictionary
}

/// Twelve words, enough for two browse pages.
pub fn alphabet() -> Dictionary {
    let words = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
        "juliet", "kilo", "lima",
    ];
    let triples: Vec<(&str, &str, u32)> = words.iter().map(|w| (*w, "letter", 0)).collect();
    dictionary(27, &triples)
}

/// An application over a scripted console with a seeded rng and fixed date.
pub fn app<S: DictionaryStore>(
    console: ScriptedConsole,
    store: S,
    dictionary: Dictionary,
) -> App<ScriptedConsole, S, StdRng> {
    App::new(
        console,
        store,
        StdRng::seed_from_u64(7),
        dictionary,
        AppSettings::default(),
    )
    .with_today(today())
}
