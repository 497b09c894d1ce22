//! Terminal input and output.
//!
//! [`Console`] is everything the interactive modes need from a terminal.
//! [`TerminalConsole`] implements it with crossterm; tests drive the modes
//! with a scripted implementation instead.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character, lowercased
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Esc,
    /// Any other key
    Other,
}

impl Key {
    /// The key as a lowercase character, if it is one.
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Char(c) => Some(c),
            _ => None,
        }
    }
}

/// Screen and keyboard access.
pub trait Console {
    /// Clears the screen and homes the cursor.
    fn clear(&mut self) -> Result<()>;

    /// Writes text without a newline.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Reads one key press without echo. Ctrl-C yields [`Error::Interrupted`].
    fn read_key(&mut self) -> Result<Key>;

    /// Shows `prompt` and reads a line of input (without the newline).
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Writes text followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Writes several lines.
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// "Press any key to continue..." and waits for a key.
    fn pause(&mut self) -> Result<()> {
        self.write_line("")?;
        self.write("Press any key to continue...")?;
        self.read_key().map(|_| ())
    }
}

/// Restores cooked mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Maps a crossterm key event; `None` for events to ignore.
pub fn translate_key(event: KeyEvent) -> Option<Result<Key>> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Err(Error::Interrupted));
        }
        KeyCode::Char(c) => Key::Char(c.to_lowercase().next().unwrap_or(c)),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    };
    Some(Ok(key))
}

/// Console backed by the process's terminal.
pub struct TerminalConsole {
    out: io::Stdout,
}

impl TerminalConsole {
    /// Creates a console on stdout/stdin.
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = translate_key(key_event) {
                    return key;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.write(prompt)?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(Error::Interrupted);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
