//! Quiz mode.

use byd_core::{Answer, DictionaryStore, Question, QuizSession};
use rand::Rng;
use tracing::{debug, error, info};

use super::App;
use crate::console::Console;
use crate::error::{Error, Result};

impl<C, S, R> App<C, S, R>
where
    C: Console,
    S: DictionaryStore,
    R: Rng,
{
    pub(super) fn quiz_mode(&mut self) -> Result<()> {
        let mut session = QuizSession::new(&self.dictionary, &mut self.rng);

        if session.is_empty() {
            self.show_header()?;
            self.console.write_line("All words have been mastered! 🎉")?;
            self.console.write_line("No words need review.")?;
            return self.console.pause();
        }

        let result = self.ask_all(&mut session);

        // Progress is kept even when the quiz is cut short.
        if let Err(e) = self.save() {
            if !matches!(result, Err(Error::Interrupted)) {
                return Err(e);
            }
            error!(error = %e, "Saving after interrupt failed");
            self.console.write_line("")?;
            self.console
                .write_line(&format!("Could not save progress: {e}"))?;
        }
        let summary = session.summary(&self.dictionary);
        info!(
            score = summary.score,
            answered = summary.answered,
            mastered = summary.stats.mastered,
            "Quiz finished"
        );
        result?;

        self.console.clear()?;
        self.console.write_line("=== Quiz Results ===")?;
        self.console.write_line(&format!(
            "Final score: {}/{}",
            summary.score, summary.answered
        ))?;
        self.console.write_line(&format!(
            "Mastered words: {}/{}",
            summary.stats.mastered, summary.stats.total
        ))?;
        self.console.pause()
    }

    fn ask_all(&mut self, session: &mut QuizSession) -> Result<()> {
        while let Some(question) = session.next_question(&self.dictionary, &mut self.rng)? {
            if !self.ask(session, &question)? {
                debug!(remaining = session.remaining(), "Quiz ended early");
                break;
            }
        }
        Ok(())
    }

    /// Asks until a valid key arrives. Returns `false` when the user quits.
    fn ask(&mut self, session: &mut QuizSession, question: &Question) -> Result<bool> {
        loop {
            self.show_question(session, question)?;
            let key = self.console.read_key()?;
            let choice = match key.as_char().map_or(Answer::Invalid, Answer::from_key) {
                Answer::Quit => return Ok(false),
                Answer::Choice(choice) => choice,
                Answer::Invalid => {
                    self.show_header()?;
                    self.console.write_line("Invalid input!")?;
                    self.console.read_key()?;
                    continue;
                }
            };

            let today = self.today();
            let outcome = session.answer(&mut self.dictionary, question, choice, today)?;
            let word = question.word();
            self.show_header()?;

            if !outcome.correct {
                self.console.write_line("✗ Wrong!")?;
                self.console.write_line("")?;
                self.console
                    .write_line(&format!("{word} => {}", question.correct_meaning()))?;
                self.console.write_line("")?;
                self.console.write("Press any key for next question...")?;
                self.console.read_key()?;
            } else if outcome.newly_mastered {
                info!(word = %word, "Word mastered");
                self.console
                    .write_line(&format!("🎉 Congratulations! '{word}' has been mastered!"))?;
                self.console.pause()?;
            }
            return Ok(true);
        }
    }

    fn show_question(&mut self, session: &QuizSession, question: &Question) -> Result<()> {
        let threshold = self.dictionary.threshold();
        let count = self
            .dictionary
            .get(question.word())
            .map(|e| e.memory.count)
            .ok_or_else(|| byd_core::Error::word_not_found(question.word().as_str()))?;
        let stats = self.dictionary.stats();

        self.show_header()?;
        self.console.write_line(&format!(
            "Score: {}/{}",
            session.score(),
            session.answered()
        ))?;
        self.console.write_line(&format!(
            "Memory: {count}/{threshold} | Mastered: {}/{}",
            stats.mastered, stats.total
        ))?;
        self.console.write_line("")?;
        self.console.write_line(question.word().as_str())?;
        self.console.write_line(&"-".repeat(40))?;
        for (i, option) in question.options().iter().enumerate() {
            self.console.write_line(&format!("{}. {option}", i + 1))?;
        }
        self.console.write_line("")?;
        self.console.write_line("Choose an option (1-4) or 'q' to quit")
    }

    fn show_header(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.write_line("=== Vocabulary Quiz ===")
    }
}
