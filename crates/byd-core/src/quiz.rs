//! Multiple-choice quiz generation and scoring.
//!
//! A [`QuizSession`] asks every word that is not yet mastered exactly once,
//! in random order. Each [`Question`] offers four meanings: the right one and
//! three drawn uniformly at random from the other quiz words. When fewer than
//! three other words remain, fixed placeholder meanings fill the gaps.
//!
//! # Example
//!
//! ```
//! use byd_core::{Dictionary, QuizSession, Word};
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut dict = Dictionary::new();
//! dict.insert(Word::normalized("sun"), "太阳", today);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut session = QuizSession::new(&dict, &mut rng);
//! let question = session.next_question(&dict, &mut rng).unwrap().unwrap();
//! assert_eq!(question.options().len(), 4);
//!
//! let outcome = session
//!     .answer(&mut dict, &question, question.correct_choice(), today)
//!     .unwrap();
//! assert!(outcome.correct);
//! assert_eq!(session.score(), 1);
//! ```

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::dictionary::{Dictionary, DictionaryStats};
use crate::error::{Error, Result};
use crate::types::{MemoryRecord, Word};

/// Number of options offered per question.
pub const OPTION_COUNT: usize = 4;

/// Distractors used when there are not enough other quiz words.
pub const PLACEHOLDER_MEANINGS: [&str; OPTION_COUNT - 1] =
    ["Unknown meaning", "Incorrect translation", "Wrong answer"];

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    word: Word,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Builds a question for `word`, drawing distractors from `pool`.
    ///
    /// `pool` is the full list of quiz words; `word` itself is ignored if
    /// present.
    pub fn generate<R: Rng + ?Sized>(
        word: &Word,
        pool: &[Word],
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Self> {
        let correct = dictionary
            .get(word)
            .ok_or_else(|| Error::word_not_found(word.as_str()))?
            .meanings
            .clone();

        let others: Vec<&Word> = pool.iter().filter(|w| *w != word).collect();
        let distractors: Vec<String> = if others.len() >= OPTION_COUNT - 1 {
            others
                .choose_multiple(rng, OPTION_COUNT - 1)
                .filter_map(|w| dictionary.get(w))
                .map(|e| e.meanings.clone())
                .collect()
        } else {
            PLACEHOLDER_MEANINGS.iter().map(|s| (*s).to_string()).collect()
        };

        let mut options: Vec<(bool, String)> = std::iter::once((true, correct))
            .chain(distractors.into_iter().map(|m| (false, m)))
            .collect();
        options.shuffle(rng);

        let correct_index = options.iter().position(|(is_correct, _)| *is_correct).unwrap_or(0);
        Ok(Self {
            word: word.clone(),
            options: options.into_iter().map(|(_, m)| m).collect(),
            correct_index,
        })
    }

    /// The word being asked.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 1-based number of the right option.
    pub fn correct_choice(&self) -> usize {
        self.correct_index + 1
    }

    /// The right meaning.
    pub fn correct_meaning(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Checks a 1-based choice.
    ///
    /// Any option whose text equals the right meaning counts, so words that
    /// share a meaning never penalize the user.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .is_some_and(|m| m == self.correct_meaning())
    }
}

/// A key pressed while a question is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// 1-based option number
    Choice(usize),
    /// End the quiz early
    Quit,
    /// Anything else
    Invalid,
}

impl Answer {
    /// Interprets a key press.
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'q' => Answer::Quit,
            c => match c.to_digit(10) {
                Some(d) if (1..=OPTION_COUNT as u32).contains(&d) => Answer::Choice(d as usize),
                _ => Answer::Invalid,
            },
        }
    }
}

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the answer was right
    pub correct: bool,
    /// Memory state after the update
    pub memory: MemoryRecord,
    /// The answer brought the word to the mastery threshold
    pub newly_mastered: bool,
}

/// End-of-quiz numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    /// Correct answers
    pub score: usize,
    /// Answers scored
    pub answered: usize,
    /// Dictionary counts after the quiz
    pub stats: DictionaryStats,
}

/// One pass over the words that still need review.
#[derive(Debug, Clone)]
pub struct QuizSession {
    words: Vec<Word>,
    position: usize,
    score: usize,
    answered: usize,
}

impl QuizSession {
    /// Collects the unmastered words and shuffles them.
    pub fn new<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Self {
        let mut words = dictionary.quiz_words();
        words.shuffle(rng);
        debug!(words = words.len(), "Starting quiz session");
        Self {
            words,
            position: 0,
            score: 0,
            answered: 0,
        }
    }

    /// Returns `true` when there is nothing to review.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words in this session.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Words not yet asked.
    pub fn remaining(&self) -> usize {
        self.words.len() - self.position
    }

    /// Builds the next question, or `None` when every word has been asked.
    pub fn next_question<R: Rng + ?Sized>(
        &mut self,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Option<Question>> {
        let Some(word) = self.words.get(self.position) else {
            return Ok(None);
        };
        let question = Question::generate(word, &self.words, dictionary, rng)?;
        self.position += 1;
        Ok(Some(question))
    }

    /// Scores a 1-based choice and updates the word's memory counter.
    pub fn answer(
        &mut self,
        dictionary: &mut Dictionary,
        question: &Question,
        choice: usize,
        today: NaiveDate,
    ) -> Result<AnswerOutcome> {
        let correct = question.is_correct(choice);
        let was_mastered = dictionary
            .get(question.word())
            .is_some_and(|e| e.is_mastered(dictionary.threshold()));
        let memory = dictionary.record_answer(question.word(), correct, today)?;

        self.answered += 1;
        if correct {
            self.score += 1;
        }

        Ok(AnswerOutcome {
            correct,
            memory,
            newly_mastered: !was_mastered && memory.is_mastered(dictionary.threshold()),
        })
    }

    /// Correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Answers scored so far.
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// Final numbers for the result screen.
    pub fn summary(&self, dictionary: &Dictionary) -> QuizSummary {
        QuizSummary {
            score: self.score,
            answered: self.answered,
            stats: dictionary.stats(),
        }
    }
}
