//! Answer list and guess lookup set

use super::loader::words_from_slice;
use super::{ANSWERS, GUESSES};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// Errors building a word bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBankError {
    NoAnswers,
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Answer list contains no valid words"),
        }
    }
}

impl std::error::Error for WordBankError {}

/// The words a game draws from
///
/// Answers are indexed by day. Every answer is also a valid guess.
#[derive(Debug, Clone)]
pub struct WordBank {
    answers: Vec<Word>,
    guesses: FxHashSet<Word>,
}

impl WordBank {
    /// Build a bank from the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::NoAnswers` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::from_lists(words_from_slice(ANSWERS), words_from_slice(GUESSES))
    }

    /// Build a bank from caller-supplied lists
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::NoAnswers` if `answers` is empty.
    pub fn from_lists(
        answers: Vec<Word>,
        guesses: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordBankError> {
        if answers.is_empty() {
            return Err(WordBankError::NoAnswers);
        }

        let mut set: FxHashSet<Word> = guesses.into_iter().collect();
        set.extend(answers.iter().cloned());

        debug!(
            answers = answers.len(),
            guesses = set.len(),
            "word bank ready"
        );

        Ok(Self {
            answers,
            guesses: set,
        })
    }

    /// Check whether a word may be guessed
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    /// Answer for a day number
    ///
    /// Days past the end of the list wrap around to the start.
    #[must_use]
    pub fn answer_for_day(&self, day: usize) -> &Word {
        &self.answers[day % self.answers.len()]
    }

    /// Number of answers (the range for random days)
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of distinct guessable words
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}
