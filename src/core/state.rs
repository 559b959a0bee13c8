//! Game state engine
//!
//! Holds the secret word, the revealed pattern, the guessed letters and the
//! remaining attempts, and evaluates guesses against them.

use super::{Cell, Letter, RevealedPattern, SecretWord, WordLength};
use crate::wordlists::{NoCandidateError, WordSource};
use thiserror::Error;
use tracing::debug;

/// Wrong guesses allowed before the game is lost
pub const MAX_ATTEMPTS: u8 = 6;

/// Result of evaluating a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word; `revealed` cells were uncovered
    Hit { revealed: usize },
    /// The letter is not in the word; one attempt was consumed
    Miss,
    /// The letter was already guessed; nothing changed
    Repeated,
    /// The game was already won or lost; nothing changed
    GameOver,
}

/// Phase of a game. Won and lost are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

/// Reasons a set of restored fields cannot form a valid game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("pattern has {found} cells but the word has {expected} letters")]
    PatternLength { expected: usize, found: usize },
    #[error("revealed cell {position} does not match the word")]
    CellMismatch { position: usize },
    #[error("letter {0} was guessed more than once")]
    DuplicateGuess(Letter),
    #[error("remaining attempts {0} exceeds the maximum of {max}", max = MAX_ATTEMPTS)]
    TooManyAttempts(u8),
}

/// State of one game of Hangman
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    word: SecretWord,
    pattern: RevealedPattern,
    guessed: Vec<Letter>,
    remaining_attempts: u8,
}

impl GameState {
    /// Start a game with a word of `length` letters drawn from `source`
    ///
    /// # Errors
    /// Returns `NoCandidateError` if the source has no word of that length.
    pub fn new_game<S: WordSource + ?Sized>(
        source: &S,
        length: WordLength,
    ) -> Result<Self, NoCandidateError> {
        let word = source.pick_word(length)?;
        debug!(length = length.get(), "new game started");
        Ok(Self::with_word(word))
    }

    /// Start a game with a known secret word
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GuessOutcome, Letter, SecretWord};
    ///
    /// let mut game = GameState::with_word(SecretWord::new("apple").unwrap());
    /// let outcome = game.guess(Letter::new('p').unwrap());
    /// assert_eq!(outcome, GuessOutcome::Hit { revealed: 2 });
    /// assert_eq!(game.remaining_attempts(), 6);
    /// ```
    #[must_use]
    pub fn with_word(word: SecretWord) -> Self {
        let pattern = RevealedPattern::blank(word.len());
        Self {
            word,
            pattern,
            guessed: Vec::new(),
            remaining_attempts: MAX_ATTEMPTS,
        }
    }

    /// Rebuild a game from previously saved fields
    ///
    /// # Errors
    /// Returns `StateError` when the fields contradict each other: a pattern
    /// of the wrong length, a revealed cell that disagrees with the word,
    /// duplicated guesses, or more attempts than a game ever starts with.
    pub fn restore(
        word: SecretWord,
        pattern: RevealedPattern,
        guessed: Vec<Letter>,
        remaining_attempts: u8,
    ) -> Result<Self, StateError> {
        if pattern.len() != word.len() {
            return Err(StateError::PatternLength {
                expected: word.len(),
                found: pattern.len(),
            });
        }

        for (position, cell) in pattern.cells().iter().enumerate() {
            if let Cell::Revealed(shown) = *cell {
                let actual = word.char_at(position).map(|ch| ch.to_ascii_uppercase());
                if actual != Some(shown) {
                    return Err(StateError::CellMismatch { position });
                }
            }
        }

        for (i, letter) in guessed.iter().enumerate() {
            if guessed[..i].contains(letter) {
                return Err(StateError::DuplicateGuess(*letter));
            }
        }

        if remaining_attempts > MAX_ATTEMPTS {
            return Err(StateError::TooManyAttempts(remaining_attempts));
        }

        Ok(Self {
            word,
            pattern,
            guessed,
            remaining_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &RevealedPattern {
        &self.pattern
    }

    /// Letters guessed so far, in the order they were tried
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Evaluate a guess
    ///
    /// A hit reveals the letter at every matching position; a miss consumes
    /// one attempt. A repeated letter, or any guess after the game has ended,
    /// is reported and otherwise ignored.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::GameOver;
        }
        if self.has_guessed(letter) {
            return GuessOutcome::Repeated;
        }
        self.guessed.push(letter);

        let positions = self.word.positions_of(letter.as_char());
        let outcome = if positions.is_empty() {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            GuessOutcome::Miss
        } else {
            GuessOutcome::Hit {
                revealed: self.pattern.reveal(letter, positions),
            }
        };

        debug!(%letter, ?outcome, remaining = self.remaining_attempts, "guess evaluated");
        outcome
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.pattern.is_complete()
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.remaining_attempts == 0
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Current phase; a fully revealed word wins even on the last attempt
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_won() {
            Phase::Won
        } else if self.is_lost() {
            Phase::Lost
        } else {
            Phase::InProgress
        }
    }
}
