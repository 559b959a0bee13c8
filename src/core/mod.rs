//! Core domain types for Hangman
//!
//! The secret word, guessable letters, the revealed pattern and the game
//! state engine that ties them together.

mod length;
mod letter;
mod pattern;
mod state;
mod word;

pub use length::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, WordLength};
pub use letter::Letter;
pub use pattern::{Cell, RevealedPattern};
pub use state::{GameState, GuessOutcome, MAX_ATTEMPTS, Phase, StateError};
pub use word::{SecretWord, WordError};
