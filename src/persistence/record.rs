//! Saved record codec
//!
//! A saved game is a YAML mapping with four keys:
//!
//! ```yaml
//! word: apple
//! running_result: [A, _, _, _, _]
//! letters_guessed: [a, x]
//! remaining_attempts: 5
//! ```

use crate::core::{Cell, GameState, Letter, RevealedPattern, SecretWord, StateError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// On-disk form of a `GameState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub word: String,
    pub running_result: Vec<String>,
    pub letters_guessed: Vec<String>,
    pub remaining_attempts: u8,
}

/// A record that parsed as YAML but does not describe a valid game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("word is empty")]
    EmptyWord,
    #[error("unrecognized pattern cell {0:?}")]
    BadCell(String),
    #[error("guessed entry {0:?} is not a single letter")]
    BadGuess(String),
    #[error(transparent)]
    State(#[from] StateError),
}

impl SavedRecord {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            word: state.word().text().to_string(),
            running_result: state
                .pattern()
                .cells()
                .iter()
                .map(ToString::to_string)
                .collect(),
            letters_guessed: state.guessed().iter().map(ToString::to_string).collect(),
            remaining_attempts: state.remaining_attempts(),
        }
    }

    /// Rebuild the game this record describes
    ///
    /// # Errors
    /// Returns `RecordError` for unparsable cells or guesses, or when the
    /// fields contradict each other.
    pub fn into_state(self) -> Result<GameState, RecordError> {
        let word = SecretWord::new(self.word).map_err(|_| RecordError::EmptyWord)?;

        let cells = self
            .running_result
            .into_iter()
            .map(|text| Cell::parse(&text).ok_or(RecordError::BadCell(text)))
            .collect::<Result<Vec<_>, _>>()?;

        let guessed = self
            .letters_guessed
            .into_iter()
            .map(|text| Letter::parse(text.trim()).ok_or(RecordError::BadGuess(text)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameState::restore(
            word,
            RevealedPattern::from_cells(cells),
            guessed,
            self.remaining_attempts,
        )?)
    }

    /// Serialize to YAML text
    ///
    /// # Errors
    /// Returns the serializer's error; not expected for this plain structure.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Parse YAML text; all four keys are required
    ///
    /// # Errors
    /// Returns the parser's error for malformed YAML or missing keys.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
