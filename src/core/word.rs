//! Secret word representation
//!
//! A `SecretWord` stores the lowercase word along with letter position indices
//! so a guess can reveal every matching cell in one lookup.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// The word the player has to guess, with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for unusable secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("secret word is empty")]
    Empty,
}

impl SecretWord {
    /// Create a new secret word, normalized to lowercase
    ///
    /// Dictionary entries are not otherwise validated: anything non-empty is
    /// accepted as long as it has the requested length.
    ///
    /// # Errors
    /// Returns `WordError::Empty` for an empty (or all-whitespace) string.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    /// assert_eq!(word.positions_of('p'), &[1, 2]);
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("garden").unwrap();
        assert_eq!(word.text(), "garden");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("London").unwrap();
        assert_eq!(word.text(), "london");
    }

    #[test]
    fn word_creation_trims_line_endings() {
        let word = SecretWord::new("table\r").unwrap();
        assert_eq!(word.text(), "table");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        let word = SecretWord::new("café!").unwrap();
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("balloon").unwrap();
        assert_eq!(word.positions_of('l'), &[2, 3]);
        assert_eq!(word.positions_of('o'), &[4, 5]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert_eq!(word.positions_of('z'), &[]);
    }

    #[test]
    fn word_char_at() {
        let word = SecretWord::new("queen").unwrap();
        assert_eq!(word.char_at(0), Some('q'));
        assert_eq!(word.char_at(4), Some('n'));
        assert_eq!(word.char_at(5), None);
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("Eagle").unwrap();
        assert_eq!(format!("{word}"), "eagle");
    }
}
