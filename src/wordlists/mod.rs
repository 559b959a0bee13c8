//! Word lists for Hangman
//!
//! Provides the embedded dictionary compiled into the binary, file loading,
//! and random selection of secret words.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, NoCandidateError, WordSource};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordLength;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_trimmed_and_non_empty() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert_eq!(word.trim(), word, "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn every_playable_length_has_words() {
        for length in WordLength::RANGE {
            let count = WORDS
                .iter()
                .filter(|w| w.chars().count() == length)
                .count();
            assert!(count >= 10, "only {count} words with {length} letters");
        }
    }
}
