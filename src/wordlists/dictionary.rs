//! Random word selection from a dictionary

use super::{WORDS, loader};
use crate::core::{SecretWord, WordLength};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// No dictionary entry has the requested length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no word with {length} letters in the dictionary")]
pub struct NoCandidateError {
    pub length: WordLength,
}

/// A supplier of secret words
pub trait WordSource {
    /// Pick a word of exactly `length` letters
    ///
    /// # Errors
    /// Returns `NoCandidateError` when no word of that length is available.
    fn pick_word(&self, length: WordLength) -> Result<SecretWord, NoCandidateError>;
}

/// A static word list
///
/// Selection is uniform over all entries of the requested length.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<SecretWord>,
}

impl Dictionary {
    /// Build a dictionary from raw entries, dropping empty ones
    pub fn new<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| SecretWord::new(entry).ok())
            .collect();
        Self { words }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(WORDS.iter().copied())
    }

    /// Load a dictionary file, one word per line
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(loader::load_from_file(path)?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All entries with exactly `length` letters
    pub fn candidates(&self, length: WordLength) -> impl Iterator<Item = &SecretWord> {
        self.words.iter().filter(move |w| w.len() == length.get())
    }

    /// Pick a word of `length` letters using the given random source
    ///
    /// # Errors
    /// Returns `NoCandidateError` when no entry has that length.
    pub fn pick_word_with<R: Rng + ?Sized>(
        &self,
        length: WordLength,
        rng: &mut R,
    ) -> Result<SecretWord, NoCandidateError> {
        let candidates: Vec<&SecretWord> = self.candidates(length).collect();
        debug!(length = length.get(), candidates = candidates.len(), "picking word");

        candidates
            .choose(rng)
            .map(|&word| word.clone())
            .ok_or(NoCandidateError { length })
    }
}

impl WordSource for Dictionary {
    fn pick_word(&self, length: WordLength) -> Result<SecretWord, NoCandidateError> {
        self.pick_word_with(length, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn length(n: usize) -> WordLength {
        WordLength::new(n).unwrap()
    }

    #[test]
    fn pick_word_matches_length_and_lowercases() {
        let dictionary = Dictionary::new(["Paris", "banana", "cat"]);
        let word = dictionary.pick_word(length(5)).unwrap();
        assert_eq!(word.text(), "paris");
    }

    #[test]
    fn pick_word_without_candidates_fails() {
        let dictionary = Dictionary::new(["apple", "cat"]);
        assert_eq!(
            dictionary.pick_word(length(12)),
            Err(NoCandidateError { length: length(12) })
        );
    }

    #[test]
    fn empty_entries_are_dropped() {
        let dictionary = Dictionary::new(["", "  ", "lemon"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn pick_word_reaches_every_candidate() {
        let dictionary = Dictionary::new(["apple", "bread", "chair", "garden"]);
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<String> = (0..200)
            .map(|_| {
                dictionary
                    .pick_word_with(length(5), &mut rng)
                    .unwrap()
                    .text()
                    .to_string()
            })
            .collect();
        assert_eq!(seen.len(), 3);
        assert!(!seen.contains("garden"));
    }

    #[test]
    fn embedded_dictionary_covers_every_length() {
        let dictionary = Dictionary::embedded();
        for n in WordLength::RANGE {
            let word = dictionary.pick_word(length(n)).unwrap();
            assert_eq!(word.len(), n);
        }
    }
}
