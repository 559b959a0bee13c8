//! Word length selection

use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;

/// Shortest word length a game can be started with
pub const MIN_WORD_LENGTH: usize = 5;

/// Longest word length a game can be started with
pub const MAX_WORD_LENGTH: usize = 12;

/// A requested secret word length, always within `5..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordLength(usize);

impl WordLength {
    /// All lengths a new game accepts
    pub const RANGE: RangeInclusive<usize> = MIN_WORD_LENGTH..=MAX_WORD_LENGTH;

    /// Create a length, or `None` when outside the playable range
    #[must_use]
    pub fn new(length: usize) -> Option<Self> {
        Self::RANGE.contains(&length).then_some(Self(length))
    }

    /// Pick a length uniformly at random from the playable range
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::RANGE))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn length_bounds() {
        assert_eq!(WordLength::new(4), None);
        assert_eq!(WordLength::new(5).map(WordLength::get), Some(5));
        assert_eq!(WordLength::new(12).map(WordLength::get), Some(12));
        assert_eq!(WordLength::new(13), None);
    }

    #[test]
    fn random_length_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let length = WordLength::random(&mut rng);
            assert!(WordLength::RANGE.contains(&length.get()));
        }
    }
}
