//! A single guessable letter

use std::fmt;

/// An ASCII letter, stored lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Create a letter from any ASCII alphabetic character
    ///
    /// Returns `None` for digits, punctuation and non-ASCII characters.
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Parse a letter from a string holding exactly one character
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => None,
        }
    }

    /// The lowercase form, as matched against the secret word
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// The uppercase form, as shown in the revealed pattern
    #[inline]
    #[must_use]
    pub const fn upper(self) -> char {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
