//! Input validation for each prompt
//!
//! Every parser takes one trimmed line and either accepts it or explains
//! what was expected.

use crate::core::{Letter, WordLength};
use rand::Rng;
use thiserror::Error;

/// Reserved guess token that saves the game instead of guessing
pub const SAVE_TOKEN: &str = "save";

/// Token asking for a random word length
pub const RANDOM_TOKEN: &str = "r";

/// A line that does not fit the shape a prompt expects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input {input:?}: expected {expected}")]
pub struct InvalidInputError {
    pub input: String,
    pub expected: &'static str,
}

impl InvalidInputError {
    fn new(input: &str, expected: &'static str) -> Self {
        Self {
            input: input.to_string(),
            expected,
        }
    }
}

/// Answer to the word length prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthChoice {
    Exact(WordLength),
    Random,
}

impl LengthChoice {
    /// Settle a random choice into a concrete length
    pub fn resolve<R: Rng>(self, rng: &mut R) -> WordLength {
        match self {
            Self::Exact(length) => length,
            Self::Random => WordLength::random(rng),
        }
    }
}

/// Answer to the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Letter(Letter),
    Save,
}

/// `y` or `n`, either case
///
/// # Errors
/// Returns `InvalidInputError` for anything else.
pub fn parse_yes_no(text: &str) -> Result<bool, InvalidInputError> {
    match text {
        "y" | "Y" => Ok(true),
        "n" | "N" => Ok(false),
        _ => Err(InvalidInputError::new(text, "y or n")),
    }
}

/// A length from 5 to 12 without leading zeros, or `r`/`R` for random
///
/// # Errors
/// Returns `InvalidInputError` for anything else.
pub fn parse_length(text: &str) -> Result<LengthChoice, InvalidInputError> {
    if text.eq_ignore_ascii_case(RANDOM_TOKEN) {
        return Ok(LengthChoice::Random);
    }

    parse_plain_number(text)
        .and_then(WordLength::new)
        .map(LengthChoice::Exact)
        .ok_or_else(|| InvalidInputError::new(text, "a length from 5 to 12 or R"))
}

/// A single letter, or the save token in any case
///
/// # Errors
/// Returns `InvalidInputError` for anything else.
pub fn parse_guess(text: &str) -> Result<GuessInput, InvalidInputError> {
    if text.eq_ignore_ascii_case(SAVE_TOKEN) {
        return Ok(GuessInput::Save);
    }

    Letter::parse(text)
        .map(GuessInput::Letter)
        .ok_or_else(|| InvalidInputError::new(text, "a letter from a to z or save"))
}

/// A listed record number from `1..=count`, returned as a zero-based index
///
/// # Errors
/// Returns `InvalidInputError` for anything outside the listed numbers.
pub fn parse_selection(text: &str, count: usize) -> Result<usize, InvalidInputError> {
    parse_plain_number(text)
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| InvalidInputError::new(text, "one of the listed file numbers"))
}

/// Digits only, no sign, no leading zero
fn parse_plain_number(text: &str) -> Option<usize> {
    let valid = !text.is_empty()
        && text.len() <= 2
        && !text.starts_with('0')
        && text.bytes().all(|b| b.is_ascii_digit());
    valid.then(|| text.parse().ok()).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn yes_no_tokens() {
        assert_eq!(parse_yes_no("y"), Ok(true));
        assert_eq!(parse_yes_no("Y"), Ok(true));
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert_eq!(parse_yes_no("N"), Ok(false));
        for bad in ["", "yes", "no", "x", "yy"] {
            assert!(parse_yes_no(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn length_tokens() {
        for n in 5..=12 {
            assert_eq!(
                parse_length(&n.to_string()),
                Ok(LengthChoice::Exact(WordLength::new(n).unwrap()))
            );
        }
        assert_eq!(parse_length("r"), Ok(LengthChoice::Random));
        assert_eq!(parse_length("R"), Ok(LengthChoice::Random));
        for bad in ["", "4", "13", "05", "+5", "-5", "random", "100", "five"] {
            assert!(parse_length(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn random_length_resolves_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let length = LengthChoice::Random.resolve(&mut rng);
            assert!(WordLength::RANGE.contains(&length.get()));
        }
    }

    #[test]
    fn guess_tokens() {
        assert_eq!(
            parse_guess("a"),
            Ok(GuessInput::Letter(Letter::new('a').unwrap()))
        );
        assert_eq!(
            parse_guess("Z"),
            Ok(GuessInput::Letter(Letter::new('z').unwrap()))
        );
        assert_eq!(parse_guess("save"), Ok(GuessInput::Save));
        assert_eq!(parse_guess("SAVE"), Ok(GuessInput::Save));
        assert_eq!(parse_guess("Save"), Ok(GuessInput::Save));
        for bad in ["", "ab", "1", "?", "é", "saves"] {
            assert!(parse_guess(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn selection_tokens() {
        assert_eq!(parse_selection("1", 3), Ok(0));
        assert_eq!(parse_selection("3", 3), Ok(2));
        for bad in ["0", "4", "", "01", "x"] {
            assert!(parse_selection(bad, 3).is_err(), "{bad}");
        }
        assert!(parse_selection("1", 0).is_err());
    }

    #[test]
    fn invalid_input_explains_expectation() {
        let err = parse_yes_no("maybe").unwrap_err();
        assert_eq!(err.input, "maybe");
        assert_eq!(err.to_string(), "invalid input \"maybe\": expected y or n");
    }
}
