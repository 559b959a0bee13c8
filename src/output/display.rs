//! Display functions for the game transcript

use super::formatters::{counters, padded_pattern};
use crate::core::{GameState, GuessOutcome, Phase};
use crate::persistence::SaveId;
use colored::Colorize;
use std::io::{self, Write};

/// Print the title banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_welcome<W: Write + ?Sized>(out: &mut W, banner: &str) -> io::Result<()> {
    write!(out, "{}", banner.bright_cyan().bold())
}

/// Print the pattern, remaining attempts and guessed letters
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_state<W: Write + ?Sized>(out: &mut W, game: &GameState) -> io::Result<()> {
    let cells = padded_pattern(game.pattern());
    let attempts = counters(game);
    let attempts = if game.remaining_attempts() <= 2 {
        attempts.yellow()
    } else {
        attempts.normal()
    };
    writeln!(out, "{}{}\n", cells.bold(), attempts)
}

/// Announce whether a guess hit or missed
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_outcome<W: Write + ?Sized>(out: &mut W, outcome: GuessOutcome) -> io::Result<()> {
    match outcome {
        GuessOutcome::Hit { .. } => writeln!(out, "\n{}", "Hit!".green()),
        GuessOutcome::Miss => writeln!(out, "\n{}", "Nope.".red()),
        GuessOutcome::Repeated | GuessOutcome::GameOver => Ok(()),
    }
}

/// Announce victory, or defeat along with the secret word
///
/// Prints nothing while the game is still running.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_result<W: Write + ?Sized>(out: &mut W, game: &GameState) -> io::Result<()> {
    match game.phase() {
        Phase::Won => writeln!(out, "{}\n", "Victory!".bright_green().bold()),
        Phase::Lost => writeln!(
            out,
            "{} It was {}.\n",
            "Defeat.".bright_red().bold(),
            game.word().text().bold()
        ),
        Phase::InProgress => Ok(()),
    }
}

/// Print the numbered list of saved records
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_saves<W: Write + ?Sized>(out: &mut W, ids: &[SaveId]) -> io::Result<()> {
    for (i, id) in ids.iter().enumerate() {
        writeln!(out, "{}: {id}", i + 1)?;
    }
    Ok(())
}

/// Confirm where a game was saved
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_saved<W: Write + ?Sized>(out: &mut W, id: &SaveId) -> io::Result<()> {
    writeln!(out, "\nGame saved as {}.\n", id.to_string().cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, SecretWord};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn outcome_messages() {
        assert!(render(|out| print_outcome(out, GuessOutcome::Hit { revealed: 1 })).contains("Hit!"));
        assert!(render(|out| print_outcome(out, GuessOutcome::Miss)).contains("Nope."));
        assert!(render(|out| print_outcome(out, GuessOutcome::Repeated)).is_empty());
    }

    #[test]
    fn defeat_reveals_word() {
        let mut game = GameState::with_word(SecretWord::new("piano").unwrap());
        for ch in ['b', 'c', 'd', 'f', 'g', 'h'] {
            game.guess(Letter::new(ch).unwrap());
        }
        let text = render(|out| print_result(out, &game));
        assert!(text.contains("Defeat."));
        assert!(text.contains("piano"));
    }

    #[test]
    fn running_game_prints_no_result() {
        let game = GameState::with_word(SecretWord::new("piano").unwrap());
        assert!(render(|out| print_result(out, &game)).is_empty());
    }

    #[test]
    fn state_line_layout() {
        colored::control::set_override(false);
        let mut game = GameState::with_word(SecretWord::new("lemon").unwrap());
        for ch in ['e', 'z', 'l'] {
            game.guess(Letter::new(ch).unwrap());
        }
        assert_eq!(
            render(|out| print_state(out, &game)),
            " L  E  _  _  _      remaining attempts: 5     already guessed: e, z, l\n\n"
        );
    }

    #[test]
    fn state_contains_counters() {
        let mut game = GameState::with_word(SecretWord::new("piano").unwrap());
        game.guess(Letter::new('o').unwrap());
        let text = render(|out| print_state(out, &game));
        assert!(text.contains(" O "));
        assert!(text.contains("remaining attempts: 6"));
        assert!(text.contains("already guessed: o"));
    }
}
