//! Formatting utilities for terminal output

use crate::core::{Cell, GameState, Letter, RevealedPattern};

/// Columns taken by one pattern cell
const CELL_WIDTH: usize = 3;

/// Extra columns between the pattern and the counters
const PATTERN_GAP: usize = 5;

/// Format a pattern as spaced cells, e.g. ` A  _  _ `
#[must_use]
pub fn pattern_cells(pattern: &RevealedPattern) -> String {
    pattern
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Blank => " _ ".to_string(),
            Cell::Revealed(ch) => format!(" {ch} "),
        })
        .collect()
}

/// Width the pattern column is padded to
#[must_use]
pub const fn pattern_column_width(len: usize) -> usize {
    len * CELL_WIDTH + PATTERN_GAP
}

/// Pattern cells padded so the counters line up after them
#[must_use]
pub fn padded_pattern(pattern: &RevealedPattern) -> String {
    let width = pattern_column_width(pattern.len());
    format!("{:<width$}", pattern_cells(pattern))
}

/// Guessed letters joined for display
#[must_use]
pub fn guessed_list(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The counters that follow the pattern on the state line
#[must_use]
pub fn counters(game: &GameState) -> String {
    let mut line = format!("remaining attempts: {}     ", game.remaining_attempts());
    if !game.guessed().is_empty() {
        line.push_str("already guessed: ");
        line.push_str(&guessed_list(game.guessed()));
    }
    line
}
