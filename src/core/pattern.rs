//! Revealed pattern of the secret word
//!
//! One cell per letter position: either still blank or showing the
//! uppercase letter the player has found.

use super::Letter;
use std::fmt;

/// A single position in the revealed pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Blank,
    Revealed(char),
}

impl Cell {
    /// Marker written for blank cells in saved records
    pub const BLANK_MARKER: &'static str = "_";

    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Parse a cell from its saved-record form (`_` or a single letter)
    ///
    /// Surrounding whitespace is ignored, so padded cells such as `" A "`
    /// are accepted too.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == Self::BLANK_MARKER {
            return Some(Self::Blank);
        }
        Letter::parse(text).map(|letter| Self::Revealed(letter.upper()))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str(Self::BLANK_MARKER),
            Self::Revealed(ch) => write!(f, "{ch}"),
        }
    }
}

/// Per-position display state of the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPattern {
    cells: Vec<Cell>,
}

impl RevealedPattern {
    /// All-blank pattern for a word of `len` letters
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            cells: vec![Cell::Blank; len],
        }
    }

    #[must_use]
    pub const fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells still blank
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_blank()).count()
    }

    /// True once every cell is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_blank())
    }

    /// Reveal `letter` at each of `positions`, returning how many cells changed
    pub fn reveal(&mut self, letter: Letter, positions: &[usize]) -> usize {
        let mut changed = 0;
        for &position in positions {
            if let Some(cell) = self.cells.get_mut(position)
                && cell.is_blank()
            {
                *cell = Cell::Revealed(letter.upper());
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn blank_pattern_has_requested_length() {
        let pattern = RevealedPattern::blank(7);
        assert_eq!(pattern.len(), 7);
        assert_eq!(pattern.blanks(), 7);
        assert!(!pattern.is_complete());
    }

    #[test]
    fn reveal_marks_all_positions() {
        let mut pattern = RevealedPattern::blank(5);
        assert_eq!(pattern.reveal(letter('p'), &[1, 2]), 2);
        assert_eq!(
            pattern.cells(),
            &[
                Cell::Blank,
                Cell::Revealed('P'),
                Cell::Revealed('P'),
                Cell::Blank,
                Cell::Blank
            ]
        );
    }

    #[test]
    fn reveal_ignores_out_of_range_positions() {
        let mut pattern = RevealedPattern::blank(2);
        assert_eq!(pattern.reveal(letter('a'), &[0, 9]), 1);
        assert_eq!(pattern.blanks(), 1);
    }

    #[test]
    fn complete_when_no_blanks_remain() {
        let mut pattern = RevealedPattern::blank(2);
        pattern.reveal(letter('o'), &[0]);
        pattern.reveal(letter('x'), &[1]);
        assert!(pattern.is_complete());
    }

    #[test]
    fn cell_parse_accepts_padded_forms() {
        assert_eq!(Cell::parse("_"), Some(Cell::Blank));
        assert_eq!(Cell::parse(" _ "), Some(Cell::Blank));
        assert_eq!(Cell::parse(" A "), Some(Cell::Revealed('A')));
        assert_eq!(Cell::parse("a"), Some(Cell::Revealed('A')));
        assert_eq!(Cell::parse("ab"), None);
        assert_eq!(Cell::parse("?"), None);
    }

    #[test]
    fn cell_display_round_trips() {
        for cell in [Cell::Blank, Cell::Revealed('Z')] {
            assert_eq!(Cell::parse(&cell.to_string()), Some(cell));
        }
    }
}
