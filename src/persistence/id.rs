//! Saved record identifiers
//!
//! File names follow `hangman_save_<timestamp>[_<sequence>].yaml`, where the
//! timestamp is UTC down to the millisecond and the sequence number
//! disambiguates saves that land on the same timestamp.

use chrono::NaiveDateTime;
use std::fmt;

/// Prefix shared by every save file name
pub const SAVE_PREFIX: &str = "hangman_save_";

/// Extension of save files
pub const SAVE_EXTENSION: &str = "yaml";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S-%3f";

/// Identifier of one saved record, ordered oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaveId {
    timestamp: NaiveDateTime,
    sequence: u32,
}

impl SaveId {
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, sequence: u32) -> Self {
        Self {
            timestamp,
            sequence,
        }
    }

    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    /// The same timestamp with the next sequence number
    #[must_use]
    pub const fn next_sequence(self) -> Self {
        Self::new(self.timestamp, self.sequence + 1)
    }

    /// File stem, also used as the label shown to the player
    #[must_use]
    pub fn stem(&self) -> String {
        let stamp = self.timestamp.format(TIMESTAMP_FORMAT);
        if self.sequence == 0 {
            format!("{SAVE_PREFIX}{stamp}")
        } else {
            format!("{SAVE_PREFIX}{stamp}_{}", self.sequence)
        }
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{SAVE_EXTENSION}", self.stem())
    }

    /// Recognize a save file name; unrelated files yield `None`
    #[must_use]
    pub fn parse_file_name(name: &str) -> Option<Self> {
        let stem = name
            .strip_suffix(SAVE_EXTENSION)?
            .strip_suffix('.')?
            .strip_prefix(SAVE_PREFIX)?;

        // The timestamp itself contains one underscore between date and time
        let (stamp, sequence) = match stem.rsplit_once('_') {
            Some((head, tail)) if head.contains('_') => (head, tail.parse().ok()?),
            _ => (stem, 0),
        };

        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
        Some(Self::new(timestamp, sequence))
    }
}

impl fmt::Display for SaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn file_name_layout() {
        let id = SaveId::new(at(9, 5, 7, 42), 0);
        assert_eq!(id.file_name(), "hangman_save_2026-10-19_09-05-07-042.yaml");
        assert_eq!(
            id.next_sequence().file_name(),
            "hangman_save_2026-10-19_09-05-07-042_1.yaml"
        );
    }

    #[test]
    fn file_name_parses_back() {
        for id in [SaveId::new(at(23, 59, 59, 999), 0), SaveId::new(at(0, 0, 0, 0), 12)] {
            assert_eq!(SaveId::parse_file_name(&id.file_name()), Some(id));
        }
    }

    #[test]
    fn unrelated_names_are_ignored() {
        for name in [
            ".",
            "..",
            "notes.txt",
            "hangman_save_.yaml",
            "hangman_save_2026-10-19_09-05-07-042.json",
            "hangman_save_yesterday.yaml",
            "hangman_save_2026-10-19_09-05-07-042_x.yaml",
        ] {
            assert_eq!(SaveId::parse_file_name(name), None, "{name}");
        }
    }

    #[test]
    fn ordering_is_chronological_then_sequence() {
        let early = SaveId::new(at(8, 0, 0, 0), 5);
        let late = SaveId::new(at(8, 0, 0, 1), 0);
        let late_again = late.next_sequence();
        assert!(early < late);
        assert!(late < late_again);
    }
}
