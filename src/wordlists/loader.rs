//! Word list loading utilities
//!
//! Provides functions to load word lists from files.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Blank lines are skipped and surrounding whitespace (including a trailing
/// carriage return) is trimmed. Entries are not otherwise validated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split newline-delimited text into words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_text_handles_crlf_and_blanks() {
        let words = words_from_text("apple\r\n\r\nBanana\r\n  cherry  \n");
        assert_eq!(words, vec!["apple", "Banana", "cherry"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "orange\nkitten").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["orange", "kitten"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
