//! Runtime configuration
//!
//! Everything has a default, so running without flags plays the classic game
//! with the built-in dictionary and a `saves` directory.

use crate::persistence::{DEFAULT_SAVES_DIR, SaveStore};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, ensure};
use std::path::PathBuf;
use tracing::info;

/// Settings for one run of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list file; `None` uses the embedded dictionary
    pub dictionary: Option<PathBuf>,
    /// Directory holding saved games
    pub saves_dir: PathBuf,
    /// Invalid answers allowed per prompt; `None` retries forever
    pub max_retries: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            saves_dir: PathBuf::from(DEFAULT_SAVES_DIR),
            max_retries: None,
        }
    }
}

impl Config {
    /// Check settings that cannot be expressed in the types
    ///
    /// # Errors
    /// Fails when the retry ceiling is zero.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_retries != Some(0),
            "--max-retries must be at least 1"
        );
        Ok(())
    }

    /// Load the configured dictionary
    ///
    /// # Errors
    /// Fails if a dictionary file was given but cannot be read, or holds no
    /// words at all.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let dictionary = match &self.dictionary {
            Some(path) => Dictionary::from_file(path)
                .with_context(|| format!("failed to read dictionary {}", path.display()))?,
            None => Dictionary::embedded(),
        };
        ensure!(!dictionary.is_empty(), "the dictionary has no words");
        info!(words = dictionary.len(), "dictionary ready");
        Ok(dictionary)
    }

    #[must_use]
    pub fn save_store(&self) -> SaveStore {
        SaveStore::new(&self.saves_dir)
    }
}
