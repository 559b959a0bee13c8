//! Save directory management
//!
//! Writes, enumerates and reads back saved records.

use super::error::{LoadError, SaveError};
use super::id::SaveId;
use super::record::SavedRecord;
use crate::core::GameState;
use chrono::{NaiveDateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Most records offered when choosing a game to resume
pub const MAX_LISTED_SAVES: usize = 9;

/// Default directory for saved records, relative to the working directory
pub const DEFAULT_SAVES_DIR: &str = "saves";

/// A directory of saved games
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_of(&self, id: &SaveId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    /// Save a game stamped with the current UTC time
    ///
    /// UTC keeps names in chronological order across daylight saving changes.
    ///
    /// # Errors
    /// Returns `SaveError` if the directory or file cannot be written.
    pub fn save(&self, state: &GameState) -> Result<SaveId, SaveError> {
        self.save_at(state, Utc::now().naive_utc())
    }

    /// Save a game under the given timestamp
    ///
    /// Creates the directory if needed. Never overwrites an existing record:
    /// a clashing name gets the next sequence number instead.
    ///
    /// # Errors
    /// Returns `SaveError` if the directory or file cannot be written.
    pub fn save_at(&self, state: &GameState, now: NaiveDateTime) -> Result<SaveId, SaveError> {
        let yaml = SavedRecord::from_state(state).to_yaml()?;

        fs::create_dir_all(&self.dir).map_err(|source| SaveError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut id = SaveId::new(now, 0);
        let (path, mut file) = loop {
            let path = self.path_of(&id);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => break (path, file),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "save name taken");
                    id = id.next_sequence();
                }
                Err(source) => return Err(SaveError::Io { path, source }),
            }
        };

        file.write_all(yaml.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|source| SaveError::Io {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), "game saved");
        Ok(id)
    }

    /// Saved records, most recent first, at most `MAX_LISTED_SAVES`
    ///
    /// A missing directory means there are no saves yet.
    ///
    /// # Errors
    /// Returns `LoadError::Io` if the directory exists but cannot be read.
    pub fn list(&self) -> Result<Vec<SaveId>, LoadError> {
        let io_error = |source: io::Error| LoadError::Io {
            path: self.dir.clone(),
            source,
        };

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error)?;
            let name = entry.file_name();
            match name.to_str().and_then(SaveId::parse_file_name) {
                Some(id) => ids.push(id),
                None => debug!(name = ?name, "skipping unrelated file"),
            }
        }

        ids.sort_unstable_by(|a, b| b.cmp(a));
        ids.truncate(MAX_LISTED_SAVES);
        debug!(count = ids.len(), "listed saves");
        Ok(ids)
    }

    /// Restore the game stored under `id`
    ///
    /// # Errors
    /// Returns `LoadError` if the file is missing or unreadable, is not a
    /// valid record, or describes an impossible game.
    pub fn load(&self, id: &SaveId) -> Result<GameState, LoadError> {
        let path = self.path_of(id);

        let text = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        let record = SavedRecord::from_yaml(&text).map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        })?;

        let state = record.into_state().map_err(|source| {
            warn!(path = %path.display(), %source, "saved game rejected");
            LoadError::Invalid {
                path: path.clone(),
                source,
            }
        })?;

        info!(path = %path.display(), "game loaded");
        Ok(state)
    }
}
