//! Persistence errors

use super::record::RecordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A saved game could not be listed or restored
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no saved games found")]
    NoSaves,
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid saved game {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: RecordError,
    },
}

/// A game could not be written to disk
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode saved game: {0}")]
    Encode(#[from] serde_yaml::Error),
}
