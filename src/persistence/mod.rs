//! Saving and resuming games
//!
//! Games are stored as human-readable YAML files in a dedicated directory,
//! one file per save, named after the time they were written.

mod error;
mod id;
mod record;
mod store;

pub use error::{LoadError, SaveError};
pub use id::{SAVE_EXTENSION, SAVE_PREFIX, SaveId};
pub use record::{RecordError, SavedRecord};
pub use store::{DEFAULT_SAVES_DIR, MAX_LISTED_SAVES, SaveStore};
