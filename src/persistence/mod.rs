//! High score persistence
//!
//! Features:
//! - Single-key JSON document (`{"high_score": N}`)
//! - Tolerant reads (unknown keys ignored, bad values reported)
//! - Atomic writes (tmp → save)
//! - Storage behind a trait so the game never touches globals

pub mod save_file;
pub mod store;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use save_file::SaveFile;
pub use store::{JsonFileStore, MemoryStore};

/// Failures while reading or writing the save file
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("save data is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("save data must be a JSON object")]
    NotAnObject,

    #[error("save data field `{field}` is not a number")]
    InvalidField { field: &'static str },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode save data: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PersistenceError {
    /// True when the save file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Somewhere the high score lives between runs
pub trait HighScoreStore {
    /// Read the stored value
    fn load(&self) -> Result<u32, PersistenceError>;

    /// Replace the stored value
    fn save(&mut self, value: u32) -> Result<(), PersistenceError>;
}
