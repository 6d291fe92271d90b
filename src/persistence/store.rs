//! Store implementations

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::{HighScoreStore, PersistenceError, SaveFile};

/// High score kept in a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path used for the write-then-rename swap
    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, PersistenceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| PersistenceError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(SaveFile::from_json(&text)?.high_score)
    }

    fn save(&mut self, value: u32) -> Result<(), PersistenceError> {
        let text = SaveFile::new(value).to_json()?;
        let tmp = self.tmp_path();

        fs::write(&tmp, text).map_err(|source| PersistenceError::Write {
            path: tmp.clone(),
            source,
        })?;

        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(PersistenceError::Write {
                path: self.path.clone(),
                source,
            });
        }

        log::info!("High score {} saved to {}", value, self.path.display());
        Ok(())
    }
}

/// In-process store, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a value already stored
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    /// Number of successful `save` calls
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, PersistenceError> {
        Ok(self.value.unwrap_or(0))
    }

    fn save(&mut self, value: u32) -> Result<(), PersistenceError> {
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }
}
