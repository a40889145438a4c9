//! JsonFilePersistence - a single pretty-printed JSON array on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Persistence;
use crate::country::Country;
use crate::error::PersistenceError;

/// Reads the country list from a JSON file and, when write-through is on,
/// rewrites the whole file after every mutation.
///
/// There is no append log and no partial-write protection; the file is
/// overwritten in place.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
    write_through: bool,
}

impl JsonFilePersistence {
    /// Read-only by default: the file seeds the store but is never written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_through: false,
        }
    }

    pub fn write_through(mut self, enabled: bool) -> Self {
        self.write_through = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_write_through(&self) -> bool {
        self.write_through
    }
}

impl Persistence for JsonFilePersistence {
    fn load(&self) -> Result<Vec<Country>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "data file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(PersistenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Serde {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, countries: &[Country]) -> Result<(), PersistenceError> {
        if !self.write_through {
            return Ok(());
        }

        // serde_json's pretty printer indents with two spaces.
        let json = serde_json::to_string_pretty(countries).map_err(|source| {
            PersistenceError::Serde {
                path: self.path.clone(),
                source,
            }
        })?;

        fs::write(&self.path, json).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), count = countries.len(), "country list written");
        Ok(())
    }
}
