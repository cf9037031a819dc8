//! Persisted record of known beatmap set IDs (`db.json`).
//!
//! Document format:
//! ```json
//! {
//!   "downloaded_maps": [1, 2, 3]
//! }
//! ```

mod document;

pub use document::{PersistedState, STATE_KEY};

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::state::atomic_write;
use crate::{LazerSetsError, Result};

/// Reads and writes the state document at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write an empty document if none exists yet. Returns whether one was created.
    ///
    /// # Errors
    /// Returns an error if the document or its parent directory cannot be written.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&PersistedState::default())?;
        log::info!("Created empty state document {}", self.path.display());
        Ok(true)
    }

    /// Load the document, creating an empty one first when it is missing.
    ///
    /// # Errors
    /// Returns [`LazerSetsError::StateParse`] if the existing document is not valid,
    /// or an I/O error if it cannot be read or created.
    pub fn load(&self) -> Result<PersistedState> {
        if self.ensure_exists()? {
            return Ok(PersistedState::default());
        }
        self.read()
    }

    /// Load the document without creating it. `None` when it does not exist.
    ///
    /// # Errors
    /// Same as [`StateStore::load`] for an existing document.
    pub fn load_existing(&self) -> Result<Option<PersistedState>> {
        if self.path.exists() {
            self.read().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Overwrite the document with the full `state`.
    ///
    /// The write is atomic: an interrupted save leaves the previous document intact.
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized or written.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        let mut json = serde_json::to_string_pretty(state)?;
        json.push('\n');
        atomic_write(&self.path, json.as_bytes()).map_err(|e| LazerSetsError::FileAccess {
            path: self.path.clone(),
            source: e,
        })?;
        log::info!(
            "Saved {} set IDs to {}",
            state.len(),
            self.path.display()
        );
        Ok(())
    }

    fn read(&self) -> Result<PersistedState> {
        let file = fs::File::open(&self.path).map_err(|e| LazerSetsError::FileAccess {
            path: self.path.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| LazerSetsError::StateParse {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
