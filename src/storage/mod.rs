//! Persistence of sessions, statistics and configuration
//!
//! The game only talks to [`PersistenceGateway`]. Records are opaque to it;
//! the only contract is that a value saved is loaded back unchanged.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::config::Configuration;
use crate::game::Stats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Canonical record of a session: the date and the words played
///
/// Results are not stored; they are recomputed from the secret word when
/// the session is restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub date: NaiveDate,
    /// Limit the session started with; a later configuration change
    /// only applies to the next date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt_limit: Option<usize>,
    pub guesses: Vec<String>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record in {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage is unavailable")]
    Unavailable,
}

/// Load/save pairs for everything that outlives the process
///
/// `Ok(None)` means nothing was saved yet.
pub trait PersistenceGateway {
    /// Load the last saved session
    ///
    /// # Errors
    /// Returns a `StorageError` if the record exists but cannot be read.
    fn load_session(&self) -> Result<Option<SavedSession>, StorageError>;

    /// Replace the saved session
    ///
    /// # Errors
    /// Returns a `StorageError` if the record cannot be written.
    fn save_session(&mut self, session: &SavedSession) -> Result<(), StorageError>;

    /// Load cumulative statistics
    ///
    /// # Errors
    /// Returns a `StorageError` if the record exists but cannot be read.
    fn load_stats(&self) -> Result<Option<Stats>, StorageError>;

    /// Replace cumulative statistics
    ///
    /// # Errors
    /// Returns a `StorageError` if the record cannot be written.
    fn save_stats(&mut self, stats: &Stats) -> Result<(), StorageError>;

    /// Load player configuration
    ///
    /// # Errors
    /// Returns a `StorageError` if the record exists but cannot be read.
    fn load_config(&self) -> Result<Option<Configuration>, StorageError>;

    /// Replace player configuration
    ///
    /// # Errors
    /// Returns a `StorageError` if the record cannot be written.
    fn save_config(&mut self, config: &Configuration) -> Result<(), StorageError>;
}
