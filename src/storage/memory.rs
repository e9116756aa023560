//! In-memory gateway
//!
//! Keeps records in the process and counts writes. Used by tests and by
//! hosts that do not want anything on disk.

use super::{PersistenceGateway, SavedSession, StorageError};
use crate::config::Configuration;
use crate::game::Stats;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub session: Option<SavedSession>,
    pub stats: Option<Stats>,
    pub config: Option<Configuration>,
    pub session_writes: usize,
    pub stats_writes: usize,
    /// When set, every save fails with `StorageError::Unavailable`
    pub fail_writes: bool,
    /// When set, every load fails with `StorageError::Unavailable`
    pub fail_reads: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: Configuration) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn check_readable(&self) -> Result<(), StorageError> {
        if self.fail_reads {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl PersistenceGateway for MemoryStore {
    fn load_session(&self) -> Result<Option<SavedSession>, StorageError> {
        self.check_readable()?;
        Ok(self.session.clone())
    }

    fn save_session(&mut self, session: &SavedSession) -> Result<(), StorageError> {
        self.check_writable()?;
        self.session = Some(session.clone());
        self.session_writes += 1;
        Ok(())
    }

    fn load_stats(&self) -> Result<Option<Stats>, StorageError> {
        self.check_readable()?;
        Ok(self.stats.clone())
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StorageError> {
        self.check_writable()?;
        self.stats = Some(stats.clone());
        self.stats_writes += 1;
        Ok(())
    }

    fn load_config(&self) -> Result<Option<Configuration>, StorageError> {
        self.check_readable()?;
        Ok(self.config.clone())
    }

    fn save_config(&mut self, config: &Configuration) -> Result<(), StorageError> {
        self.check_writable()?;
        self.config = Some(config.clone());
        Ok(())
    }
}
