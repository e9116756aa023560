//! File-backed gateway storing one JSON document per record

use super::{PersistenceGateway, SavedSession, StorageError};
use crate::config::Configuration;
use crate::game::Stats;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const SESSION_FILE: &str = "session.json";
const STATS_FILE: &str = "stats.json";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "DAILY_WORD_DIR";

/// Stores records as `session.json`, `stats.json` and `config.json` in a directory
///
/// Writes go to a uniquely named temporary file that is then persisted over
/// the record, so an interrupted write never leaves a truncated document
/// behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default data directory
    ///
    /// Uses `DAILY_WORD_DIR` if set, otherwise `<platform data dir>/daily_word`,
    /// falling back to `.daily_word` in the working directory.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }

        dirs::data_dir().map_or_else(|| PathBuf::from(".daily_word"), |dir| dir.join("daily_word"))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StorageError> {
        let path = self.root.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StorageError::Format { path, source })
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let path = self.root.join(name);
        let io_error = |source: std::io::Error| StorageError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(io_error)?;

        let content = serde_json::to_string_pretty(value).map_err(|source| StorageError::Format {
            path: path.clone(),
            source,
        })?;

        let temp = NamedTempFile::new_in(&self.root).map_err(io_error)?;
        fs::write(temp.path(), content).map_err(io_error)?;
        temp.persist(&path).map_err(|e| io_error(e.error))?;

        log::debug!("saved {}", path.display());
        Ok(())
    }
}

impl PersistenceGateway for JsonStore {
    fn load_session(&self) -> Result<Option<SavedSession>, StorageError> {
        self.read(SESSION_FILE)
    }

    fn save_session(&mut self, session: &SavedSession) -> Result<(), StorageError> {
        self.write(SESSION_FILE, session)
    }

    fn load_stats(&self) -> Result<Option<Stats>, StorageError> {
        self.read(STATS_FILE)
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StorageError> {
        self.write(STATS_FILE, stats)
    }

    fn load_config(&self) -> Result<Option<Configuration>, StorageError> {
        self.read(CONFIG_FILE)
    }

    fn save_config(&mut self, config: &Configuration) -> Result<(), StorageError> {
        self.write(CONFIG_FILE, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn missing_records_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        assert!(store.load_session().unwrap().is_none());
        assert!(store.load_stats().unwrap().is_none());
        assert!(store.load_config().unwrap().is_none());
    }

    #[test]
    fn session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().join("nested"));

        let session = SavedSession {
            date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            attempt_limit: Some(6),
            guesses: vec!["CANDLE".into(), "CASTLE".into()],
        };
        store.save_session(&session).unwrap();

        assert_eq!(store.load_session().unwrap(), Some(session));
        assert!(!dir.path().join("nested/session.json.tmp").exists());
    }

    #[test]
    fn stats_and_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path());

        let mut stats = Stats::default();
        stats.update(true, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(), 4);
        store.save_stats(&stats).unwrap();
        assert_eq!(store.load_stats().unwrap(), Some(stats));

        let config = Configuration {
            attempt_limit: 8,
            high_contrast: true,
        };
        store.save_config(&config).unwrap();
        assert_eq!(store.load_config().unwrap(), Some(config));
    }

    #[test]
    fn malformed_record_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STATS_FILE), "{ not json").unwrap();
        let store = JsonStore::new(dir.path());

        assert!(matches!(
            store.load_stats(),
            Err(StorageError::Format { .. })
        ));
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path());
        let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();

        store
            .save_session(&SavedSession {
                date,
                attempt_limit: None,
                guesses: vec!["CANDLE".into()],
            })
            .unwrap();
        store
            .save_session(&SavedSession {
                date,
                attempt_limit: None,
                guesses: vec!["CANDLE".into(), "CASTLE".into()],
            })
            .unwrap();

        let loaded = store.load_session().unwrap().unwrap();
        assert_eq!(loaded.guesses.len(), 2);
    }

    #[test]
    fn writes_leave_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path());

        store.save_stats(&Stats::default()).unwrap();
        store.save_stats(&Stats::default()).unwrap();
        store.save_config(&Configuration::default()).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, [CONFIG_FILE, STATS_FILE]);
    }

    #[test]
    fn unwritable_root_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not_a_dir");
        fs::write(&file, "").unwrap();

        let mut store = JsonStore::new(&file);
        let result = store.save_stats(&Stats::default());
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
