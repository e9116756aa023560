//! Persisted player options

use crate::config::Configuration;
use crate::storage::{PersistenceGateway, StorageError};

/// Requested changes; `None` leaves a field untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub attempt_limit: Option<usize>,
    pub high_contrast: Option<bool>,
}

impl ConfigUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.attempt_limit.is_none() && self.high_contrast.is_none()
    }
}

/// Apply `update` to the stored configuration and save it
///
/// An unreadable configuration is replaced by the defaults. A new attempt
/// limit takes effect with the next day's puzzle.
///
/// # Errors
///
/// Returns a `StorageError` if the configuration cannot be written.
pub fn update_config<P: PersistenceGateway>(
    store: &mut P,
    update: ConfigUpdate,
) -> Result<Configuration, StorageError> {
    let mut config = store
        .load_config()
        .unwrap_or_else(|e| {
            log::warn!("replacing unreadable configuration: {e}");
            None
        })
        .unwrap_or_default();

    if update.is_empty() {
        return Ok(config);
    }

    if let Some(limit) = update.attempt_limit {
        config.attempt_limit = limit.max(1);
    }
    if let Some(high_contrast) = update.high_contrast {
        config.high_contrast = high_contrast;
    }

    store.save_config(&config)?;
    log::info!("configuration saved: {config:?}");
    Ok(config)
}

/// Print the configuration in effect
pub fn print_config(config: &Configuration) {
    println!("attempt limit: {}", config.attempt_limit());
    println!("high contrast: {}", config.high_contrast);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn updates_only_requested_fields() {
        let mut store = MemoryStore::with_config(Configuration {
            attempt_limit: 8,
            high_contrast: false,
        });

        let config = update_config(
            &mut store,
            ConfigUpdate {
                high_contrast: Some(true),
                ..ConfigUpdate::default()
            },
        )
        .unwrap();

        assert_eq!(config.attempt_limit, 8);
        assert!(config.high_contrast);
        assert_eq!(store.config, Some(config));
    }

    #[test]
    fn zero_limit_saved_as_one() {
        let mut store = MemoryStore::new();
        let config = update_config(
            &mut store,
            ConfigUpdate {
                attempt_limit: Some(0),
                high_contrast: None,
            },
        )
        .unwrap();
        assert_eq!(config.attempt_limit, 1);
    }

    #[test]
    fn empty_update_writes_nothing() {
        let mut store = MemoryStore::new();
        let config = update_config(&mut store, ConfigUpdate::default()).unwrap();
        assert_eq!(config, Configuration::default());
        assert!(store.config.is_none());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let result = update_config(
            &mut store,
            ConfigUpdate {
                attempt_limit: Some(4),
                high_contrast: None,
            },
        );
        assert!(matches!(result, Err(StorageError::Unavailable)));
    }
}
