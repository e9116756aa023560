//! Player configuration
//!
//! Persisted through the storage gateway. Unknown or missing fields fall
//! back to defaults so older files keep loading.

use serde::{Deserialize, Serialize};

/// Game and presentation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Number of guesses allowed per day
    pub attempt_limit: usize,
    /// Orange/blue palette instead of green/yellow
    pub high_contrast: bool,
}

impl Configuration {
    pub const DEFAULT_ATTEMPT_LIMIT: usize = 6;

    /// Attempt limit, never below one
    #[must_use]
    pub fn attempt_limit(&self) -> usize {
        self.attempt_limit.max(1)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            attempt_limit: Self::DEFAULT_ATTEMPT_LIMIT,
            high_contrast: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Configuration::default();
        assert_eq!(config.attempt_limit(), 6);
        assert!(!config.high_contrast);
    }

    #[test]
    fn zero_limit_is_clamped() {
        let config = Configuration {
            attempt_limit: 0,
            ..Configuration::default()
        };
        assert_eq!(config.attempt_limit(), 1);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Configuration = serde_json::from_str(r#"{"high_contrast": true}"#).unwrap();
        assert_eq!(config.attempt_limit(), 6);
        assert!(config.high_contrast);

        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Configuration::default());
    }
}
