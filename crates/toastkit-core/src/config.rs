//! Provider configuration
//!
//! Settings are fixed for the lifetime of a [`ToastProvider`](crate::ToastProvider).
//! They can be built in code or loaded from a JSON file:
//!
//! ```json
//! { "defaultPosition": "bottom-right", "defaultDuration": 4000, "maxToasts": 3 }
//! ```

use crate::error::{ConfigError, Error, Result};
use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Auto-dismiss delay used when a toast does not set its own
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Grace period between dismissal and removal; matches the exit animation
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Buffer size of the change-event broadcast channel
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Toast provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToasterConfig {
    pub default_position: Position,
    #[serde(with = "duration_ms")]
    pub default_duration: Duration,
    pub max_toasts: usize,
    #[serde(with = "duration_ms")]
    pub exit_duration: Duration,
    pub event_capacity: usize,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            default_position: Position::default(),
            default_duration: DEFAULT_DURATION,
            max_toasts: DEFAULT_MAX_TOASTS,
            exit_duration: EXIT_DURATION,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl ToasterConfig {
    pub fn with_default_position(mut self, position: Position) -> Self {
        self.default_position = position;
        self
    }

    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    pub fn with_max_toasts(mut self, max_toasts: usize) -> Self {
        self.max_toasts = max_toasts;
        self
    }

    pub fn with_exit_duration(mut self, exit_duration: Duration) -> Self {
        self.exit_duration = exit_duration;
        self
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_toasts == 0 {
            return Err(Error::Config(ConfigError::Invalid(
                "maxToasts must be at least 1".to_string(),
            )));
        }
        if self.event_capacity == 0 {
            return Err(Error::Config(ConfigError::Invalid(
                "eventCapacity must be at least 1".to_string(),
            )));
        }
        Ok(())
    }
}

/// Durations as integer milliseconds
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
