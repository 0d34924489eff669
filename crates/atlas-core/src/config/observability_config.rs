use serde::{Deserialize, Serialize};

use super::defaults;

/// Levels accepted for `log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn has_valid_level(&self) -> bool {
        LOG_LEVELS.contains(&self.log_level.trim().to_ascii_lowercase().as_str())
    }
}
