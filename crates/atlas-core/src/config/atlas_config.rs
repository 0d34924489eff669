//! Top-level atlas configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CodesConfig, EscalationConfig, ObservabilityConfig, PipelineConfig, WindowConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ATLAS_*`)
/// 2. Config file (`atlas.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AtlasConfig {
    pub codes: CodesConfig,
    pub escalation: EscalationConfig,
    pub window: WindowConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl AtlasConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.codes.no_code.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "codes.no_code".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.window.first_year > self.window.last_year {
            return Err(ConfigError::ValidationFailed {
                field: "window".to_string(),
                message: format!(
                    "first_year {} is after last_year {}",
                    self.window.first_year, self.window.last_year
                ),
            });
        }
        if self
            .escalation
            .threshold_code
            .trim()
            .eq_ignore_ascii_case(self.codes.no_code.trim())
        {
            return Err(ConfigError::ValidationFailed {
                field: "escalation.threshold_code".to_string(),
                message: "must differ from the no-code sentinel".to_string(),
            });
        }
        if !self.observability.has_valid_level() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("unknown level {:?}", self.observability.log_level),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `ATLAS_ESCALATION_THRESHOLD`, `ATLAS_WINDOW_FIRST_YEAR`, etc.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ATLAS_ESCALATION_THRESHOLD") {
            self.escalation.threshold_code = val;
        }
        if let Ok(val) = std::env::var("ATLAS_WINDOW_FIRST_YEAR") {
            if let Ok(v) = val.parse::<i32>() {
                self.window.first_year = v;
            }
        }
        if let Ok(val) = std::env::var("ATLAS_WINDOW_LAST_YEAR") {
            if let Ok(v) = val.parse::<i32>() {
                self.window.last_year = v;
            }
        }
        if let Ok(val) = std::env::var("ATLAS_PIPELINE_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                self.pipeline.parallel = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
