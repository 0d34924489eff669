use serde::{Deserialize, Serialize};

use super::defaults;

/// Sentinel and carve-out codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodesConfig {
    /// Code meaning "no breeding evidence".
    pub no_code: String,
    /// Fly-over code excluded from the core-breeding confident rule.
    pub flyover_code: String,
}

impl Default for CodesConfig {
    fn default() -> Self {
        Self {
            no_code: defaults::DEFAULT_NO_CODE.to_string(),
            flyover_code: defaults::DEFAULT_FLYOVER_CODE.to_string(),
        }
    }
}
