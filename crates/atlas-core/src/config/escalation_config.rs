use serde::{Deserialize, Serialize};

use super::defaults;

/// Escalation pass configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// A group's highest confirmed code must rank strictly above this code
    /// for its uncertain records to escalate.
    pub threshold_code: String,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            threshold_code: defaults::DEFAULT_ESCALATION_THRESHOLD.to_string(),
        }
    }
}
