use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Run the per-record and per-group stages on the rayon pool.
    pub parallel: bool,
    /// Treat any integrity warning as a failed run.
    pub fail_on_warnings: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            fail_on_warnings: defaults::DEFAULT_FAIL_ON_WARNINGS,
        }
    }
}
