use serde::{Deserialize, Serialize};

use super::defaults;

/// Supported collection window, inclusive years.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub first_year: i32,
    pub last_year: i32,
}

impl WindowConfig {
    pub fn contains(&self, year: i32) -> bool {
        (self.first_year..=self.last_year).contains(&year)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            first_year: defaults::DEFAULT_FIRST_YEAR,
            last_year: defaults::DEFAULT_LAST_YEAR,
        }
    }
}
