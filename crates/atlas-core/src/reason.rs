//! Resolution reasons attached to corrected observations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why an observation's code was resolved away from the reported one.
///
/// Fixed reasons carry the engine's own labels. Reasons coming from a
/// code-adjustment table are kept verbatim in `Adjusted`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResolutionReason {
    TooEarly,
    TooLate,
    NotLikely,
    InsufficientEvidence,
    Adjusted(String),
}

impl ResolutionReason {
    pub fn as_str(&self) -> &str {
        match self {
            Self::TooEarly => "too-early",
            Self::TooLate => "too-late",
            Self::NotLikely => "not-likely",
            Self::InsufficientEvidence => "insufficient-evidence",
            Self::Adjusted(reason) => reason,
        }
    }
}

impl fmt::Display for ResolutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ResolutionReason {
    fn from(value: String) -> Self {
        match value.as_str() {
            "too-early" => Self::TooEarly,
            "too-late" => Self::TooLate,
            "not-likely" => Self::NotLikely,
            "insufficient-evidence" => Self::InsufficientEvidence,
            _ => Self::Adjusted(value),
        }
    }
}

impl From<&str> for ResolutionReason {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ResolutionReason> for String {
    fn from(reason: ResolutionReason) -> Self {
        match reason {
            ResolutionReason::Adjusted(reason) => reason,
            other => other.as_str().to_string(),
        }
    }
}
