//! The three tier vocabularies and their allowed forward transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How consistent a reported code is with known species behavior.
///
/// Matrix values: 1 = expected, 2 = plausible, 3 = improbable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectationTier {
    Expected,
    Plausible,
    Improbable,
}

impl ExpectationTier {
    /// Decode a matrix cell value.
    pub fn from_matrix_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Expected),
            2 => Some(Self::Plausible),
            3 => Some(Self::Improbable),
            _ => None,
        }
    }

    pub fn matrix_value(self) -> u8 {
        match self {
            Self::Expected => 1,
            Self::Plausible => 2,
            Self::Improbable => 3,
        }
    }

    /// Plausible and improbable may only move to expected.
    pub fn can_advance_to(self, next: Self) -> bool {
        self == next || next == Self::Expected
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expected => "expected",
            Self::Plausible => "plausible",
            Self::Improbable => "improbable",
        }
    }
}

impl fmt::Display for ExpectationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day-of-year phase for a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Early,
    Pre,
    Breeding,
    Post,
    Late,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Early,
        Phase::Pre,
        Phase::Breeding,
        Phase::Post,
        Phase::Late,
    ];

    /// Early season and pre-breeding.
    pub fn precedes_breeding(self) -> bool {
        matches!(self, Self::Early | Self::Pre)
    }

    /// Post-breeding and late season.
    pub fn follows_breeding(self) -> bool {
        matches!(self, Self::Post | Self::Late)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Pre => "pre",
            Self::Breeding => "breeding",
            Self::Post => "post",
            Self::Late => "late",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final spatiotemporal trust level of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Confident,
    Uncertain,
    Unlikely,
}

impl ConfidenceTier {
    /// Confident is terminal; uncertain and unlikely only move to confident.
    pub fn can_advance_to(self, next: Self) -> bool {
        self == next || next == Self::Confident
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confident => "confident",
            Self::Uncertain => "uncertain",
            Self::Unlikely => "unlikely",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which code-adjustment map a correction comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Improbable,
    PlausibleWithoutEvidence,
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Improbable => f.write_str("improbable"),
            Self::PlausibleWithoutEvidence => f.write_str("plausible-without-evidence"),
        }
    }
}
