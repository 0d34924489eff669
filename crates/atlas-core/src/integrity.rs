//! Integrity warnings (non-fatal) and species faults (fatal per species).

use serde::{Deserialize, Serialize};

use crate::errors::{AtlasError, AtlasErrorCode};

/// Kind of a non-fatal integrity warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A required observation field is empty.
    MissingField,
    /// The observation is dated outside the collection window.
    OutsideCollectionWindow,
    /// A known-breeding species reported a code the matrix does not list.
    UnknownCodeForBreeder,
    /// A species on the breeding list has no expectation-matrix rows.
    BreederMissingFromMatrix,
    /// A known breeder ended a stage with a null tier.
    UnresolvedTier,
    /// The reported code is not on the code ladder.
    UnknownObservationCode,
}

/// A recoverable data-quality problem. Processing continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityWarning {
    pub kind: WarningKind,
    /// Offending observation, when the warning is record-level.
    pub observation_id: Option<String>,
    pub species: String,
    pub message: String,
}

impl IntegrityWarning {
    pub fn record(kind: WarningKind, id: &str, species: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            observation_id: Some(id.to_string()),
            species: species.to_string(),
            message: message.into(),
        }
    }

    pub fn species(kind: WarningKind, species: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            observation_id: None,
            species: species.to_string(),
            message: message.into(),
        }
    }
}

/// A fatal fault that stops processing for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesFault {
    pub species: String,
    /// Pipeline stage that raised the fault.
    pub stage: String,
    /// Stable fault code from [`AtlasErrorCode`].
    pub code: String,
    pub message: String,
}

impl SpeciesFault {
    pub fn new(species: &str, stage: &str, error: &AtlasError) -> Self {
        Self {
            species: species.to_string(),
            stage: stage.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}
