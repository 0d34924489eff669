//! Final adjudication errors.

use super::error_code::{self, AtlasErrorCode};
use super::{ClassificationError, TransitionError};

/// Errors raised while finalizing codes and categories.
#[derive(Debug, thiserror::Error)]
pub enum AdjudicationError {
    #[error("Observation {id} ({species}) resolved to code {code} with no breeding category")]
    UncategorizedCode {
        id: String,
        species: String,
        code: String,
    },

    #[error("Adjustment lookup failed: {0}")]
    Lookup(#[from] ClassificationError),

    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),
}

impl AtlasErrorCode for AdjudicationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UncategorizedCode { .. } => error_code::UNCATEGORIZED_CODE,
            Self::Lookup(e) => e.error_code(),
            Self::Transition(e) => e.error_code(),
        }
    }
}
