//! Code classification errors.

use super::error_code::{self, AtlasErrorCode};
use super::TransitionError;
use crate::tiers::AdjustmentKind;

/// Errors raised while classifying reported codes.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("No {kind} code adjustment for {species}/{code}")]
    MissingAdjustment {
        species: String,
        code: String,
        kind: AdjustmentKind,
    },

    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),
}

impl AtlasErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAdjustment { .. } => error_code::LOOKUP_MISS,
            Self::Transition(e) => e.error_code(),
        }
    }
}
