//! Illegal derived-field transitions.

use super::error_code::{self, AtlasErrorCode};

/// A stage tried to move an observation backwards or re-open it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Observation {id}: {field} cannot move from {from} to {to}")]
    Illegal {
        id: String,
        field: &'static str,
        from: String,
        to: String,
    },

    #[error("Observation {id} is already resolved ({reason})")]
    AlreadyResolved { id: String, reason: String },

    #[error("Observation {id} has no resolution to revise")]
    NotResolved { id: String },
}

impl AtlasErrorCode for TransitionError {
    fn error_code(&self) -> &'static str {
        error_code::TRANSITION_ERROR
    }
}
