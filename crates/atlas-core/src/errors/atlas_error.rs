//! Top-level error aggregating every subsystem.

use super::error_code::AtlasErrorCode;
use super::{
    AdjudicationError, CalendarError, ClassificationError, ConfigError, ReferenceError,
    TransitionError,
};

/// Any error the engine can raise. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("Reference error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Adjudication error: {0}")]
    Adjudication(#[from] AdjudicationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),
}

impl AtlasErrorCode for AtlasError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Reference(e) => e.error_code(),
            Self::Calendar(e) => e.error_code(),
            Self::Classification(e) => e.error_code(),
            Self::Adjudication(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Transition(e) => e.error_code(),
        }
    }
}

pub type AtlasResult<T> = Result<T, AtlasError>;
