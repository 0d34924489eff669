//! Season-calendar partition faults.

use super::error_code::{self, AtlasErrorCode};

/// Faults in a species' five-phase partition. Fatal for that species.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("Season calendar for {species} does not partition 1..=366 ({covered} days covered once): {intervals}")]
    PartitionFault {
        species: String,
        covered: usize,
        intervals: String,
    },

    #[error("Season calendar for {species} has no populated phases")]
    EmptyCalendar { species: String },
}

impl CalendarError {
    /// The species whose calendar is faulty.
    pub fn species(&self) -> &str {
        match self {
            Self::PartitionFault { species, .. } | Self::EmptyCalendar { species } => species,
        }
    }
}

impl AtlasErrorCode for CalendarError {
    fn error_code(&self) -> &'static str {
        error_code::PARTITION_FAULT
    }
}
