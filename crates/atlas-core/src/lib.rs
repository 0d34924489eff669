//! # atlas-core
//!
//! Foundation crate for the breeding atlas engine.
//! Defines breeding codes and the code ladder, the three tier vocabularies,
//! the observation record and its forward-only transitions, leap-adjusted
//! days, errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod codes;
pub mod config;
pub mod constants;
pub mod day;
pub mod errors;
pub mod integrity;
pub mod observation;
pub mod reason;
pub mod tiers;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use codes::{BreedingCategory, BreedingCode, CodeLadder, CodeTier};
pub use config::AtlasConfig;
pub use day::{DayOfYear, MonthDay};
pub use errors::{AtlasError, AtlasErrorCode, AtlasResult};
pub use integrity::{IntegrityWarning, SpeciesFault, WarningKind};
pub use observation::Observation;
pub use reason::ResolutionReason;
pub use tiers::{AdjustmentKind, ConfidenceTier, ExpectationTier, Phase};
