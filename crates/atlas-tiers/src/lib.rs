//! # atlas-tiers
//!
//! Assigns each observation a confidence tier (confident, uncertain,
//! unlikely) from its phase, whether the species is expected at the
//! location, and the severity tier of its working code.
//!
//! After per-record evaluation, two grouped passes run:
//! - escalation, per species × block × year, lifts uncertain records when
//!   the group already holds confident evidence above the threshold code;
//! - colony discovery, per species × block, flags new colonies for
//!   colonial species and re-evaluates the block's records.

pub mod colony;
pub mod escalation;
pub mod evaluator;
pub mod grouper;
pub mod rules;

pub use colony::ColonyDiscovery;
pub use escalation::Escalation;
pub use evaluator::{TierEvaluator, TierReport};
pub use rules::{HereCondition, RuleInput, RuleTable, TierRule};
