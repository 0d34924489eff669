//! The manual-review queue.

use atlas_core::{BreedingCode, ConfidenceTier, ExpectationTier, Observation, Phase};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why a record needs a human decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewCause {
    PlausibleWithEvidence,
    UncertainWithEvidence,
}

/// A record routed to review, with the context a reviewer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub id: String,
    pub species: String,
    pub region: String,
    pub block: String,
    pub date: NaiveDate,
    pub reported_code: BreedingCode,
    pub phase: Option<Phase>,
    pub expected_here: Option<bool>,
    pub expectation_tier: Option<ExpectationTier>,
    pub confidence_tier: Option<ConfidenceTier>,
    pub cause: ReviewCause,
}

impl ReviewItem {
    pub fn new(obs: &Observation, cause: ReviewCause) -> Self {
        Self {
            id: obs.id.clone(),
            species: obs.species.clone(),
            region: obs.region.clone(),
            block: obs.block.clone(),
            date: obs.date,
            reported_code: obs.reported_code.clone(),
            phase: obs.phase,
            expected_here: obs.expected_here,
            expectation_tier: obs.expectation_tier,
            confidence_tier: obs.confidence_tier,
            cause,
        }
    }
}
