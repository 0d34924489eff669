//! Grouped code escalation.
//!
//! Within one species × block × year group, the highest working code among
//! confident, expected records is the group's confirmed evidence. When it
//! ranks strictly above the threshold code, uncertain records holding a
//! probable code in core breeding, or a confirmed code in pre/post-breeding,
//! are lifted to confident.
//!
//! Groups are planned independently (optionally in parallel) and the
//! resulting index set is applied afterwards.

use atlas_core::{
    BreedingCode, CodeLadder, CodeTier, ConfidenceTier, ExpectationTier, Observation, Phase,
};
use rayon::prelude::*;
use tracing::debug;

use crate::grouper::RecordGrouper;

/// Escalation settings bound to one ladder.
#[derive(Debug, Clone, Copy)]
pub struct Escalation<'a> {
    ladder: &'a CodeLadder,
    threshold_rank: usize,
}

impl<'a> Escalation<'a> {
    /// `None` when the threshold code is not on the ladder.
    pub fn new(ladder: &'a CodeLadder, threshold: &BreedingCode) -> Option<Self> {
        Some(Self {
            ladder,
            threshold_rank: ladder.rank(threshold)?,
        })
    }

    /// Highest working code among confident, expected members.
    pub fn highest_confirmed_code<'r, I>(&self, members: I) -> Option<&'r BreedingCode>
    where
        I: IntoIterator<Item = &'r Observation>,
    {
        self.ladder.max_of(
            members
                .into_iter()
                .filter(|o| {
                    o.confidence_tier == Some(ConfidenceTier::Confident)
                        && o.expectation_tier == Some(ExpectationTier::Expected)
                })
                .map(Observation::working_code),
        )
    }

    /// The group maximum clears the threshold.
    pub fn exceeds_threshold(&self, code: &BreedingCode) -> bool {
        self.ladder.rank(code).is_some_and(|r| r > self.threshold_rank)
    }

    /// An uncertain record the group's evidence may lift.
    pub fn is_candidate(&self, obs: &Observation) -> bool {
        if obs.confidence_tier != Some(ConfidenceTier::Uncertain) {
            return false;
        }
        match (obs.phase, self.ladder.tier(obs.working_code())) {
            (Some(Phase::Breeding), Some(CodeTier::Probable)) => true,
            (Some(Phase::Pre | Phase::Post), Some(CodeTier::Confirmed)) => true,
            _ => false,
        }
    }

    /// Indices of records to escalate.
    pub fn plan(&self, records: &[Observation], parallel: bool) -> Vec<usize> {
        let groups: Vec<Vec<usize>> =
            RecordGrouper::group(records, |o| o.confidence_tier.map(|_| RecordGrouper::site_year(o)))
                .into_values()
                .collect();

        let plan_group = |members: &Vec<usize>| -> Vec<usize> {
            let Some(highest) = self.highest_confirmed_code(members.iter().map(|i| &records[*i]))
            else {
                return Vec::new();
            };
            if !self.exceeds_threshold(highest) {
                return Vec::new();
            }
            members
                .iter()
                .copied()
                .filter(|i| self.is_candidate(&records[*i]))
                .collect()
        };

        let mut planned: Vec<usize> = if parallel {
            groups.par_iter().flat_map_iter(plan_group).collect()
        } else {
            groups.iter().flat_map(plan_group).collect()
        };
        planned.sort_unstable();
        planned
    }

    /// Plan and apply. Returns the number of records escalated.
    pub fn apply(&self, records: &mut [Observation], parallel: bool) -> usize {
        let planned = self.plan(records, parallel);
        let mut escalated = 0;
        for idx in planned {
            let obs = &mut records[idx];
            if obs.advance_confidence(ConfidenceTier::Confident) {
                debug!(id = %obs.id, species = %obs.species, block = %obs.block, "escalated to confident");
                escalated += 1;
            }
        }
        escalated
    }
}
