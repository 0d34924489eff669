//! Adjudicator: the final resolution rules and review routing.

use atlas_core::errors::{AdjudicationError, AtlasError, ClassificationError};
use atlas_core::{
    adjudicate_span, AdjustmentKind, ConfidenceTier, ExpectationTier, Observation, Phase,
    ResolutionReason, SpeciesFault,
};
use atlas_reference::ReferenceTables;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::category::recompute_category;
use crate::review::{ReviewCause, ReviewItem};

const STAGE: &str = "adjudicate";

/// What adjudication did with one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No rule applied.
    Untouched,
    /// Resolved in this pass.
    AutoResolved,
    NeedsReview(ReviewCause),
}

/// Summary of one adjudication pass.
#[derive(Debug, Clone, Default)]
pub struct AdjudicationReport {
    pub auto_resolved: usize,
    pub needs_review: usize,
    pub untouched: usize,
    /// Sorted by record identifier.
    pub review_queue: Vec<ReviewItem>,
    pub faults: Vec<SpeciesFault>,
}

enum RecordOutcome {
    Untouched,
    AutoResolved,
    Review(ReviewItem),
    Fault(SpeciesFault),
}

/// Applies the final resolution rules.
#[derive(Debug, Clone, Copy)]
pub struct Adjudicator<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> Adjudicator<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Adjudicate one record in place and recompute its category.
    ///
    /// Running it again on its own output changes nothing.
    pub fn adjudicate(&self, obs: &mut Observation) -> Result<Verdict, AdjudicationError> {
        let verdict = self.resolve(obs)?;
        recompute_category(self.tables.ladder(), obs)?;
        Ok(verdict)
    }

    fn resolve(&self, obs: &mut Observation) -> Result<Verdict, AdjudicationError> {
        // Unlikely wins over an earlier correction: the corrected code is
        // discarded too, under the reason already recorded.
        if obs.confidence_tier == Some(ConfidenceTier::Unlikely) {
            let no_code = self.tables.ladder().no_code().clone();
            if obs.is_resolved() {
                obs.set_resolved_code(no_code)?;
            } else {
                let reason = unlikely_reason(obs.phase, obs.expected_here.unwrap_or(false));
                obs.resolve(no_code, reason)?;
            }
            obs.set_confidence(ConfidenceTier::Confident)?;
            return Ok(Verdict::AutoResolved);
        }

        if obs.is_resolved() {
            return Ok(Verdict::Untouched);
        }

        if obs.expectation_tier == Some(ExpectationTier::Plausible) {
            if obs.has_supporting_evidence() {
                return Ok(Verdict::NeedsReview(ReviewCause::PlausibleWithEvidence));
            }
            let adjustment = self
                .tables
                .adjustments()
                .get(AdjustmentKind::PlausibleWithoutEvidence, &obs.species, &obs.reported_code)
                .ok_or_else(|| ClassificationError::MissingAdjustment {
                    species: obs.species.clone(),
                    code: obs.reported_code.to_string(),
                    kind: AdjustmentKind::PlausibleWithoutEvidence,
                })?;
            obs.resolve(adjustment.code.clone(), adjustment.reason.clone())?;
            obs.promote_expectation()?;
            return Ok(Verdict::AutoResolved);
        }

        if obs.confidence_tier == Some(ConfidenceTier::Uncertain) {
            if obs.has_supporting_evidence() {
                return Ok(Verdict::NeedsReview(ReviewCause::UncertainWithEvidence));
            }
            obs.resolve(
                self.tables.ladder().no_code().clone(),
                ResolutionReason::InsufficientEvidence,
            )?;
            obs.set_confidence(ConfidenceTier::Confident)?;
            return Ok(Verdict::AutoResolved);
        }

        Ok(Verdict::Untouched)
    }

    /// Adjudicate a batch. Review items come back sorted by identifier.
    pub fn run(&self, records: &mut [Observation], parallel: bool) -> AdjudicationReport {
        let _span = adjudicate_span!(records.len()).entered();

        let step = |obs: &mut Observation| match self.adjudicate(obs) {
            Ok(Verdict::Untouched) => RecordOutcome::Untouched,
            Ok(Verdict::AutoResolved) => {
                debug!(id = %obs.id, reason = ?obs.resolution_reason, "auto-resolved");
                RecordOutcome::AutoResolved
            }
            Ok(Verdict::NeedsReview(cause)) => RecordOutcome::Review(ReviewItem::new(obs, cause)),
            Err(e) => RecordOutcome::Fault(SpeciesFault::new(&obs.species, STAGE, &AtlasError::from(e))),
        };
        let outcomes: Vec<RecordOutcome> = if parallel {
            records.par_iter_mut().map(step).collect()
        } else {
            records.iter_mut().map(step).collect()
        };

        let mut report = AdjudicationReport::default();
        for outcome in outcomes {
            match outcome {
                RecordOutcome::Untouched => report.untouched += 1,
                RecordOutcome::AutoResolved => report.auto_resolved += 1,
                RecordOutcome::Review(item) => report.review_queue.push(item),
                RecordOutcome::Fault(fault) => report.faults.push(fault),
            }
        }
        report.review_queue.sort_by(|a, b| a.id.cmp(&b.id));
        report.needs_review = report.review_queue.len();

        info!(
            auto_resolved = report.auto_resolved,
            needs_review = report.needs_review,
            untouched = report.untouched,
            faults = report.faults.len(),
            "adjudication complete"
        );
        report
    }
}

/// Reason for discarding an unlikely record's code. Where the species is
/// expected the timing decides; elsewhere it is simply not likely.
fn unlikely_reason(phase: Option<Phase>, expected_here: bool) -> ResolutionReason {
    match phase {
        Some(p) if expected_here && p.precedes_breeding() => ResolutionReason::TooEarly,
        Some(p) if expected_here && p.follows_breeding() => ResolutionReason::TooLate,
        _ => ResolutionReason::NotLikely,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlikely_reason_branches_on_timing_only_where_expected() {
        assert_eq!(unlikely_reason(Some(Phase::Early), true), ResolutionReason::TooEarly);
        assert_eq!(unlikely_reason(Some(Phase::Pre), true), ResolutionReason::TooEarly);
        assert_eq!(unlikely_reason(Some(Phase::Post), true), ResolutionReason::TooLate);
        assert_eq!(unlikely_reason(Some(Phase::Late), true), ResolutionReason::TooLate);
        assert_eq!(unlikely_reason(Some(Phase::Early), false), ResolutionReason::NotLikely);
        assert_eq!(unlikely_reason(Some(Phase::Breeding), true), ResolutionReason::NotLikely);
    }
}
