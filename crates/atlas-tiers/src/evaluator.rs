//! TierEvaluator: per-record rule evaluation plus the grouped passes.

use atlas_core::config::AtlasConfig;
use atlas_core::errors::{AtlasError, ConfigError, TransitionError};
use atlas_core::{
    colony_span, escalation_span, tiers_span, BreedingCode, ConfidenceTier, Observation, Phase,
    SpeciesFault,
};
use atlas_reference::ReferenceTables;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::colony::{self, ColonyDiscovery};
use crate::escalation::Escalation;
use crate::rules::{RuleInput, RuleTable};

const STAGE: &str = "tiers";

/// Summary of one tier run.
#[derive(Debug, Clone, Default)]
pub struct TierReport {
    /// Records that received a confidence tier.
    pub evaluated: usize,
    /// Evaluable records no rule matched.
    pub unmatched: usize,
    pub escalated: usize,
    /// Records upgraded by colony re-evaluation.
    pub colony_upgrades: usize,
    pub colonies: Vec<ColonyDiscovery>,
    pub faults: Vec<SpeciesFault>,
}

enum RecordOutcome {
    Skipped,
    Rated,
    Unmatched,
    Fault(SpeciesFault),
}

/// Assigns confidence tiers.
#[derive(Debug, Clone)]
pub struct TierEvaluator<'a> {
    tables: &'a ReferenceTables,
    rules: RuleTable,
    threshold: BreedingCode,
    parallel: bool,
}

impl<'a> TierEvaluator<'a> {
    /// Build with the standard rule table. The escalation threshold must be
    /// a code on the ladder.
    pub fn new(tables: &'a ReferenceTables, config: &AtlasConfig) -> Result<Self, ConfigError> {
        let threshold = BreedingCode::new(&config.escalation.threshold_code);
        if !tables.ladder().contains(&threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "escalation.threshold_code".to_string(),
                message: format!("{threshold} is not on the code ladder"),
            });
        }
        Ok(Self {
            tables,
            rules: RuleTable::standard(&BreedingCode::new(&config.codes.flyover_code)),
            threshold,
            parallel: config.pipeline.parallel,
        })
    }

    /// Replace the rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    fn escalation(&self) -> Option<Escalation<'a>> {
        Escalation::new(self.tables.ladder(), &self.threshold)
    }

    /// A record has a phase and classification settled it.
    pub fn is_evaluable(obs: &Observation) -> bool {
        obs.phase.is_some() && (obs.expectation_tier.is_some() || obs.is_resolved())
    }

    /// The tier the rule table gives a record, without touching it.
    pub fn rate(&self, obs: &Observation, phase: Phase, expected_here: bool) -> Option<ConfidenceTier> {
        let code = obs.working_code();
        let input = RuleInput {
            species: &obs.species,
            phase,
            expected_here,
            code,
            code_tier: self.tables.ladder().tier(code)?,
        };
        self.rules.find_applicable_rule(&input).map(|r| r.result)
    }

    /// Evaluate one record in place. `Ok(None)` when the record has no
    /// phase or no rule matched.
    pub fn evaluate(&self, obs: &mut Observation) -> Result<Option<ConfidenceTier>, TransitionError> {
        let Some(phase) = obs.phase else {
            return Ok(None);
        };
        let expected_here =
            self.tables
                .locations()
                .expected_here(&obs.species, &obs.region, &obs.block);
        obs.expected_here = Some(expected_here);
        let Some(tier) = self.rate(obs, phase, expected_here) else {
            return Ok(None);
        };
        obs.set_confidence(tier)?;
        Ok(Some(tier))
    }

    fn evaluate_one(&self, obs: &mut Observation) -> RecordOutcome {
        if !Self::is_evaluable(obs) {
            return RecordOutcome::Skipped;
        }
        match self.evaluate(obs) {
            Ok(Some(_)) => RecordOutcome::Rated,
            Ok(None) => RecordOutcome::Unmatched,
            Err(e) => RecordOutcome::Fault(SpeciesFault::new(
                &obs.species,
                STAGE,
                &AtlasError::from(e),
            )),
        }
    }

    /// Evaluate every evaluable record.
    pub fn evaluate_all(&self, records: &mut [Observation]) -> TierReport {
        let outcomes: Vec<RecordOutcome> = if self.parallel {
            records.par_iter_mut().map(|o| self.evaluate_one(o)).collect()
        } else {
            records.iter_mut().map(|o| self.evaluate_one(o)).collect()
        };

        let mut report = TierReport::default();
        for outcome in outcomes {
            match outcome {
                RecordOutcome::Skipped => {}
                RecordOutcome::Rated => report.evaluated += 1,
                RecordOutcome::Unmatched => report.unmatched += 1,
                RecordOutcome::Fault(f) => report.faults.push(f),
            }
        }
        report
    }

    /// Run the escalation pass. Returns the number of records escalated.
    pub fn escalate(&self, records: &mut [Observation]) -> usize {
        let _span = escalation_span!(records.len()).entered();
        let escalated = self
            .escalation()
            .map_or(0, |e| e.apply(records, self.parallel));
        debug!(escalated, "escalation pass complete");
        escalated
    }

    /// Find new colonies and re-evaluate their blocks.
    pub fn discover_colonies(&self, records: &mut [Observation]) -> (Vec<ColonyDiscovery>, usize) {
        let _span = colony_span!(records.len()).entered();
        let found = colony::discover(self.tables, records, self.parallel);
        let mut upgrades = 0;
        for discovery in &found {
            info!(
                species = %discovery.species,
                block = %discovery.block,
                first_confirmed = %discovery.first_confirmed,
                "colony discovered"
            );
            upgrades += self.reevaluate_colony(records, discovery);
        }
        (found, upgrades)
    }

    /// Colony status makes the species expected at the block from the
    /// first confirmation on. Each record dated on or after it is re-rated
    /// and may only move up.
    fn reevaluate_colony(&self, records: &mut [Observation], discovery: &ColonyDiscovery) -> usize {
        let mut upgrades = 0;
        for obs in records.iter_mut().filter(|o| {
            o.species == discovery.species
                && o.block == discovery.block
                && o.date >= discovery.first_confirmed
                && Self::is_evaluable(o)
        }) {
            obs.expected_here = Some(true);
            let Some(phase) = obs.phase else { continue };
            if let Some(tier) = self.rate(obs, phase, true) {
                if obs.advance_confidence(tier) {
                    upgrades += 1;
                }
            }
        }
        upgrades
    }

    /// Full tier stage: evaluation, escalation, colony discovery, and a
    /// second escalation pass when colonies changed any tier.
    pub fn run(&self, records: &mut [Observation]) -> TierReport {
        let _span = tiers_span!(records.len()).entered();

        let mut report = self.evaluate_all(records);
        report.escalated = self.escalate(records);

        let (colonies, upgrades) = self.discover_colonies(records);
        report.colonies = colonies;
        report.colony_upgrades = upgrades;
        if upgrades > 0 {
            report.escalated += self.escalate(records);
        }

        info!(
            evaluated = report.evaluated,
            unmatched = report.unmatched,
            escalated = report.escalated,
            colonies = report.colonies.len(),
            faults = report.faults.len(),
            "tier evaluation complete"
        );
        report
    }
}
