//! Pipeline: stage orchestration over one batch.

use atlas_adjudication::Adjudicator;
use atlas_calendar::SeasonCalendar;
use atlas_classifier::{breeders_missing_from_matrix, Classification, CodeClassifier};
use atlas_core::constants::VERSION;
use atlas_core::errors::{AtlasError, AtlasResult, ConfigError};
use atlas_core::types::collections::FxHashSet;
use atlas_core::{
    calendar_span, classify_span, AtlasConfig, BreedingCode, IntegrityWarning, Observation,
    SpeciesFault, WarningKind,
};
use atlas_reference::ReferenceTables;
use atlas_tiers::TierEvaluator;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::quarantine::Quarantine;
use crate::report::PipelineReport;
use crate::screening;

fn log_warning(w: &IntegrityWarning) {
    warn!(kind = ?w.kind, id = ?w.observation_id, species = %w.species, "{}", w.message);
}

enum StageEvent {
    Warning(IntegrityWarning),
    Fault(SpeciesFault),
}

/// The configured engine, bound to one set of reference tables.
pub struct Pipeline<'a> {
    tables: &'a ReferenceTables,
    config: AtlasConfig,
    calendar: SeasonCalendar,
    calendar_faults: Vec<SpeciesFault>,
    evaluator: TierEvaluator<'a>,
}

impl<'a> Pipeline<'a> {
    /// Validate the config against the tables and derive the season
    /// calendars. Calendar faults are carried into every run's report.
    pub fn new(tables: &'a ReferenceTables, config: AtlasConfig) -> AtlasResult<Self> {
        config.validate()?;
        let no_code = BreedingCode::new(&config.codes.no_code);
        if &no_code != tables.ladder().no_code() {
            return Err(ConfigError::ValidationFailed {
                field: "codes.no_code".to_string(),
                message: format!(
                    "{no_code} does not match the ladder's sentinel {}",
                    tables.ladder().no_code()
                ),
            }
            .into());
        }
        let evaluator = TierEvaluator::new(tables, &config)?;
        let (calendar, faults) = SeasonCalendar::build(tables);
        let calendar_faults = faults
            .into_iter()
            .map(|e| {
                let species = e.species().to_string();
                SpeciesFault::new(&species, "calendar", &AtlasError::from(e))
            })
            .collect();

        Ok(Self {
            tables,
            config,
            calendar,
            calendar_faults,
            evaluator,
        })
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    pub fn calendar(&self) -> &SeasonCalendar {
        &self.calendar
    }

    /// Apply `step` to every eligible record, in parallel when configured.
    fn for_each_eligible<F>(
        &self,
        records: &mut [Observation],
        eligible: &[bool],
        step: F,
    ) -> Vec<StageEvent>
    where
        F: Fn(&mut Observation) -> Option<StageEvent> + Sync + Send,
    {
        if self.config.pipeline.parallel {
            records
                .par_iter_mut()
                .zip(eligible.par_iter())
                .filter(|(_, ok)| **ok)
                .filter_map(|(obs, _)| step(obs))
                .collect()
        } else {
            records
                .iter_mut()
                .zip(eligible.iter())
                .filter(|(_, ok)| **ok)
                .filter_map(|(obs, _)| step(obs))
                .collect()
        }
    }

    fn absorb(
        events: Vec<StageEvent>,
        warnings: &mut Vec<IntegrityWarning>,
        quarantine: &mut Quarantine,
    ) {
        for event in events {
            match event {
                StageEvent::Warning(w) => {
                    log_warning(&w);
                    warnings.push(w);
                }
                StageEvent::Fault(f) => quarantine.add(f),
            }
        }
    }

    /// Run every stage over `records` in place.
    pub fn run(&self, records: &mut [Observation]) -> PipelineReport {
        let mut quarantine = Quarantine::default();
        quarantine.extend(self.calendar_faults.iter().cloned());

        let mut warnings = breeders_missing_from_matrix(self.tables);
        let (mut eligible, screened) = screening::screen(records, &self.config.window);
        screened.iter().for_each(log_warning);
        warnings.extend(screened);
        quarantine.apply(records, &mut eligible);

        {
            let _span = calendar_span!(records.len()).entered();
            let calendar = &self.calendar;
            let events = self.for_each_eligible(records, &eligible, |obs| {
                calendar.assign_phase(obs).err().map(|e| {
                    StageEvent::Fault(SpeciesFault::new(&obs.species, "calendar", &AtlasError::from(e)))
                })
            });
            Self::absorb(events, &mut warnings, &mut quarantine);
            quarantine.apply(records, &mut eligible);
        }

        {
            let _span = classify_span!(records.len()).entered();
            let classifier = CodeClassifier::new(self.tables);
            let events = self.for_each_eligible(records, &eligible, |obs| match classifier.classify(obs) {
                Ok(Classification::Unclassified(w)) => Some(StageEvent::Warning(w)),
                Ok(_) => None,
                Err(e) => Some(StageEvent::Fault(SpeciesFault::new(
                    &obs.species,
                    "classify",
                    &AtlasError::from(e),
                ))),
            });
            Self::absorb(events, &mut warnings, &mut quarantine);
            quarantine.apply(records, &mut eligible);
        }

        let tiers = self.evaluator.run(records);
        quarantine.extend(tiers.faults);
        quarantine.apply(records, &mut eligible);

        let adjudication = Adjudicator::new(self.tables).run(records, self.config.pipeline.parallel);
        quarantine.extend(adjudication.faults);
        quarantine.apply(records, &mut eligible);

        let mut unresolved = self.unresolved_warnings(records, &eligible, &warnings);
        unresolved.iter().for_each(log_warning);
        warnings.append(&mut unresolved);

        let review_queue: Vec<_> = adjudication
            .review_queue
            .into_iter()
            .filter(|item| !quarantine.contains(&item.species))
            .collect();
        let colonies: Vec<_> = tiers
            .colonies
            .into_iter()
            .filter(|c| !quarantine.contains(&c.species))
            .collect();

        let auto_resolved = records.iter().filter(|o| o.is_resolved()).count();
        let needs_review = review_queue.len();
        let faults = quarantine.into_faults();
        let succeeded =
            faults.is_empty() && (!self.config.pipeline.fail_on_warnings || warnings.is_empty());

        let report = PipelineReport {
            engine_version: VERSION.to_string(),
            total: records.len(),
            auto_resolved,
            needs_review,
            untouched: records.len() - auto_resolved - needs_review,
            escalated: tiers.escalated,
            review_queue,
            colonies,
            warnings,
            faults,
            succeeded,
        };
        info!(
            total = report.total,
            auto_resolved = report.auto_resolved,
            needs_review = report.needs_review,
            untouched = report.untouched,
            colonies = report.colonies.len(),
            warnings = report.warnings.len(),
            faults = report.faults.len(),
            "pipeline run complete"
        );
        report
    }

    /// Known breeders listed in the matrix must end the run with every tier
    /// set. Records already warned about are not warned twice.
    fn unresolved_warnings(
        &self,
        records: &[Observation],
        eligible: &[bool],
        existing: &[IntegrityWarning],
    ) -> Vec<IntegrityWarning> {
        let warned: FxHashSet<&str> = existing
            .iter()
            .filter_map(|w| w.observation_id.as_deref())
            .collect();

        records
            .iter()
            .zip(eligible)
            .filter(|(obs, ok)| {
                **ok && self.tables.is_known_breeder(&obs.species)
                    && self.tables.expectations().lists_species(&obs.species)
                    && !warned.contains(obs.id.as_str())
            })
            .filter_map(|(obs, _)| {
                let mut unset = Vec::new();
                if obs.expectation_tier.is_none() {
                    unset.push("expectation_tier");
                }
                if obs.phase.is_none() {
                    unset.push("phase");
                }
                if obs.confidence_tier.is_none() {
                    unset.push("confidence_tier");
                }
                (!unset.is_empty()).then(|| {
                    IntegrityWarning::record(
                        WarningKind::UnresolvedTier,
                        &obs.id,
                        &obs.species,
                        format!("unset after all stages: {}", unset.join(", ")),
                    )
                })
            })
            .collect()
    }
}
