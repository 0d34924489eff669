//! CodeClassifier: expectation tier and provisional code per observation.

use atlas_core::errors::ClassificationError;
use atlas_core::{
    AdjustmentKind, ExpectationTier, IntegrityWarning, Observation, ResolutionReason, WarningKind,
};
use atlas_reference::{ExpectationLookup, ReferenceTables};
use tracing::debug;

/// What classification decided for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Expected or plausible; the resolved code is the reported code.
    Tiered(ExpectationTier),
    /// Improbable, corrected through the adjustment map and promoted.
    Corrected,
    /// Species absent from the matrix; resolved to the no-code sentinel.
    NonBreeding,
    /// Listed species with a code the matrix has no cell for. Derived
    /// fields stay unset.
    Unclassified(IntegrityWarning),
}

impl Classification {
    /// The warning to surface, if any.
    pub fn warning(&self) -> Option<&IntegrityWarning> {
        match self {
            Self::Unclassified(w) => Some(w),
            _ => None,
        }
    }
}

/// Assigns expectation tiers from the reference matrix.
#[derive(Debug, Clone, Copy)]
pub struct CodeClassifier<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> CodeClassifier<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Classify one record in place.
    ///
    /// A missing improbable adjustment is fatal: the record would otherwise
    /// stay improbable with no corrected code.
    pub fn classify(&self, obs: &mut Observation) -> Result<Classification, ClassificationError> {
        let code = obs.reported_code.clone();
        match self.tables.expectations().lookup(&obs.species, &code) {
            ExpectationLookup::NonBreeding => {
                obs.resolve(self.tables.ladder().no_code().clone(), ResolutionReason::NotLikely)?;
                Ok(Classification::NonBreeding)
            }
            ExpectationLookup::UnknownCode => {
                let kind = if self.tables.ladder().contains(&code) {
                    WarningKind::UnknownCodeForBreeder
                } else {
                    WarningKind::UnknownObservationCode
                };
                Ok(Classification::Unclassified(IntegrityWarning::record(
                    kind,
                    &obs.id,
                    &obs.species,
                    format!("code {code} has no expectation for {}", obs.species),
                )))
            }
            ExpectationLookup::Tier(ExpectationTier::Improbable) => {
                let adjustment = self
                    .tables
                    .adjustments()
                    .get(AdjustmentKind::Improbable, &obs.species, &code)
                    .ok_or_else(|| ClassificationError::MissingAdjustment {
                        species: obs.species.clone(),
                        code: code.to_string(),
                        kind: AdjustmentKind::Improbable,
                    })?;
                obs.set_expectation(ExpectationTier::Improbable)?;
                obs.resolve(adjustment.code.clone(), adjustment.reason.clone())?;
                obs.promote_expectation()?;
                debug!(
                    id = %obs.id,
                    species = %obs.species,
                    from = %code,
                    to = %adjustment.code,
                    "improbable code corrected"
                );
                Ok(Classification::Corrected)
            }
            ExpectationLookup::Tier(tier) => {
                obs.set_expectation(tier)?;
                obs.carry_reported_code();
                Ok(Classification::Tiered(tier))
            }
        }
    }
}
