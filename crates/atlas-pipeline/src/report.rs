//! The run report.

use atlas_adjudication::ReviewItem;
use atlas_core::types::collections::BTreeMap;
use atlas_core::{IntegrityWarning, SpeciesFault, WarningKind};
use atlas_tiers::ColonyDiscovery;
use serde::{Deserialize, Serialize};

/// Outcome of one pipeline run over a batch.
///
/// `auto_resolved`, `needs_review`, and `untouched` partition the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Engine version that produced the report.
    pub engine_version: String,
    pub total: usize,
    /// Records carrying a resolution reason.
    pub auto_resolved: usize,
    pub needs_review: usize,
    pub untouched: usize,
    pub escalated: usize,
    /// Sorted by record identifier.
    pub review_queue: Vec<ReviewItem>,
    pub colonies: Vec<ColonyDiscovery>,
    pub warnings: Vec<IntegrityWarning>,
    pub faults: Vec<SpeciesFault>,
    /// No faults, and no warnings when warnings are configured to fail.
    pub succeeded: bool,
}

impl PipelineReport {
    /// Neither warnings nor faults.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.faults.is_empty()
    }

    pub fn warning_count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    /// Fault counts keyed by stable fault code.
    pub fn faults_by_code(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for fault in &self.faults {
            *counts.entry(fault.code.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Species withdrawn from the run, sorted.
    pub fn quarantined_species(&self) -> Vec<&str> {
        let mut species: Vec<&str> = self.faults.iter().map(|f| f.species.as_str()).collect();
        species.sort_unstable();
        species.dedup();
        species
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
