//! Species quarantine after fatal faults.

use atlas_core::types::collections::FxHashSet;
use atlas_core::{Observation, SpeciesFault};
use tracing::error;

/// Species withdrawn from the run and the faults that withdrew them.
#[derive(Debug, Default)]
pub struct Quarantine {
    species: FxHashSet<String>,
    faults: Vec<SpeciesFault>,
}

impl Quarantine {
    /// Quarantine the fault's species. Identical faults are kept once.
    pub fn add(&mut self, fault: SpeciesFault) {
        self.species.insert(fault.species.clone());
        if !self.faults.contains(&fault) {
            error!(
                species = %fault.species,
                stage = %fault.stage,
                code = %fault.code,
                "{}",
                fault.message
            );
            self.faults.push(fault);
        }
    }

    pub fn extend(&mut self, faults: impl IntoIterator<Item = SpeciesFault>) {
        for fault in faults {
            self.add(fault);
        }
    }

    pub fn contains(&self, species: &str) -> bool {
        self.species.contains(species)
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Clear derived fields on every record of a quarantined species and
    /// mark it ineligible. Returns the number of records withdrawn.
    pub fn apply(&self, records: &mut [Observation], eligible: &mut [bool]) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut withdrawn = 0;
        for (obs, ok) in records.iter_mut().zip(eligible.iter_mut()) {
            if self.contains(&obs.species) {
                obs.clear_derived();
                if *ok {
                    *ok = false;
                    withdrawn += 1;
                }
            }
        }
        withdrawn
    }

    pub fn faults(&self) -> &[SpeciesFault] {
        &self.faults
    }

    pub fn into_faults(self) -> Vec<SpeciesFault> {
        self.faults
    }
}
