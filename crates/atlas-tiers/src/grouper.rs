//! Keyed bucketing of record indices.

use std::hash::Hash;

use atlas_core::types::collections::FxHashMap;
use atlas_core::Observation;

/// Species × block × year.
pub type SiteYearKey = (String, String, i32);

/// Species × block, across all years.
pub type SiteKey = (String, String);

/// Buckets record indices by key. Records mapped to `None` are left out.
pub struct RecordGrouper;

impl RecordGrouper {
    pub fn group<K, F>(records: &[Observation], key: F) -> FxHashMap<K, Vec<usize>>
    where
        K: Eq + Hash,
        F: Fn(&Observation) -> Option<K>,
    {
        let mut groups: FxHashMap<K, Vec<usize>> = FxHashMap::default();
        for (idx, obs) in records.iter().enumerate() {
            if let Some(k) = key(obs) {
                groups.entry(k).or_default().push(idx);
            }
        }
        groups
    }

    pub fn site_year(obs: &Observation) -> SiteYearKey {
        (obs.species.clone(), obs.block.clone(), obs.year())
    }

    pub fn site(obs: &Observation) -> SiteKey {
        (obs.species.clone(), obs.block.clone())
    }
}
