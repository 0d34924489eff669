//! Colony discovery for colonial species.

use atlas_core::{CodeTier, ConfidenceTier, Observation};
use atlas_reference::ReferenceTables;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grouper::RecordGrouper;

/// A block newly found to hold a colony, as of its first confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColonyDiscovery {
    pub species: String,
    pub block: String,
    pub first_confirmed: NaiveDate,
    /// The record that confirmed the colony.
    pub observation_id: String,
}

/// Confident record with a confirmed-tier working code, for a colonial
/// species at a block not yet flagged as a colony.
fn qualifies(tables: &ReferenceTables, obs: &Observation) -> bool {
    obs.confidence_tier == Some(ConfidenceTier::Confident)
        && tables.ladder().tier(obs.working_code()) == Some(CodeTier::Confirmed)
        && tables.is_colonial(&obs.species)
        && !tables.locations().is_colony(&obs.species, &obs.block)
}

/// New colonies, one per species × block, sorted by species then block.
///
/// The earliest qualifying record wins; ties on date go to the smaller
/// identifier, so the result does not depend on input order.
pub fn discover(
    tables: &ReferenceTables,
    records: &[Observation],
    parallel: bool,
) -> Vec<ColonyDiscovery> {
    let groups: Vec<Vec<usize>> = RecordGrouper::group(records, |o| {
        qualifies(tables, o).then(|| RecordGrouper::site(o))
    })
    .into_values()
    .collect();

    let first = |members: &Vec<usize>| -> Option<ColonyDiscovery> {
        let obs = members
            .iter()
            .map(|i| &records[*i])
            .min_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)))?;
        Some(ColonyDiscovery {
            species: obs.species.clone(),
            block: obs.block.clone(),
            first_confirmed: obs.date,
            observation_id: obs.id.clone(),
        })
    };

    let mut found: Vec<ColonyDiscovery> = if parallel {
        groups.par_iter().filter_map(first).collect()
    } else {
        groups.iter().filter_map(first).collect()
    };
    found.sort_by(|a, b| a.species.cmp(&b.species).then_with(|| a.block.cmp(&b.block)));
    found
}
