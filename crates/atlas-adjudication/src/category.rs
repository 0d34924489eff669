//! Breeding category from the resolved code.

use atlas_core::errors::AdjudicationError;
use atlas_core::{BreedingCategory, CodeLadder, Observation};

/// Set the record's category from its resolved code. Records with no
/// resolved code keep no category. A code off the ladder is a fault.
pub fn recompute_category(
    ladder: &CodeLadder,
    obs: &mut Observation,
) -> Result<Option<BreedingCategory>, AdjudicationError> {
    let Some(code) = &obs.resolved_code else {
        obs.breeding_category = None;
        return Ok(None);
    };
    let category = ladder
        .category(code)
        .ok_or_else(|| AdjudicationError::UncategorizedCode {
            id: obs.id.clone(),
            species: obs.species.clone(),
            code: code.to_string(),
        })?;
    obs.breeding_category = Some(category);
    Ok(Some(category))
}
