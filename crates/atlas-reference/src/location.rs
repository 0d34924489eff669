//! Historical location expectations and known colonies.

use atlas_core::errors::ReferenceError;
use atlas_core::types::collections::FxHashMap;

use crate::rows::{ColonyRow, RegionRow};

/// (species, region) → historically expected, and (species, block) → colony.
#[derive(Debug, Clone, Default)]
pub struct LocationExpectation {
    regions: FxHashMap<(String, String), bool>,
    colonies: FxHashMap<(String, String), bool>,
}

impl LocationExpectation {
    pub fn from_rows(regions: &[RegionRow], colonies: &[ColonyRow]) -> Result<Self, ReferenceError> {
        let mut table = Self::default();
        for row in regions {
            let key = (row.species.clone(), row.region.clone());
            if table.regions.insert(key, row.expected).is_some() {
                return Err(ReferenceError::DuplicateRow {
                    table: "region_expectations",
                    key: format!("{}/{}", row.species, row.region),
                });
            }
        }
        for row in colonies {
            let key = (row.species.clone(), row.block.clone());
            if table.colonies.insert(key, row.colony).is_some() {
                return Err(ReferenceError::DuplicateRow {
                    table: "colonies",
                    key: format!("{}/{}", row.species, row.block),
                });
            }
        }
        Ok(table)
    }

    /// Historically expected in the region. Missing rows read as `false`.
    pub fn expected_in_region(&self, species: &str, region: &str) -> bool {
        self.regions
            .get(&(species.to_string(), region.to_string()))
            .copied()
            .unwrap_or(false)
    }

    /// Known colony at the block. Missing rows read as `false`.
    pub fn is_colony(&self, species: &str, block: &str) -> bool {
        self.colonies
            .get(&(species.to_string(), block.to_string()))
            .copied()
            .unwrap_or(false)
    }

    /// `expectedHere`: region expectation OR colony at the block.
    pub fn expected_here(&self, species: &str, region: &str, block: &str) -> bool {
        self.expected_in_region(species, region) || self.is_colony(species, block)
    }
}
