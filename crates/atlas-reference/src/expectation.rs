//! (species, reported code) → expectation tier.

use atlas_core::errors::ReferenceError;
use atlas_core::types::collections::FxHashMap;
use atlas_core::{BreedingCode, CodeLadder, ExpectationTier};

use crate::rows::ExpectationRow;

/// Outcome of a matrix lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectationLookup {
    /// Species absent from the matrix: treated as non-breeding.
    NonBreeding,
    /// Species listed, but not with this code.
    UnknownCode,
    Tier(ExpectationTier),
}

/// Expected-code matrix keyed by species, then code.
#[derive(Debug, Clone, Default)]
pub struct ExpectationMatrix {
    by_species: FxHashMap<String, FxHashMap<BreedingCode, ExpectationTier>>,
}

impl ExpectationMatrix {
    pub fn from_rows(rows: &[ExpectationRow], ladder: &CodeLadder) -> Result<Self, ReferenceError> {
        let mut by_species: FxHashMap<String, FxHashMap<BreedingCode, ExpectationTier>> =
            FxHashMap::default();
        for row in rows {
            if !ladder.contains(&row.code) {
                return Err(ReferenceError::UnknownCode {
                    table: "expectations",
                    code: row.code.to_string(),
                });
            }
            let tier = ExpectationTier::from_matrix_value(row.tier).ok_or_else(|| {
                ReferenceError::InvalidExpectation {
                    species: row.species.clone(),
                    code: row.code.to_string(),
                    value: row.tier,
                }
            })?;
            let codes = by_species.entry(row.species.clone()).or_default();
            if codes.insert(row.code.clone(), tier).is_some() {
                return Err(ReferenceError::DuplicateRow {
                    table: "expectations",
                    key: format!("{}/{}", row.species, row.code),
                });
            }
        }
        Ok(Self { by_species })
    }

    pub fn lookup(&self, species: &str, code: &BreedingCode) -> ExpectationLookup {
        match self.by_species.get(species) {
            None => ExpectationLookup::NonBreeding,
            Some(codes) => codes
                .get(code)
                .map_or(ExpectationLookup::UnknownCode, |t| ExpectationLookup::Tier(*t)),
        }
    }

    pub fn lists_species(&self, species: &str) -> bool {
        self.by_species.contains_key(species)
    }

    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.by_species.keys().map(String::as_str)
    }
}
