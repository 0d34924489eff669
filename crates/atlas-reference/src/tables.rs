//! ReferenceTables: the immutable lookup set for one run.

use atlas_core::errors::ReferenceError;
use atlas_core::types::collections::{BTreeMap, FxHashSet};
use atlas_core::CodeLadder;
use tracing::{debug, info};

use crate::adjustment::CodeAdjustmentMap;
use crate::anchors::SeasonAnchors;
use crate::expectation::ExpectationMatrix;
use crate::location::LocationExpectation;
use crate::rows::ReferenceBundle;

/// All reference data, fully loaded before classification starts and shared
/// read-only across every stage.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    ladder: CodeLadder,
    breeding_species: FxHashSet<String>,
    colonial_species: FxHashSet<String>,
    expectations: ExpectationMatrix,
    anchors: BTreeMap<String, SeasonAnchors>,
    locations: LocationExpectation,
    adjustments: CodeAdjustmentMap,
}

impl ReferenceTables {
    /// Build and cross-check the tables from a row bundle.
    pub fn from_bundle(bundle: &ReferenceBundle) -> Result<Self, ReferenceError> {
        let ladder = match &bundle.ladder {
            Some(rows) => CodeLadder::from_tiers(
                &rows.no_code,
                &rows.possible,
                &rows.probable,
                &rows.confirmed,
            )?,
            None => CodeLadder::standard(),
        };

        let expectations = ExpectationMatrix::from_rows(&bundle.expectations, &ladder)?;
        let locations =
            LocationExpectation::from_rows(&bundle.region_expectations, &bundle.colonies)?;
        let adjustments = CodeAdjustmentMap::from_rows(
            &bundle.improbable_adjustments,
            &bundle.plausible_adjustments,
            &ladder,
        )?;

        let mut anchors = BTreeMap::new();
        for row in &bundle.anchors {
            if anchors
                .insert(row.species.clone(), SeasonAnchors::from(row))
                .is_some()
            {
                return Err(ReferenceError::DuplicateRow {
                    table: "anchors",
                    key: row.species.clone(),
                });
            }
        }

        let tables = Self {
            ladder,
            breeding_species: bundle.breeding_species.iter().cloned().collect(),
            colonial_species: bundle.colonial_species.iter().cloned().collect(),
            expectations,
            anchors,
            locations,
            adjustments,
        };

        info!(
            codes = tables.ladder.len(),
            species_with_anchors = tables.anchors.len(),
            breeding_species = tables.breeding_species.len(),
            "reference tables loaded"
        );
        Ok(tables)
    }

    /// Parse a JSON bundle and build the tables.
    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let bundle: ReferenceBundle =
            serde_json::from_str(json).map_err(|e| ReferenceError::ParseError {
                format: "json",
                message: e.to_string(),
            })?;
        Self::from_bundle(&bundle)
    }

    /// Parse a TOML bundle and build the tables.
    pub fn from_toml(text: &str) -> Result<Self, ReferenceError> {
        let bundle: ReferenceBundle =
            toml::from_str(text).map_err(|e| ReferenceError::ParseError {
                format: "toml",
                message: e.to_string(),
            })?;
        Self::from_bundle(&bundle)
    }

    pub fn ladder(&self) -> &CodeLadder {
        &self.ladder
    }

    pub fn expectations(&self) -> &ExpectationMatrix {
        &self.expectations
    }

    pub fn locations(&self) -> &LocationExpectation {
        &self.locations
    }

    pub fn adjustments(&self) -> &CodeAdjustmentMap {
        &self.adjustments
    }

    pub fn anchors(&self) -> &BTreeMap<String, SeasonAnchors> {
        &self.anchors
    }

    /// On the canonical list of species breeding in the covered region.
    pub fn is_known_breeder(&self, species: &str) -> bool {
        self.breeding_species.contains(species)
    }

    pub fn is_colonial(&self, species: &str) -> bool {
        self.colonial_species.contains(species)
    }

    /// Listed breeders with no expectation-matrix rows, sorted.
    pub fn breeders_missing_from_matrix(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .breeding_species
            .iter()
            .map(String::as_str)
            .filter(|s| !self.expectations.lists_species(s))
            .collect();
        missing.sort_unstable();
        if !missing.is_empty() {
            debug!(count = missing.len(), "breeders missing from expectation matrix");
        }
        missing
    }
}
