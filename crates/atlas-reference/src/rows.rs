//! Serde row shapes for the reference bundle.
//!
//! Rows are format-agnostic: the same bundle loads from JSON or TOML.

use atlas_core::{BreedingCode, MonthDay};
use serde::{Deserialize, Serialize};

/// Ladder definition. Each list runs low → high.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderRows {
    pub no_code: String,
    pub possible: Vec<String>,
    pub probable: Vec<String>,
    pub confirmed: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectationRow {
    pub species: String,
    pub code: BreedingCode,
    /// 1 = expected, 2 = plausible, 3 = improbable.
    pub tier: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorRow {
    pub species: String,
    pub breeding_start: MonthDay,
    pub breeding_end: MonthDay,
    #[serde(default)]
    pub earliest_breeding: Option<MonthDay>,
    #[serde(default)]
    pub latest_breeding: Option<MonthDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRow {
    pub species: String,
    pub region: String,
    pub expected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonyRow {
    pub species: String,
    pub block: String,
    pub colony: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRow {
    pub species: String,
    pub code: BreedingCode,
    pub replacement: BreedingCode,
    pub reason: String,
}

/// Everything needed to build [`crate::ReferenceTables`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceBundle {
    /// `None` selects the standard atlas ladder.
    pub ladder: Option<LadderRows>,
    /// Canonical list of species known to breed in the covered region.
    pub breeding_species: Vec<String>,
    pub colonial_species: Vec<String>,
    pub expectations: Vec<ExpectationRow>,
    pub anchors: Vec<AnchorRow>,
    pub region_expectations: Vec<RegionRow>,
    pub colonies: Vec<ColonyRow>,
    pub improbable_adjustments: Vec<AdjustmentRow>,
    pub plausible_adjustments: Vec<AdjustmentRow>,
}
