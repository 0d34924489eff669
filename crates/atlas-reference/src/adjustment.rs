//! Code-downgrade maps for codes needing correction.

use atlas_core::errors::ReferenceError;
use atlas_core::types::collections::FxHashMap;
use atlas_core::{AdjustmentKind, BreedingCode, CodeLadder, ResolutionReason};

use crate::rows::AdjustmentRow;

/// Replacement code and the reason recorded with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub code: BreedingCode,
    pub reason: ResolutionReason,
}

/// (species, code) → adjustment, one map per [`AdjustmentKind`].
#[derive(Debug, Clone, Default)]
pub struct CodeAdjustmentMap {
    improbable: FxHashMap<(String, BreedingCode), Adjustment>,
    plausible: FxHashMap<(String, BreedingCode), Adjustment>,
}

impl CodeAdjustmentMap {
    pub fn from_rows(
        improbable: &[AdjustmentRow],
        plausible: &[AdjustmentRow],
        ladder: &CodeLadder,
    ) -> Result<Self, ReferenceError> {
        Ok(Self {
            improbable: build("improbable_adjustments", improbable, ladder)?,
            plausible: build("plausible_adjustments", plausible, ladder)?,
        })
    }

    pub fn get(&self, kind: AdjustmentKind, species: &str, code: &BreedingCode) -> Option<&Adjustment> {
        let key = (species.to_string(), code.clone());
        match kind {
            AdjustmentKind::Improbable => self.improbable.get(&key),
            AdjustmentKind::PlausibleWithoutEvidence => self.plausible.get(&key),
        }
    }
}

fn build(
    table: &'static str,
    rows: &[AdjustmentRow],
    ladder: &CodeLadder,
) -> Result<FxHashMap<(String, BreedingCode), Adjustment>, ReferenceError> {
    let mut map = FxHashMap::default();
    for row in rows {
        if !ladder.contains(&row.replacement) {
            return Err(ReferenceError::UnknownCode {
                table,
                code: row.replacement.to_string(),
            });
        }
        let adjustment = Adjustment {
            code: row.replacement.clone(),
            reason: ResolutionReason::from(row.reason.clone()),
        };
        if map
            .insert((row.species.clone(), row.code.clone()), adjustment)
            .is_some()
        {
            return Err(ReferenceError::DuplicateRow {
                table,
                key: format!("{}/{}", row.species, row.code),
            });
        }
    }
    Ok(map)
}
