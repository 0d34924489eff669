//! Cross-check of the breeding-species list against the expectation matrix.

use atlas_core::{IntegrityWarning, WarningKind};
use atlas_reference::ReferenceTables;
use tracing::warn;

/// One warning per listed breeder that has no matrix rows. Their records
/// would otherwise be treated as non-breeding without notice.
pub fn breeders_missing_from_matrix(tables: &ReferenceTables) -> Vec<IntegrityWarning> {
    tables
        .breeders_missing_from_matrix()
        .into_iter()
        .map(|species| {
            warn!(species = %species, "known breeder missing from expectation matrix");
            IntegrityWarning::species(
                WarningKind::BreederMissingFromMatrix,
                species,
                "listed as a breeder but absent from the expectation matrix",
            )
        })
        .collect()
}
