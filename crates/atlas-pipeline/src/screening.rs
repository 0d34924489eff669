//! Shape checks run before any stage touches a record.

use atlas_core::config::WindowConfig;
use atlas_core::{IntegrityWarning, Observation, WarningKind};

/// Flags which records may enter the stages. Records with empty required
/// fields or dated outside the window are held back with a warning; their
/// derived fields stay unset.
pub fn screen(records: &[Observation], window: &WindowConfig) -> (Vec<bool>, Vec<IntegrityWarning>) {
    let mut warnings = Vec::new();
    let eligible = records
        .iter()
        .map(|obs| {
            let missing = obs.missing_fields();
            if !missing.is_empty() {
                warnings.push(IntegrityWarning::record(
                    WarningKind::MissingField,
                    &obs.id,
                    &obs.species,
                    format!("missing {}", missing.join(", ")),
                ));
                return false;
            }
            if !window.contains(obs.year()) {
                warnings.push(IntegrityWarning::record(
                    WarningKind::OutsideCollectionWindow,
                    &obs.id,
                    &obs.species,
                    format!(
                        "dated {} outside {}..={}",
                        obs.date, window.first_year, window.last_year
                    ),
                ));
                return false;
            }
            true
        })
        .collect();
    (eligible, warnings)
}
