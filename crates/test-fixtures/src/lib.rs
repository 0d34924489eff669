//! Test fixtures for atlas integration tests.
//!
//! Provides a small reference bundle (six breeding species covering the
//! ordinary, wraparound, colonial, vulture, and year-round cases) and
//! observation builders.

use std::path::PathBuf;

use atlas_core::{BreedingCode, CodeLadder, Observation};
use atlas_reference::rows::ExpectationRow;
use atlas_reference::{ReferenceBundle, ReferenceTables};
use chrono::NaiveDate;

pub const WREN: &str = "Carolina Wren";
pub const OWL: &str = "Great Horned Owl";
pub const BLACK_VULTURE: &str = "Black Vulture";
pub const TURKEY_VULTURE: &str = "Turkey Vulture";
pub const HERON: &str = "Great Blue Heron";
pub const PIGEON: &str = "Rock Pigeon";
/// Listed as a breeder but absent from the expectation matrix.
pub const MARTIN: &str = "Purple Martin";
/// Not listed anywhere.
pub const SNOW_GOOSE: &str = "Snow Goose";

/// Non-default matrix cells; every other (species, code) is expected.
const EXPECTATION_OVERRIDES: &[(&str, &str, u8)] = &[
    (WREN, "NY", 3),
    (WREN, "UN", 2),
    (BLACK_VULTURE, "NE", 3),
    (HERON, "FL", 2),
    (HERON, "NE", 3),
];

/// Directory holding fixture data files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Path to a fixture data file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The fixture bundle with its generated expectation matrix.
///
/// # Panics
/// Panics if the bundle file is missing or malformed.
pub fn reference_bundle() -> ReferenceBundle {
    let path = fixture_path("reference_bundle.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    let mut bundle: ReferenceBundle = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e));
    bundle.expectations = expectation_rows();
    bundle
}

/// Fixture reference tables.
pub fn reference_tables() -> ReferenceTables {
    ReferenceTables::from_bundle(&reference_bundle())
        .unwrap_or_else(|e| panic!("Fixture bundle failed to load: {e}"))
}

/// Every standard-ladder code for each matrix species, tier 1 unless overridden.
pub fn expectation_rows() -> Vec<ExpectationRow> {
    let ladder = CodeLadder::standard();
    let mut rows = Vec::new();
    for species in [WREN, OWL, BLACK_VULTURE, TURKEY_VULTURE, HERON, PIGEON] {
        for (code, _) in ladder.iter() {
            let tier = EXPECTATION_OVERRIDES
                .iter()
                .find(|(s, c, _)| *s == species && *c == code.as_str())
                .map_or(1, |(_, _, t)| *t);
            rows.push(ExpectationRow {
                species: species.to_string(),
                code: code.clone(),
                tier,
            });
        }
    }
    rows
}

/// Parse `YYYY-MM-DD`.
///
/// # Panics
/// Panics on a malformed date.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| panic!("bad date {s}: {e}"))
}

/// An observation without supporting evidence.
pub fn obs(id: &str, species: &str, code: &str, on: &str, region: &str, block: &str) -> Observation {
    Observation::new(id, species, BreedingCode::new(code), date(on), region, block)
}

/// An observation with a photo attached.
pub fn obs_with_media(
    id: &str,
    species: &str,
    code: &str,
    on: &str,
    region: &str,
    block: &str,
) -> Observation {
    obs(id, species, code, on, region, block).with_evidence(true, false)
}
