//! # atlas-reference
//!
//! The lookup tables every stage reads. Loaded once per run from a
//! [`ReferenceBundle`] of serde rows and never mutated afterwards.
//!
//! - expectation matrix: (species, code) → expected / plausible / improbable
//! - season anchors: species → breeding window plus recorded extremes
//! - location expectation: (species, region) and (species, block) colony flags
//! - code adjustments: improbable and plausible-without-evidence maps
//! - the canonical code ladder and species lists

pub mod adjustment;
pub mod anchors;
pub mod expectation;
pub mod location;
pub mod rows;
pub mod tables;

pub use adjustment::{Adjustment, CodeAdjustmentMap};
pub use anchors::SeasonAnchors;
pub use expectation::{ExpectationLookup, ExpectationMatrix};
pub use location::LocationExpectation;
pub use rows::ReferenceBundle;
pub use tables::ReferenceTables;
