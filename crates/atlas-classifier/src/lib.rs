//! # atlas-classifier
//!
//! Looks up each observation's `(species, reported code)` in the expectation
//! matrix and assigns its expectation tier. Improbable codes are corrected
//! through the improbable code-adjustment map and promoted to expected.
//! Records of species absent from the matrix resolve to the no-code sentinel.

pub mod classifier;
pub mod cross_check;

pub use classifier::{Classification, CodeClassifier};
pub use cross_check::breeders_missing_from_matrix;
