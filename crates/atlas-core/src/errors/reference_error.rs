//! Reference-table loading errors.

use super::error_code::{self, AtlasErrorCode};

/// Errors raised while building the reference tables.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("Reference bundle parse error ({format}): {message}")]
    ParseError { format: &'static str, message: String },

    #[error("Invalid calendar anchor: {value}")]
    InvalidAnchor { value: String },

    #[error("Invalid code ladder: {reason}")]
    InvalidLadder { reason: String },

    #[error("Invalid expectation value {value} for {species}/{code}")]
    InvalidExpectation {
        species: String,
        code: String,
        value: u8,
    },

    #[error("Duplicate {table} row for {key}")]
    DuplicateRow { table: &'static str, key: String },

    #[error("Code {code} in {table} is not on the code ladder")]
    UnknownCode { table: &'static str, code: String },
}

impl AtlasErrorCode for ReferenceError {
    fn error_code(&self) -> &'static str {
        error_code::REFERENCE_ERROR
    }
}
