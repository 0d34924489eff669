//! Tests for the atlas error handling system.

use atlas_core::errors::error_code;
use atlas_core::errors::*;
use atlas_core::tiers::AdjustmentKind;
use atlas_core::{IntegrityWarning, SpeciesFault, WarningKind};

#[test]
fn every_error_has_a_code() {
    let calendar = CalendarError::EmptyCalendar {
        species: "Wood Duck".into(),
    };
    assert_eq!(calendar.error_code(), error_code::PARTITION_FAULT);

    let lookup = ClassificationError::MissingAdjustment {
        species: "Wood Duck".into(),
        code: "NY".into(),
        kind: AdjustmentKind::Improbable,
    };
    assert_eq!(lookup.error_code(), error_code::LOOKUP_MISS);

    let uncategorized = AdjudicationError::UncategorizedCode {
        id: "1".into(),
        species: "Wood Duck".into(),
        code: "ZZ".into(),
    };
    assert_eq!(uncategorized.error_code(), error_code::UNCATEGORIZED_CODE);

    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn nested_errors_keep_their_code() {
    let lookup = ClassificationError::MissingAdjustment {
        species: "Wood Duck".into(),
        code: "H".into(),
        kind: AdjustmentKind::PlausibleWithoutEvidence,
    };
    let adjudication: AdjudicationError = lookup.into();
    let top: AtlasError = adjudication.into();
    assert_eq!(top.error_code(), error_code::LOOKUP_MISS);
    assert!(top.coded_string().starts_with("[LOOKUP_MISS]"));
}

#[test]
fn species_fault_captures_code_and_message() {
    let err: AtlasError = CalendarError::PartitionFault {
        species: "Barn Owl".into(),
        covered: 300,
        intervals: "breeding=[1..300]".into(),
    }
    .into();
    let fault = SpeciesFault::new("Barn Owl", "calendar", &err);
    assert_eq!(fault.code, "PARTITION_FAULT");
    assert!(fault.message.contains("Barn Owl"));
}

#[test]
fn warnings_carry_record_context() {
    let w = IntegrityWarning::record(WarningKind::MissingField, "7", "Wood Duck", "block empty");
    assert_eq!(w.observation_id.as_deref(), Some("7"));
    let s = IntegrityWarning::species(WarningKind::BreederMissingFromMatrix, "Wood Duck", "x");
    assert!(s.observation_id.is_none());
}
