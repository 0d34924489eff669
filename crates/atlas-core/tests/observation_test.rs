use atlas_core::errors::TransitionError;
use atlas_core::*;
use chrono::NaiveDate;

fn obs() -> Observation {
    Observation::new(
        "OBS1",
        "Carolina Wren",
        "cn",
        NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
        "Piedmont",
        "BLK-01",
    )
}

#[test]
fn new_observation_has_no_derived_fields() {
    let o = obs();
    assert_eq!(o.reported_code.as_str(), "CN");
    assert!(o.expectation_tier.is_none());
    assert!(o.confidence_tier.is_none());
    assert_eq!(o.working_code().as_str(), "CN");
    assert!(!o.has_supporting_evidence());
    assert!(o.with_evidence(false, true).has_supporting_evidence());
}

#[test]
fn confidence_only_moves_toward_confident() {
    let mut o = obs();
    o.set_confidence(ConfidenceTier::Uncertain).unwrap();
    o.set_confidence(ConfidenceTier::Confident).unwrap();
    let err = o.set_confidence(ConfidenceTier::Unlikely).unwrap_err();
    assert!(matches!(err, TransitionError::Illegal { field: "confidence_tier", .. }));
    assert_eq!(o.confidence_tier, Some(ConfidenceTier::Confident));
}

#[test]
fn unlikely_cannot_become_uncertain() {
    let mut o = obs();
    o.set_confidence(ConfidenceTier::Unlikely).unwrap();
    assert!(!o.advance_confidence(ConfidenceTier::Uncertain));
    assert!(o.advance_confidence(ConfidenceTier::Confident));
    assert!(!o.advance_confidence(ConfidenceTier::Confident));
}

#[test]
fn expectation_promotes_but_never_demotes() {
    let mut o = obs();
    o.set_expectation(ExpectationTier::Improbable).unwrap();
    o.promote_expectation().unwrap();
    assert!(o.set_expectation(ExpectationTier::Plausible).is_err());
}

#[test]
fn phase_is_decided_once() {
    let mut o = obs();
    o.set_phase(Phase::Breeding).unwrap();
    o.set_phase(Phase::Breeding).unwrap();
    assert!(o.set_phase(Phase::Late).is_err());
}

#[test]
fn resolution_is_written_once() {
    let mut o = obs();
    o.resolve(BreedingCode::new("NC"), ResolutionReason::TooEarly).unwrap();
    let err = o
        .resolve(BreedingCode::new("H"), ResolutionReason::NotLikely)
        .unwrap_err();
    assert!(matches!(err, TransitionError::AlreadyResolved { .. }));
    assert_eq!(o.working_code().as_str(), "NC");
}

#[test]
fn revising_a_code_keeps_the_reason() {
    let mut o = obs();
    let err = o.set_resolved_code(BreedingCode::new("NC")).unwrap_err();
    assert!(matches!(err, TransitionError::NotResolved { .. }));
    assert_eq!(o.resolved_code, None);

    o.resolve(BreedingCode::new("H"), ResolutionReason::Adjusted("notlocal".into()))
        .unwrap();
    o.set_resolved_code(BreedingCode::new("NC")).unwrap();
    assert_eq!(o.working_code().as_str(), "NC");
    assert_eq!(o.resolution_reason, Some(ResolutionReason::Adjusted("notlocal".into())));
}

#[test]
fn missing_fields_are_named() {
    let mut o = obs();
    o.block = "  ".to_string();
    o.region.clear();
    assert_eq!(o.missing_fields().as_slice(), &["region", "block"]);
}

#[test]
fn reasons_serialize_as_plain_strings() {
    let json = serde_json::to_string(&ResolutionReason::InsufficientEvidence).unwrap();
    assert_eq!(json, "\"insufficient-evidence\"");
    let back: ResolutionReason = serde_json::from_str("\"notlocal\"").unwrap();
    assert_eq!(back, ResolutionReason::Adjusted("notlocal".to_string()));
}

#[test]
fn observation_deserializes_without_derived_fields() {
    let json = r#"{
        "id": "X1", "species": "Wood Duck", "reported_code": "fl",
        "date": "2022-06-01", "region": "Coastal", "block": "B7", "has_media": true
    }"#;
    let o: Observation = serde_json::from_str(json).unwrap();
    assert_eq!(o.reported_code.as_str(), "FL");
    assert!(o.has_media);
    assert!(o.phase.is_none());
}
