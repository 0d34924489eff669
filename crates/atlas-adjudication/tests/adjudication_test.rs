//! Adjudicator scenarios, run after the earlier stages on fixture data.

use atlas_adjudication::{recompute_category, AdjudicationReport, Adjudicator, ReviewCause};
use atlas_calendar::SeasonCalendar;
use atlas_classifier::CodeClassifier;
use atlas_core::errors::AdjudicationError;
use atlas_core::{
    AtlasConfig, AtlasErrorCode, BreedingCategory, BreedingCode, CodeLadder, ConfidenceTier,
    ExpectationTier, Observation, ResolutionReason,
};
use atlas_reference::ReferenceTables;
use atlas_tiers::TierEvaluator;
use test_fixtures::{obs, obs_with_media, reference_bundle, reference_tables, HERON, OWL, WREN};

fn settle(tables: &ReferenceTables, mut records: Vec<Observation>) -> Vec<Observation> {
    let (calendar, _) = SeasonCalendar::build(tables);
    let classifier = CodeClassifier::new(tables);
    for o in &mut records {
        calendar.assign_phase(o).unwrap();
        classifier.classify(o).unwrap();
    }
    TierEvaluator::new(tables, &AtlasConfig::default())
        .unwrap()
        .run(&mut records);
    records
}

fn adjudicate(records: Vec<Observation>) -> (Vec<Observation>, AdjudicationReport) {
    let tables = reference_tables();
    let mut records = settle(&tables, records);
    let report = Adjudicator::new(&tables).run(&mut records, true);
    (records, report)
}

fn code(s: &str) -> Option<BreedingCode> {
    Some(BreedingCode::new(s))
}

#[test]
fn confirmed_breeding_record_stays_as_reported() {
    let (records, report) = adjudicate(vec![obs("x1", WREN, "CN", "2023-05-01", "Piedmont", "P1")]);
    let x = &records[0];
    assert_eq!(x.confidence_tier, Some(ConfidenceTier::Confident));
    assert_eq!(x.breeding_category, Some(BreedingCategory::C4));
    assert_eq!(x.resolution_reason, None);
    assert_eq!(report.untouched, 1);
}

#[test]
fn improbable_correction_lands_in_c1() {
    let (records, _) = adjudicate(vec![obs("y1", WREN, "NY", "2023-05-01", "Piedmont", "P1")]);
    let y = &records[0];
    assert_eq!(y.resolved_code, code("NC"));
    assert_eq!(y.resolution_reason.as_ref().map(|r| r.as_str()), Some("notlocal"));
    assert_eq!(y.expectation_tier, Some(ExpectationTier::Expected));
    assert_eq!(y.breeding_category, Some(BreedingCategory::C1));
}

#[test]
fn unlikely_record_where_not_expected_is_not_likely() {
    let (records, report) = adjudicate(vec![obs("z1", HERON, "H", "2023-01-15", "Piedmont", "B9")]);
    let z = &records[0];
    assert_eq!(z.resolved_code, code("NC"));
    assert_eq!(z.resolution_reason, Some(ResolutionReason::NotLikely));
    assert_eq!(z.confidence_tier, Some(ConfidenceTier::Confident));
    assert_eq!(z.breeding_category, Some(BreedingCategory::C1));
    assert_eq!(report.auto_resolved, 1);
}

#[test]
fn unlikely_record_where_expected_gets_a_timing_reason() {
    let (records, _) = adjudicate(vec![
        obs("z2", HERON, "H", "2023-01-15", "Coastal", "C1"),
        obs("z3", HERON, "H", "2023-10-01", "Coastal", "C1"),
    ]);
    assert_eq!(records[0].resolution_reason, Some(ResolutionReason::TooEarly));
    assert_eq!(records[1].resolution_reason, Some(ResolutionReason::TooLate));
}

#[test]
fn corrected_code_rated_unlikely_is_discarded_under_its_reason() {
    let (mut records, report) =
        adjudicate(vec![obs("z4", HERON, "NE", "2023-01-15", "Coastal", "C1")]);
    let z = &records[0];
    assert_eq!(z.resolved_code, code("NC"));
    assert_eq!(z.resolution_reason, Some(ResolutionReason::Adjusted("notlocal".to_string())));
    assert_eq!(z.confidence_tier, Some(ConfidenceTier::Confident));
    assert_eq!(z.breeding_category, Some(BreedingCategory::C1));
    assert_eq!(report.auto_resolved, 1);

    let tables = reference_tables();
    let again = Adjudicator::new(&tables).run(&mut records, false);
    assert_eq!(again.auto_resolved, 0);
    assert_eq!(records[0].resolved_code, code("NC"));
}

#[test]
fn plausible_without_evidence_takes_the_plausible_adjustment() {
    let (records, _) = adjudicate(vec![obs("p1", WREN, "UN", "2023-05-01", "Piedmont", "P1")]);
    let p = &records[0];
    assert_eq!(p.resolved_code, code("H"));
    assert_eq!(
        p.resolution_reason,
        Some(ResolutionReason::Adjusted("unsupported-plausible".to_string()))
    );
    assert_eq!(p.expectation_tier, Some(ExpectationTier::Expected));
    assert_eq!(p.breeding_category, Some(BreedingCategory::C2));
}

#[test]
fn plausible_with_evidence_goes_to_review() {
    let (records, report) =
        adjudicate(vec![obs_with_media("p2", WREN, "UN", "2023-05-01", "Piedmont", "P1")]);
    assert_eq!(records[0].expectation_tier, Some(ExpectationTier::Plausible));
    assert_eq!(records[0].resolution_reason, None);
    assert_eq!(report.needs_review, 1);
    assert_eq!(report.review_queue[0].cause, ReviewCause::PlausibleWithEvidence);
}

#[test]
fn uncertain_without_evidence_resolves_for_insufficient_evidence() {
    let (records, _) = adjudicate(vec![obs("u1", WREN, "P", "2023-06-01", "Mountains", "M5")]);
    let u = &records[0];
    assert_eq!(u.resolved_code, code("NC"));
    assert_eq!(u.resolution_reason, Some(ResolutionReason::InsufficientEvidence));
    assert_eq!(u.confidence_tier, Some(ConfidenceTier::Confident));
}

#[test]
fn uncertain_with_evidence_goes_to_review() {
    let (records, report) =
        adjudicate(vec![obs_with_media("u2", WREN, "P", "2023-06-01", "Mountains", "M5")]);
    assert_eq!(records[0].confidence_tier, Some(ConfidenceTier::Uncertain));
    assert_eq!(records[0].breeding_category, Some(BreedingCategory::C3));
    let item = &report.review_queue[0];
    assert_eq!(item.cause, ReviewCause::UncertainWithEvidence);
    assert_eq!(item.expected_here, Some(false));
    assert_eq!(item.reported_code, BreedingCode::new("P"));
}

#[test]
fn review_queue_is_sorted_by_identifier() {
    let (_, report) = adjudicate(vec![
        obs_with_media("r3", WREN, "P", "2023-06-01", "Mountains", "M5"),
        obs_with_media("r1", WREN, "UN", "2023-05-01", "Piedmont", "P1"),
        obs_with_media("r2", WREN, "P", "2023-06-02", "Mountains", "M6"),
    ]);
    let ids: Vec<&str> = report.review_queue.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2", "r3"]);
}

#[test]
fn missing_plausible_adjustment_is_a_species_fault() {
    let mut bundle = reference_bundle();
    for row in bundle.expectations.iter_mut() {
        if row.species == OWL && row.code.as_str() == "UN" {
            row.tier = 2;
        }
    }
    let tables = ReferenceTables::from_bundle(&bundle).unwrap();
    let mut records = settle(&tables, vec![obs("m1", OWL, "UN", "2023-01-10", "Piedmont", "P1")]);
    let report = Adjudicator::new(&tables).run(&mut records, false);
    assert_eq!(report.faults.len(), 1);
    assert_eq!(report.faults[0].species, OWL);
    assert_eq!(report.faults[0].code, "LOOKUP_MISS");
}

#[test]
fn second_pass_changes_nothing() {
    let tables = reference_tables();
    let mut records = settle(
        &tables,
        vec![
            obs("i1", HERON, "H", "2023-01-15", "Piedmont", "B9"),
            obs("i2", WREN, "UN", "2023-05-01", "Piedmont", "P1"),
            obs("i3", WREN, "P", "2023-06-01", "Mountains", "M5"),
            obs_with_media("i4", WREN, "P", "2023-06-01", "Mountains", "M6"),
        ],
    );
    let adjudicator = Adjudicator::new(&tables);
    adjudicator.run(&mut records, true);
    let first = records.clone();
    let again = adjudicator.run(&mut records, true);
    assert_eq!(records, first);
    assert_eq!(again.auto_resolved, 0);
    assert_eq!(again.needs_review, 1);
}

#[test]
fn code_off_the_ladder_is_uncategorized() {
    let mut o = obs("k1", WREN, "CN", "2023-05-01", "Piedmont", "P1");
    o.resolved_code = code("ZZ");
    let err = recompute_category(&CodeLadder::standard(), &mut o).unwrap_err();
    assert!(matches!(err, AdjudicationError::UncategorizedCode { .. }));
    assert_eq!(err.error_code(), "UNCATEGORIZED_CODE");
}

#[test]
fn review_items_serialize_with_snake_case_causes() {
    let (_, report) =
        adjudicate(vec![obs_with_media("s1", WREN, "P", "2023-06-01", "Mountains", "M5")]);
    let json = serde_json::to_value(&report.review_queue[0]).unwrap();
    assert_eq!(json["cause"], "uncertain_with_evidence");
    assert_eq!(json["confidence_tier"], "uncertain");
    assert_eq!(json["date"], "2023-06-01");
}
