use atlas_calendar::SeasonCalendar;
use atlas_classifier::CodeClassifier;
use atlas_core::{AtlasConfig, BreedingCode, CodeLadder, Observation};
use atlas_reference::ReferenceTables;
use atlas_tiers::{colony, Escalation, TierEvaluator};
use proptest::prelude::*;
use test_fixtures::{obs, reference_tables, HERON, WREN};

fn ladder_code() -> impl Strategy<Value = String> {
    let codes: Vec<String> = CodeLadder::standard()
        .iter()
        .map(|(c, _)| c.to_string())
        .collect();
    proptest::sample::select(codes)
}

/// A day in April through August, covering the wren's breeding and post-breeding.
fn spring_summer_date() -> impl Strategy<Value = String> {
    (4u32..=8, 1u32..=28).prop_map(|(m, d)| format!("2023-{m:02}-{d:02}"))
}

fn prepared(tables: &ReferenceTables, mut records: Vec<Observation>) -> Vec<Observation> {
    let (calendar, _) = SeasonCalendar::build(tables);
    let classifier = CodeClassifier::new(tables);
    for o in &mut records {
        calendar.assign_phase(o).unwrap();
        classifier.classify(o).unwrap();
    }
    records
}

proptest! {
    #[test]
    fn escalation_leaves_no_candidate_behind(
        members in proptest::collection::vec((ladder_code(), spring_summer_date()), 1..12)
    ) {
        let tables = reference_tables();
        let batch = members
            .iter()
            .enumerate()
            .map(|(i, (code, on))| obs(&format!("r{i}"), WREN, code, on, "Mountains", "M1"))
            .collect();
        let mut records = prepared(&tables, batch);
        let config = AtlasConfig::default();
        TierEvaluator::new(&tables, &config).unwrap().run(&mut records);

        let threshold = BreedingCode::new(&config.escalation.threshold_code);
        let escalation = Escalation::new(tables.ladder(), &threshold).unwrap();
        let highest = escalation.highest_confirmed_code(records.iter());
        if highest.is_some_and(|c| escalation.exceeds_threshold(c)) {
            for r in &records {
                prop_assert!(!escalation.is_candidate(r), "{} left uncertain", r.id);
            }
        }
    }

    #[test]
    fn colony_discovery_takes_the_earliest_date_in_any_order(
        days in proptest::collection::vec((1u32..=28, 0usize..3), 1..10),
        seed in any::<u64>(),
    ) {
        let tables = reference_tables();
        let batch: Vec<Observation> = days
            .iter()
            .enumerate()
            .map(|(i, (d, block))| {
                obs(&format!("h{i:02}"), HERON, "CN", &format!("2023-06-{d:02}"), "Piedmont", &format!("B{block}"))
            })
            .collect();
        let mut forward = prepared(&tables, batch);
        let config = AtlasConfig::default();
        let evaluator = TierEvaluator::new(&tables, &config).unwrap();
        evaluator.evaluate_all(&mut forward);

        let mut shuffled = forward.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();

        let a = colony::discover(&tables, &forward, true);
        let b = colony::discover(&tables, &shuffled, false);
        prop_assert_eq!(&a, &b);

        for found in &a {
            let earliest = forward
                .iter()
                .filter(|o| o.block == found.block)
                .map(|o| o.date)
                .min()
                .unwrap();
            prop_assert_eq!(found.first_confirmed, earliest);
        }
    }
}
