use atlas_adjudication::Adjudicator;
use atlas_calendar::SeasonCalendar;
use atlas_classifier::CodeClassifier;
use atlas_core::{AtlasConfig, BreedingCode, CodeLadder, ConfidenceTier, Observation, Phase};
use atlas_tiers::TierEvaluator;
use proptest::prelude::*;
use test_fixtures::{obs, reference_tables, HERON, WREN};

fn record() -> impl Strategy<Value = (usize, String, u32, u32, usize, usize, bool)> {
    let codes: Vec<String> = CodeLadder::standard()
        .iter()
        .map(|(c, _)| c.to_string())
        .collect();
    (
        0usize..2,
        proptest::sample::select(codes),
        1u32..=12,
        1u32..=28,
        0usize..3,
        0usize..3,
        any::<bool>(),
    )
}

proptest! {
    #[test]
    fn adjudication_is_idempotent(batch in proptest::collection::vec(record(), 1..20)) {
        let tables = reference_tables();
        let species = [WREN, HERON];
        let regions = ["Piedmont", "Mountains", "Coastal"];

        let mut records: Vec<Observation> = batch
            .iter()
            .enumerate()
            .map(|(i, (s, code, m, d, region, block, media))| {
                obs(
                    &format!("o{i:03}"),
                    species[*s],
                    code,
                    &format!("2023-{m:02}-{d:02}"),
                    regions[*region],
                    &format!("B{block}"),
                )
                .with_evidence(*media, false)
            })
            .collect();

        let (calendar, _) = SeasonCalendar::build(&tables);
        let classifier = CodeClassifier::new(&tables);
        for o in &mut records {
            calendar.assign_phase(o).unwrap();
            classifier.classify(o).unwrap();
        }
        TierEvaluator::new(&tables, &AtlasConfig::default()).unwrap().run(&mut records);

        let adjudicator = Adjudicator::new(&tables);
        let first = adjudicator.run(&mut records, true);
        prop_assert!(first.faults.is_empty());
        let settled = records.clone();
        let second = adjudicator.run(&mut records, false);

        prop_assert_eq!(&records, &settled);
        prop_assert_eq!(second.auto_resolved, 0);
        prop_assert_eq!(second.review_queue, first.review_queue);
        let no_code = BreedingCode::new("NC");
        for o in &records {
            prop_assert_ne!(o.confidence_tier, Some(ConfidenceTier::Unlikely));
            // Heron NE is corrected to H; off-season it must end as no-code.
            if o.species == HERON && o.reported_code.as_str() == "NE" {
                let phase = o.phase.unwrap();
                if phase != Phase::Breeding {
                    prop_assert_eq!(o.resolved_code.as_ref(), Some(&no_code));
                }
            }
        }
    }
}
