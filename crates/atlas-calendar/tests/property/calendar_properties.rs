use atlas_calendar::SpeciesCalendar;
use atlas_core::{DayOfYear, MonthDay, Phase};
use atlas_reference::SeasonAnchors;
use proptest::prelude::*;

fn month_day() -> impl Strategy<Value = MonthDay> {
    (1u32..=12, 1u32..=28).prop_map(|(m, d)| MonthDay::new(m, d).unwrap())
}

fn anchors() -> impl Strategy<Value = SeasonAnchors> {
    (
        month_day(),
        month_day(),
        proptest::option::of(month_day()),
        proptest::option::of(month_day()),
    )
        .prop_map(|(bs, be, earliest, latest)| SeasonAnchors {
            breeding_start: bs,
            breeding_end: be,
            earliest_breeding: earliest,
            latest_breeding: latest,
        })
}

proptest! {
    #[test]
    fn every_calendar_partitions_the_year(a in anchors()) {
        let calendar = SpeciesCalendar::from_anchors("Any Bird", &a).unwrap();
        let total: usize = Phase::ALL.iter().map(|p| calendar.phase_len(*p)).sum();
        prop_assert_eq!(total, 366);
    }

    #[test]
    fn classify_day_is_total(a in anchors(), d in 1u16..=366) {
        let calendar = SpeciesCalendar::from_anchors("Any Bird", &a).unwrap();
        let day = DayOfYear::new(d).unwrap();
        let phase = calendar.classify_day(day);
        prop_assert!(phase.is_some());
        let hits = Phase::ALL
            .iter()
            .filter(|p| calendar.span(**p).iter().any(|r| r.contains(day)))
            .count();
        prop_assert_eq!(hits, 1);
    }

    #[test]
    fn wraparound_has_no_early_or_pre(a in anchors()) {
        let calendar = SpeciesCalendar::from_anchors("Any Bird", &a).unwrap();
        if a.wraps() {
            prop_assert!(calendar.is_absent(Phase::Early));
            prop_assert!(calendar.is_absent(Phase::Pre));
            prop_assert_eq!(calendar.span(Phase::Breeding).len(), 2);
        } else {
            prop_assert_eq!(calendar.span(Phase::Breeding).len(), 1);
        }
    }

    #[test]
    fn breeding_anchors_fall_in_breeding(a in anchors()) {
        let calendar = SpeciesCalendar::from_anchors("Any Bird", &a).unwrap();
        prop_assert_eq!(calendar.classify_day(a.breeding_start_day()), Some(Phase::Breeding));
        prop_assert_eq!(calendar.classify_day(a.breeding_end_day()), Some(Phase::Breeding));
    }
}
