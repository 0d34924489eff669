//! Property tests for leap-adjusted days and confidence transitions.

use atlas_core::{ConfidenceTier, DayOfYear};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

fn tier() -> impl Strategy<Value = ConfidenceTier> {
    prop_oneof![
        Just(ConfidenceTier::Confident),
        Just(ConfidenceTier::Uncertain),
        Just(ConfidenceTier::Unlikely),
    ]
}

proptest! {
    #[test]
    fn same_month_day_maps_to_same_day_in_any_year(
        year in 1900i32..2100,
        ordinal in 1u32..=365,
    ) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let day = DayOfYear::from_date(date);
        prop_assert!((1..=366).contains(&day.get()));
        let in_leap_year = NaiveDate::from_ymd_opt(2024, date.month(), date.day()).unwrap();
        prop_assert_eq!(day, DayOfYear::from_date(in_leap_year));
    }

    #[test]
    fn december_31_is_always_day_366(year in 1900i32..2100) {
        let date = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        prop_assert_eq!(DayOfYear::from_date(date).get(), 366);
    }

    #[test]
    fn succ_then_pred_is_identity(day in 1u16..366) {
        let d = DayOfYear::new(day).unwrap();
        prop_assert_eq!(d.succ().and_then(DayOfYear::pred), Some(d));
    }

    #[test]
    fn confident_is_terminal(next in tier()) {
        prop_assert_eq!(
            ConfidenceTier::Confident.can_advance_to(next),
            next == ConfidenceTier::Confident
        );
    }
}
