//! Property tests for the pure derivation functions.

use chrono::NaiveDate;
use proptest::prelude::*;
use rangelog_core::grading::GradeScale;
use rangelog_core::handicap::{interpolate, Anchor, HandicapTable, TableEntry};
use rangelog_core::stats::{current_streak, longest_streak, rolling_average};

fn arb_dates() -> impl Strategy<Value = Vec<NaiveDate>> {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    prop::collection::vec(0i64..400, 0..40).prop_map(move |offsets| {
        offsets
            .into_iter()
            .map(|off| base + chrono::Days::new(off as u64))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_longest_streak_is_order_independent(mut dates in arb_dates()) {
        let forward = longest_streak(&dates);
        dates.reverse();
        prop_assert_eq!(forward, longest_streak(&dates));
    }

    #[test]
    fn prop_streaks_bounded_by_distinct_days(dates in arb_dates(), today_off in 0i64..500) {
        let distinct: std::collections::BTreeSet<_> = dates.iter().copied().collect();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
            + chrono::Days::new(today_off as u64);
        prop_assert!(longest_streak(&dates) as usize <= distinct.len());
        prop_assert!(current_streak(&dates, today) <= longest_streak(&dates));
    }

    #[test]
    fn prop_rolling_average_preserves_length(
        series in prop::collection::vec(-1000.0f64..1000.0, 0..50),
        window in 1usize..10,
    ) {
        let out = rolling_average(&series, window);
        prop_assert_eq!(out.len(), series.len());
        if let (Some(first_in), Some(first_out)) = (series.first(), out.first()) {
            prop_assert!((first_in - first_out).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_rolling_average_idempotent_inputs(
        series in prop::collection::vec(-1000.0f64..1000.0, 0..50),
        window in 1usize..10,
    ) {
        prop_assert_eq!(
            rolling_average(&series, window),
            rolling_average(&series, window)
        );
    }

    #[test]
    fn prop_lookup_never_invents_values(score in -50i32..80) {
        let table = HandicapTable::new(
            "prop",
            vec![
                TableEntry { score: 5, handicap: 20.0 },
                TableEntry { score: 10, handicap: 10.0 },
                TableEntry { score: 15, handicap: 0.0 },
            ],
        ).unwrap();
        match table.lookup(score) {
            Some(h) => prop_assert!(h == 20.0 || h == 10.0 || h == 0.0),
            None => {
                // Only interior gaps come back unavailable.
                prop_assert!(score > 5 && score < 15);
            }
        }
    }

    #[test]
    fn prop_interpolation_stays_within_anchor_range(total in -30.0f64..30.0) {
        let anchors = vec![
            Anchor { score: 0.2, handicap: -2.0 },
            Anchor { score: 2.0, handicap: 0.0 },
            Anchor { score: 6.3, handicap: 5.0 },
            Anchor { score: 10.7, handicap: 10.0 },
        ];
        let h = interpolate(&anchors, total);
        prop_assert!((-2.0..=10.0).contains(&h));
    }

    #[test]
    fn prop_grade_is_monotonic_in_accuracy(
        targets in prop::collection::vec(20.0f64..120.0, 1..20),
        error in 0.0f64..10.0,
    ) {
        let scale = GradeScale::default();
        let exact: Vec<f64> = targets.clone();
        let scattered: Vec<f64> = targets.iter().map(|t| t + error).collect();

        let perfect = scale.grade(&targets, &exact).unwrap();
        let worse = scale.grade(&targets, &scattered).unwrap();
        prop_assert_eq!(perfect.grade, 5);
        prop_assert!(worse.grade <= perfect.grade);
    }
}
