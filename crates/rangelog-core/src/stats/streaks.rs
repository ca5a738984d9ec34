//! Consecutive-day practice streaks.
//!
//! Both functions operate on plain date collections and take no notice of
//! how many sessions were logged on a given day -- a date counts once.
//! `current_streak` takes "today" as an explicit argument so the result is
//! a pure function of its inputs; callers pass `Local::now().date_naive()`.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Length of the consecutive-day run ending at the anchor day.
///
/// The anchor is `today` when today is on or after the most recent logged
/// date, otherwise the most recent logged date itself. A streak that ended
/// yesterday therefore still reports its full length; it only collapses to
/// zero once a day has actually been skipped before the anchor.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let Some(&latest) = days.last() else {
        return 0;
    };

    let mut check = if latest < today { latest } else { today };
    let mut streak = 0;
    while days.contains(&check) {
        streak += 1;
        match check.pred_opt() {
            Some(prev) => check = prev,
            None => break,
        }
    }
    streak
}

/// Length of the longest consecutive-day run anywhere in the set.
///
/// Duplicate dates collapse to a single occurrence. Returns 0 for an empty
/// input and 1 for a single date.
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    if days.is_empty() {
        return 0;
    }

    let mut best = 1u32;
    let mut run = 1u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in &days {
        if let Some(p) = prev {
            if p.succ_opt() == Some(day) {
                run += 1;
                best = best.max(run);
            } else {
                run = 1;
            }
        }
        prev = Some(day);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_input() {
        let today = d("2026-03-10");
        assert_eq!(current_streak(&[], today), 0);
        assert_eq!(longest_streak(&[]), 0);
    }

    #[test]
    fn test_single_date() {
        let dates = [d("2026-03-10")];
        assert_eq!(longest_streak(&dates), 1);
        assert_eq!(current_streak(&dates, d("2026-03-10")), 1);
    }

    #[test]
    fn test_longest_streak_order_independent() {
        let sorted = [d("2026-03-10"), d("2026-03-11"), d("2026-03-12")];
        let shuffled = [d("2026-03-12"), d("2026-03-10"), d("2026-03-11")];
        assert_eq!(longest_streak(&sorted), 3);
        assert_eq!(longest_streak(&shuffled), 3);
    }

    #[test]
    fn test_gap_splits_runs() {
        // D, D+1, D+3: the D..D+1 run wins
        let dates = [d("2026-03-10"), d("2026-03-11"), d("2026-03-13")];
        assert_eq!(longest_streak(&dates), 2);
        // Anchored at the latest date, only D+3 counts
        assert_eq!(current_streak(&dates, d("2026-03-14")), 1);
    }

    #[test]
    fn test_current_streak_survives_until_tomorrow() {
        // Practiced the 10th and 11th, checking on the 12th: the streak
        // ended yesterday but has not been broken yet.
        let dates = [d("2026-03-10"), d("2026-03-11")];
        assert_eq!(current_streak(&dates, d("2026-03-12")), 2);
        // By the 13th a full day was skipped.
        assert_eq!(current_streak(&dates, d("2026-03-13")), 0);
    }

    #[test]
    fn test_current_streak_anchored_today() {
        let dates = [d("2026-03-09"), d("2026-03-10"), d("2026-03-11")];
        assert_eq!(current_streak(&dates, d("2026-03-11")), 3);
    }

    #[test]
    fn test_current_streak_today_not_logged_yet() {
        // Today itself has no entry but yesterday does: anchor slides back
        // to the latest logged date.
        let dates = [d("2026-03-09"), d("2026-03-10")];
        assert_eq!(current_streak(&dates, d("2026-03-11")), 2);
    }

    #[test]
    fn test_duplicates_count_once() {
        let dates = [
            d("2026-03-10"),
            d("2026-03-10"),
            d("2026-03-11"),
            d("2026-03-11"),
        ];
        assert_eq!(longest_streak(&dates), 2);
        assert_eq!(current_streak(&dates, d("2026-03-11")), 2);
    }
}
