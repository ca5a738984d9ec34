//! Short-game testing scorecard.
//!
//! One test session records a raw score per shot type; the scorecard
//! resolves each through its lookup table and averages the handicaps
//! that resolved. Shots with no score (or zero) were not attempted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ShotType, TestingLookup};

/// Raw scores for one short-game test session, keyed by shot type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestingLog {
    #[serde(rename = "50_yards_f", skip_serializing_if = "Option::is_none", default)]
    pub fifty_yards_f: Option<u32>,
    #[serde(rename = "30_yards_f", skip_serializing_if = "Option::is_none", default)]
    pub thirty_yards_f: Option<u32>,
    #[serde(rename = "10_f_chip", skip_serializing_if = "Option::is_none", default)]
    pub ten_f_chip: Option<u32>,
    #[serde(rename = "20_yards_r", skip_serializing_if = "Option::is_none", default)]
    pub twenty_yards_r: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flop: Option<u32>,
    #[serde(rename = "15_f_pitch", skip_serializing_if = "Option::is_none", default)]
    pub fifteen_f_pitch: Option<u32>,
    #[serde(rename = "8_yard_sand", skip_serializing_if = "Option::is_none", default)]
    pub eight_yard_sand: Option<u32>,
    #[serde(rename = "15_yard_sand", skip_serializing_if = "Option::is_none", default)]
    pub fifteen_yard_sand: Option<u32>,
}

impl TestingLog {
    /// The attempted score for a shot type. Zero counts as not attempted.
    pub fn score(&self, shot: ShotType) -> Option<u32> {
        let raw = match shot {
            ShotType::FiftyYardsF => self.fifty_yards_f,
            ShotType::ThirtyYardsF => self.thirty_yards_f,
            ShotType::TenFChip => self.ten_f_chip,
            ShotType::TwentyYardsR => self.twenty_yards_r,
            ShotType::Flop => self.flop,
            ShotType::FifteenFPitch => self.fifteen_f_pitch,
            ShotType::EightYardSand => self.eight_yard_sand,
            ShotType::FifteenYardSand => self.fifteen_yard_sand,
        };
        raw.filter(|&v| v > 0)
    }

    pub fn set_score(&mut self, shot: ShotType, value: u32) {
        let slot = match shot {
            ShotType::FiftyYardsF => &mut self.fifty_yards_f,
            ShotType::ThirtyYardsF => &mut self.thirty_yards_f,
            ShotType::TenFChip => &mut self.ten_f_chip,
            ShotType::TwentyYardsR => &mut self.twenty_yards_r,
            ShotType::Flop => &mut self.flop,
            ShotType::FifteenFPitch => &mut self.fifteen_f_pitch,
            ShotType::EightYardSand => &mut self.eight_yard_sand,
            ShotType::FifteenYardSand => &mut self.fifteen_yard_sand,
        };
        *slot = Some(value);
    }

    /// Number of shot types with an attempted score.
    pub fn shots_entered(&self) -> usize {
        ShotType::all().iter().filter(|s| self.score(**s).is_some()).count()
    }
}

/// One scorecard row: a shot type with its raw score and resolved handicap.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardLine {
    pub shot_type: &'static str,
    pub score: Option<u32>,
    /// `None` either because the shot was not attempted or because the
    /// score fell in an interior gap of the lookup table.
    pub handicap: Option<f64>,
}

/// A resolved test session.
#[derive(Debug, Clone, Serialize)]
pub struct Scorecard {
    pub lines: Vec<ScorecardLine>,
    /// Shot types with an attempted score.
    pub shots_tested: usize,
    /// Shot types whose score resolved to a handicap.
    pub shots_rated: usize,
    /// Mean over the resolved handicaps; `None` when nothing resolved.
    pub average_handicap: Option<f64>,
}

impl Scorecard {
    /// Resolve a test session against the lookup tables.
    pub fn evaluate(log: &TestingLog, lookup: &TestingLookup) -> Scorecard {
        let mut lines = Vec::with_capacity(8);
        let mut total = 0.0;
        let mut rated = 0usize;
        let mut tested = 0usize;

        for shot in ShotType::all() {
            let score = log.score(shot);
            let handicap = match score {
                Some(raw) => {
                    tested += 1;
                    lookup
                        .table(shot)
                        .and_then(|t| t.lookup(raw as i32))
                }
                None => None,
            };
            if let Some(h) = handicap {
                total += h;
                rated += 1;
            }
            lines.push(ScorecardLine {
                shot_type: shot.label(),
                score,
                handicap,
            });
        }

        Scorecard {
            lines,
            shots_tested: tested,
            shots_rated: rated,
            average_handicap: (rated > 0).then(|| total / rated as f64),
        }
    }
}

/// Per-session average handicap history, oldest first.
///
/// Sessions where no shot resolved to a handicap are skipped, matching
/// the trend view that has nothing to plot for them.
pub fn average_handicap_series(
    sessions: &[(NaiveDate, TestingLog)],
    lookup: &TestingLookup,
) -> Vec<(NaiveDate, f64)> {
    let mut series: Vec<(NaiveDate, f64)> = sessions
        .iter()
        .filter_map(|(date, log)| {
            Scorecard::evaluate(log, lookup)
                .average_handicap
                .map(|avg| (*date, avg))
        })
        .collect();
    series.sort_by_key(|(date, _)| *date);
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handicap::default_testing_lookup;

    #[test]
    fn test_scorecard_counts_and_average() {
        let lookup = default_testing_lookup();
        let mut log = TestingLog::default();
        log.set_score(ShotType::FiftyYardsF, 15); // 0.0
        log.set_score(ShotType::Flop, 7); // 10.0

        let card = Scorecard::evaluate(&log, &lookup);
        assert_eq!(card.shots_tested, 2);
        assert_eq!(card.shots_rated, 2);
        assert_eq!(card.average_handicap, Some(5.0));
        assert_eq!(card.lines.len(), 8);
    }

    #[test]
    fn test_scorecard_gap_not_counted_in_average() {
        let lookup = default_testing_lookup();
        let mut log = TestingLog::default();
        log.set_score(ShotType::Flop, 13); // interior gap
        log.set_score(ShotType::FiftyYardsF, 15); // 0.0

        let card = Scorecard::evaluate(&log, &lookup);
        assert_eq!(card.shots_tested, 2);
        assert_eq!(card.shots_rated, 1);
        assert_eq!(card.average_handicap, Some(0.0));
    }

    #[test]
    fn test_scorecard_zero_score_is_untested() {
        let lookup = default_testing_lookup();
        let log = TestingLog {
            flop: Some(0),
            ..Default::default()
        };
        let card = Scorecard::evaluate(&log, &lookup);
        assert_eq!(card.shots_tested, 0);
        assert_eq!(card.average_handicap, None);
    }

    #[test]
    fn test_average_series_skips_unrated_sessions() {
        let lookup = default_testing_lookup();
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

        let mut rated = TestingLog::default();
        rated.set_score(ShotType::FiftyYardsF, 10);
        let unrated = TestingLog::default();

        let sessions = vec![
            (d("2026-03-05"), rated),
            (d("2026-03-01"), unrated),
        ];
        let series = average_handicap_series(&sessions, &lookup);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].0, d("2026-03-05"));
        assert_eq!(series[0].1, 10.0);
    }
}
