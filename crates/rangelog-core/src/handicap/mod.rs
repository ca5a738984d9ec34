//! Score-to-handicap lookup and interpolation.
//!
//! Two deliberately separate strategies live here:
//!
//! - [`HandicapTable::lookup`] is the coarse per-shot-type lookup: exact
//!   match, clamp at the table edges, and "not available" for interior
//!   gaps. It never interpolates.
//! - [`interpolate`] is the aggregate-score routine used by the Swedish
//!   putting test: piecewise-linear between fixed anchor points, always
//!   producing a number.
//!
//! Callers must not substitute one for the other.

mod scorecard;
mod tables;

pub use scorecard::{average_handicap_series, Scorecard, ScorecardLine, TestingLog};
pub use tables::{
    default_testing_lookup, swedish_anchors, swedish_benchmarks, ShotType, TestingLookup,
};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One row of a shot-type lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub score: i32,
    pub handicap: f64,
}

/// A named score-to-handicap table, ordered by score ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandicapTable {
    name: String,
    entries: Vec<TableEntry>,
}

impl HandicapTable {
    /// Build a table, enforcing strictly ascending unique scores.
    pub fn new(name: impl Into<String>, entries: Vec<TableEntry>) -> Result<Self, ValidationError> {
        let name = name.into();
        for pair in entries.windows(2) {
            if pair[1].score <= pair[0].score {
                return Err(ValidationError::MalformedTable {
                    table: name,
                    message: format!(
                        "scores must be strictly ascending ({} then {})",
                        pair[0].score, pair[1].score
                    ),
                });
            }
        }
        Ok(Self { name, entries })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Highest score the table defines, used to bound input forms.
    pub fn max_score(&self) -> Option<i32> {
        self.entries.last().map(|e| e.score)
    }

    /// Look up the handicap for a raw score.
    ///
    /// Exact matches return the entry's handicap. A score below the
    /// table's minimum clamps to the worst (first) entry, a score above
    /// the maximum clamps to the best (last) entry. A score strictly
    /// inside the range with no entry returns `None` -- "not available",
    /// which callers must not conflate with a handicap of zero.
    pub fn lookup(&self, raw_score: i32) -> Option<f64> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;

        if raw_score < first.score {
            return Some(first.handicap);
        }
        if raw_score > last.score {
            return Some(last.handicap);
        }
        self.entries
            .iter()
            .find(|e| e.score == raw_score)
            .map(|e| e.handicap)
    }
}

/// A fixed anchor point for aggregate-score interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub score: f64,
    pub handicap: f64,
}

/// Piecewise-linear interpolation over ordered anchors.
///
/// Inputs outside the anchor range clamp to the boundary handicap, so the
/// result is always numeric. An empty anchor list yields 0.0; the built-in
/// anchor sets are never empty.
pub fn interpolate(anchors: &[Anchor], total_score: f64) -> f64 {
    let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
        return 0.0;
    };

    if total_score <= first.score {
        return first.handicap;
    }
    if total_score >= last.score {
        return last.handicap;
    }
    for pair in anchors.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if total_score <= hi.score {
            let span = hi.score - lo.score;
            if span == 0.0 {
                return lo.handicap;
            }
            let t = (total_score - lo.score) / span;
            return lo.handicap + t * (hi.handicap - lo.handicap);
        }
    }
    last.handicap
}

/// A labeled benchmark score (e.g. "Tour Player" at -5.5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub score: f64,
    pub label: String,
}

/// The benchmark whose score is closest to `total_score`.
///
/// Ties resolve to the earlier entry in the list.
pub fn closest_benchmark<'a>(benchmarks: &'a [Benchmark], total_score: f64) -> Option<&'a Benchmark> {
    let mut best: Option<&Benchmark> = None;
    for benchmark in benchmarks {
        match best {
            Some(current) if (benchmark.score - total_score).abs() >= (current.score - total_score).abs() => {}
            _ => best = Some(benchmark),
        }
    }
    best
}
