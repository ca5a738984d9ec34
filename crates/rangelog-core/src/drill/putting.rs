//! Structured putting tests: lag drill, Swedish drill, Luke Donald drill.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::handicap::{closest_benchmark, interpolate, swedish_anchors, swedish_benchmarks};

// ── Lag drill ────────────────────────────────────────────────────────

/// Lag drill distances in feet.
pub const LAG_DISTANCES_FT: [u32; 3] = [30, 40, 50];

/// Putts per lag station.
pub const LAG_PUTTS_PER_STATION: u32 = 5;

/// Slope direction of a lag station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slope {
    Uphill,
    Downhill,
}

impl Slope {
    pub fn label(&self) -> &'static str {
        match self {
            Slope::Uphill => "Uphill",
            Slope::Downhill => "Downhill",
        }
    }
}

/// One lag drill station: a distance and slope combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LagStation {
    pub distance_ft: u32,
    pub slope: Slope,
}

impl LagStation {
    /// All six stations in entry order.
    pub fn all() -> Vec<LagStation> {
        let mut stations = Vec::with_capacity(6);
        for distance_ft in LAG_DISTANCES_FT {
            for slope in [Slope::Uphill, Slope::Downhill] {
                stations.push(LagStation { distance_ft, slope });
            }
        }
        stations
    }

    pub fn label(&self) -> String {
        format!("{}ft {}", self.distance_ft, self.slope.label())
    }

    /// Stable storage column key, e.g. `lag_30_uphill`.
    pub fn column(&self) -> String {
        format!(
            "lag_{}_{}",
            self.distance_ft,
            self.slope.label().to_lowercase()
        )
    }
}

/// A completed lag drill: putts in the box per station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LagResult {
    /// (station, putts in the box), one entry per station.
    pub stations: Vec<(LagStation, u32)>,
    /// Total putts in the box, out of [`lag_max_total`].
    pub total: u32,
}

/// Maximum lag drill total (all putts in the box at every station).
pub fn lag_max_total() -> u32 {
    LagStation::all().len() as u32 * LAG_PUTTS_PER_STATION
}

/// Validate per-station scores (entry order) and total them.
pub fn evaluate_lag(in_box: &[u32]) -> Result<LagResult, ValidationError> {
    let stations = LagStation::all();
    if in_box.len() != stations.len() {
        return Err(ValidationError::LengthMismatch {
            targets: stations.len(),
            actuals: in_box.len(),
        });
    }
    for (station, &score) in stations.iter().zip(in_box) {
        if score > LAG_PUTTS_PER_STATION {
            return Err(ValidationError::InvalidValue {
                field: station.column(),
                message: format!("at most {LAG_PUTTS_PER_STATION} putts per station"),
            });
        }
    }
    Ok(LagResult {
        total: in_box.iter().sum(),
        stations: stations.into_iter().zip(in_box.iter().copied()).collect(),
    })
}

// ── Swedish drill ────────────────────────────────────────────────────

/// The distance pool in meters; each distance is putted three times for
/// an 18-putt test.
pub const SWEDISH_DISTANCES_M: [u32; 6] = [22, 12, 18, 10, 14, 8];

/// Number of putts in a full Swedish test.
pub const SWEDISH_PUTT_COUNT: usize = 18;

/// Shuffled putt order for one Swedish test.
pub fn swedish_putt_order(seed: Option<u64>) -> Vec<u32> {
    let mut order: Vec<u32> = SWEDISH_DISTANCES_M.repeat(3);
    let mut rng = Mcg128Xsl64::seed_from_u64(seed.unwrap_or_else(rand::random));
    order.shuffle(&mut rng);
    order
}

/// Score a single putt from its finishing distance from the hole in
/// meters. Holed putts score -2 (eagle), anything beyond three meters
/// scores +3 (triple).
pub fn swedish_putt_score(dist_from_hole_m: f64) -> i32 {
    if dist_from_hole_m == 0.0 {
        -2
    } else if dist_from_hole_m <= 0.5 {
        -1
    } else if dist_from_hole_m <= 1.0 {
        0
    } else if dist_from_hole_m <= 2.0 {
        1
    } else if dist_from_hole_m <= 3.0 {
        2
    } else {
        3
    }
}

/// Golf-style label for a per-putt score.
pub fn swedish_score_label(score: i32) -> &'static str {
    match score {
        -2 => "Eagle",
        -1 => "Birdie",
        0 => "Par",
        1 => "Bogey",
        2 => "Double",
        _ => "Triple",
    }
}

/// One scored putt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuttResult {
    /// 1-based putt number in presentation order.
    pub putt: usize,
    pub distance_m: u32,
    pub from_hole_m: f64,
    pub score: i32,
    pub label: String,
}

/// Full outcome of one Swedish test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwedishReport {
    pub putts: Vec<PuttResult>,
    pub total_score: i32,
    /// Interpolated from the total via the benchmark anchors.
    pub putting_handicap: f64,
    /// Closest benchmark level label.
    pub level: String,
}

/// Score a full Swedish test from the putted distances and the measured
/// finishing distances, paired positionally.
pub fn evaluate_swedish(
    targets_m: &[u32],
    from_hole_m: &[f64],
) -> Result<SwedishReport, ValidationError> {
    if targets_m.len() != from_hole_m.len() {
        return Err(ValidationError::LengthMismatch {
            targets: targets_m.len(),
            actuals: from_hole_m.len(),
        });
    }

    let putts: Vec<PuttResult> = targets_m
        .iter()
        .zip(from_hole_m)
        .enumerate()
        .map(|(i, (&distance_m, &dist))| {
            let score = swedish_putt_score(dist);
            PuttResult {
                putt: i + 1,
                distance_m,
                from_hole_m: dist,
                score,
                label: swedish_score_label(score).to_string(),
            }
        })
        .collect();

    let total_score: i32 = putts.iter().map(|p| p.score).sum();
    let total = f64::from(total_score);
    let putting_handicap = interpolate(&swedish_anchors(), total);
    let benchmarks = swedish_benchmarks();
    let level = closest_benchmark(&benchmarks, total)
        .map(|b| b.label.clone())
        .unwrap_or_default();

    Ok(SwedishReport {
        putts,
        total_score,
        putting_handicap,
        level,
    })
}

// ── Stored putting test rows ─────────────────────────────────────────

/// Test-type labels used to partition the putting test history.
pub const TEST_LAG: &str = "Lag Drill";
pub const TEST_SWEDISH: &str = "Swedish Drill";
pub const TEST_LUKE_DONALD: &str = "Luke Donald Drill";

/// Stored session row for any putting test. Per-test fields (lag station
/// counts, Luke Donald makes) ride along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuttingTestLog {
    pub test_type: String,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub putting_hcp: Option<f64>,
    #[serde(flatten)]
    pub extra: std::collections::BTreeMap<String, serde_json::Value>,
}

// ── Luke Donald drill ────────────────────────────────────────────────

/// Putt distances in feet.
pub const LUKE_DONALD_DISTANCES_FT: [u32; 5] = [4, 5, 6, 7, 8];

/// Hole locations.
pub const LUKE_DONALD_HOLES: [u32; 4] = [1, 2, 3, 4];

/// Makes needed (out of 20) to pass the drill.
pub const LUKE_DONALD_GOAL: u32 = 15;

/// One putt of the drill: hole location, distance and whether it dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LukeDonaldAttempt {
    pub hole: u32,
    pub distance_ft: u32,
    pub made: bool,
}

/// All twenty attempts, misses included, in hole-then-distance order.
pub fn luke_donald_attempts(made: impl Fn(u32, u32) -> bool) -> Vec<LukeDonaldAttempt> {
    let mut attempts = Vec::with_capacity(20);
    for hole in LUKE_DONALD_HOLES {
        for distance_ft in LUKE_DONALD_DISTANCES_FT {
            attempts.push(LukeDonaldAttempt {
                hole,
                distance_ft,
                made: made(hole, distance_ft),
            });
        }
    }
    attempts
}

/// Tallied outcome of one Luke Donald drill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LukeDonaldResult {
    pub makes: u32,
    pub attempts: u32,
    pub goal: u32,
    pub goal_met: bool,
}

/// Tally makes and check the goal.
pub fn evaluate_luke_donald(attempts: &[LukeDonaldAttempt]) -> LukeDonaldResult {
    let makes = attempts.iter().filter(|a| a.made).count() as u32;
    LukeDonaldResult {
        makes,
        attempts: attempts.len() as u32,
        goal: LUKE_DONALD_GOAL,
        goal_met: makes >= LUKE_DONALD_GOAL,
    }
}

/// Make percentage per distance across many sessions' attempts.
///
/// Returns `(distance_ft, pct)` in distance order; distances with no
/// attempts are skipped.
pub fn distance_make_pcts(attempts: &[LukeDonaldAttempt]) -> Vec<(u32, f64)> {
    LUKE_DONALD_DISTANCES_FT
        .iter()
        .filter_map(|&distance_ft| {
            let at_distance: Vec<&LukeDonaldAttempt> = attempts
                .iter()
                .filter(|a| a.distance_ft == distance_ft)
                .collect();
            if at_distance.is_empty() {
                return None;
            }
            let makes = at_distance.iter().filter(|a| a.made).count();
            Some((distance_ft, makes as f64 / at_distance.len() as f64 * 100.0))
        })
        .collect()
}
