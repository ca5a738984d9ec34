//! Backyard three-hole loop: rounds and scoring stats.
//!
//! The course is fixed: hole 1 is a par 5 with a fairway, hole 2 a par 3
//! without one, hole 3 a par 4 with a fairway. Up-and-down conversions
//! only count on holes where a chance existed.

use serde::{Deserialize, Serialize};

/// Static hole data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u32,
    pub par: u32,
    pub has_fairway: bool,
}

/// The three holes of the loop.
pub fn holes() -> [Hole; 3] {
    [
        Hole { number: 1, par: 5, has_fairway: true },
        Hole { number: 2, par: 3, has_fairway: false },
        Hole { number: 3, par: 4, has_fairway: true },
    ]
}

/// Par for the full loop.
pub fn total_par() -> u32 {
    holes().iter().map(|h| h.par).sum()
}

/// One hole of a played round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleScore {
    pub score: u32,
    /// `None` on holes without a fairway.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fairway: Option<bool>,
    pub gir: bool,
    pub up_down_chance: bool,
    pub up_down_converted: bool,
    pub penalty: bool,
}

/// A full round on the loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopRound {
    /// Hole scores in course order; always three entries.
    pub holes: Vec<HoleScore>,
}

impl LoopRound {
    pub fn total_score(&self) -> u32 {
        self.holes.iter().map(|h| h.score).sum()
    }

    pub fn vs_par(&self) -> i32 {
        self.total_score() as i32 - total_par() as i32
    }

    pub fn had_penalty(&self) -> bool {
        self.holes.iter().any(|h| h.penalty)
    }

    /// Compact stat line like `FW 1/2 | GIR 2/3 | UD 1/1 | PEN 1`.
    pub fn stat_line(&self) -> String {
        let fw_hits = self.holes.iter().filter(|h| h.fairway == Some(true)).count();
        let fw_chances = self.holes.iter().filter(|h| h.fairway.is_some()).count();
        let gir = self.holes.iter().filter(|h| h.gir).count();
        let ud_chances = self.holes.iter().filter(|h| h.up_down_chance).count();
        let ud_converts = self
            .holes
            .iter()
            .filter(|h| h.up_down_chance && h.up_down_converted)
            .count();
        let penalties = self.holes.iter().filter(|h| h.penalty).count();

        let mut parts = vec![
            format!("FW {}/{}", fw_hits, fw_chances),
            format!("GIR {}/{}", gir, self.holes.len()),
        ];
        if ud_chances > 0 {
            parts.push(format!("UD {}/{}", ud_converts, ud_chances));
        }
        if penalties > 0 {
            parts.push(format!("PEN {}", penalties));
        }
        parts.join(" | ")
    }

    /// Per-round percentage rates for trend smoothing. The up-and-down
    /// rate is `None` on rounds with no chance.
    pub fn rates(&self) -> RoundRates {
        let fw_chances = self.holes.iter().filter(|h| h.fairway.is_some()).count();
        let fw_hits = self.holes.iter().filter(|h| h.fairway == Some(true)).count();
        let gir = self.holes.iter().filter(|h| h.gir).count();
        let ud_chances = self.holes.iter().filter(|h| h.up_down_chance).count();
        let ud_converts = self
            .holes
            .iter()
            .filter(|h| h.up_down_chance && h.up_down_converted)
            .count();

        RoundRates {
            fairway_pct: if fw_chances > 0 {
                fw_hits as f64 / fw_chances as f64 * 100.0
            } else {
                0.0
            },
            gir_pct: gir as f64 / self.holes.len() as f64 * 100.0,
            up_down_pct: (ud_chances > 0)
                .then(|| ud_converts as f64 / ud_chances as f64 * 100.0),
        }
    }
}

/// Percentage rates for a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRates {
    pub fairway_pct: f64,
    pub gir_pct: f64,
    pub up_down_pct: Option<f64>,
}

/// Average score vs par for one hole across all rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleAverage {
    pub hole: u32,
    pub par: u32,
    pub average_score: f64,
}

/// Aggregate stats over a set of rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopAggregates {
    pub rounds: usize,
    pub scoring_average: f64,
    pub vs_par_average: f64,
    pub fairway_pct: f64,
    pub gir_pct: f64,
    pub up_down_pct: f64,
    pub total_penalties: usize,
    pub penalties_per_round: f64,
    pub rounds_with_penalty: usize,
    pub hole_averages: Vec<HoleAverage>,
}

/// Aggregate a round history. An empty history yields all-zero stats.
pub fn aggregate(rounds: &[LoopRound]) -> LoopAggregates {
    let n = rounds.len();
    if n == 0 {
        return LoopAggregates {
            rounds: 0,
            scoring_average: 0.0,
            vs_par_average: 0.0,
            fairway_pct: 0.0,
            gir_pct: 0.0,
            up_down_pct: 0.0,
            total_penalties: 0,
            penalties_per_round: 0.0,
            rounds_with_penalty: 0,
            hole_averages: Vec::new(),
        };
    }

    let mut fw_hits = 0usize;
    let mut fw_chances = 0usize;
    let mut gir_hits = 0usize;
    let mut gir_chances = 0usize;
    let mut ud_converts = 0usize;
    let mut ud_chances = 0usize;
    let mut penalties = 0usize;

    for round in rounds {
        for hole in &round.holes {
            if let Some(hit) = hole.fairway {
                fw_chances += 1;
                if hit {
                    fw_hits += 1;
                }
            }
            gir_chances += 1;
            if hole.gir {
                gir_hits += 1;
            }
            if hole.up_down_chance {
                ud_chances += 1;
                if hole.up_down_converted {
                    ud_converts += 1;
                }
            }
            if hole.penalty {
                penalties += 1;
            }
        }
    }

    let course = holes();
    let hole_averages = course
        .iter()
        .enumerate()
        .map(|(i, hole)| {
            let sum: u32 = rounds.iter().filter_map(|r| r.holes.get(i)).map(|h| h.score).sum();
            HoleAverage {
                hole: hole.number,
                par: hole.par,
                average_score: f64::from(sum) / n as f64,
            }
        })
        .collect();

    let pct = |hits: usize, chances: usize| {
        if chances > 0 {
            hits as f64 / chances as f64 * 100.0
        } else {
            0.0
        }
    };

    LoopAggregates {
        rounds: n,
        scoring_average: rounds.iter().map(|r| f64::from(r.total_score())).sum::<f64>() / n as f64,
        vs_par_average: rounds.iter().map(|r| f64::from(r.vs_par())).sum::<f64>() / n as f64,
        fairway_pct: pct(fw_hits, fw_chances),
        gir_pct: pct(gir_hits, gir_chances),
        up_down_pct: pct(ud_converts, ud_chances),
        total_penalties: penalties,
        penalties_per_round: penalties as f64 / n as f64,
        rounds_with_penalty: rounds.iter().filter(|r| r.had_penalty()).count(),
        hole_averages,
    }
}
