//! Tolerance-threshold grading for distance-control drills.
//!
//! A [`GradeScale`] holds the descending tolerance bands and the two
//! pass-rate bars. Grading compares target/actual pairs positionally and
//! reports the highest tier whose condition holds, together with the
//! per-threshold pass rates the results view shows.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Pass-rate statistics for one tolerance band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdStat {
    /// Tolerance in distance units (yards for the wedge ladder).
    pub tolerance: u32,
    /// Pairs within the tolerance.
    pub within: usize,
    /// Total pairs graded.
    pub total: usize,
    /// Pass rate as a percentage, rounded to one decimal.
    pub pct: f64,
}

/// Result of grading one drill attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResult {
    /// 0 (no tier reached) through the scale's maximum (5 by default).
    pub grade: u8,
    /// Stats per tolerance band, loosest first.
    pub thresholds: Vec<ThresholdStat>,
}

/// Grading scale: descending tolerances plus the base and full pass bars.
///
/// The default reproduces the wedge-ladder ladder: grade 1 at 50% within
/// 5 yards, grade 2 at 70% within 5, then one more grade for 70% within
/// each successively tighter band (4, 3, 2 yards).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeScale {
    /// Tolerances in strictly descending order, loosest first.
    pub tolerances: Vec<u32>,
    /// Pass rate (percent) at the loosest tolerance for grade 1.
    pub base_pass_pct: f64,
    /// Pass rate (percent) required for every higher grade.
    pub full_pass_pct: f64,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            tolerances: vec![5, 4, 3, 2],
            base_pass_pct: 50.0,
            full_pass_pct: 70.0,
        }
    }
}

impl GradeScale {
    /// Highest grade this scale can award.
    pub fn max_grade(&self) -> u8 {
        (self.tolerances.len() + 1) as u8
    }

    /// The loosest tolerance, used as the per-shot hit/miss line.
    pub fn hit_tolerance(&self) -> u32 {
        self.tolerances.first().copied().unwrap_or(0)
    }

    /// Grade paired target/actual measurements.
    ///
    /// The sequences must have equal length; mismatched lengths are a
    /// contract violation and fail fast rather than truncating. Empty
    /// input grades 0 with empty stats.
    pub fn grade(&self, targets: &[f64], actuals: &[f64]) -> Result<GradeResult, ValidationError> {
        if targets.len() != actuals.len() {
            return Err(ValidationError::LengthMismatch {
                targets: targets.len(),
                actuals: actuals.len(),
            });
        }
        let total = targets.len();
        if total == 0 {
            return Ok(GradeResult {
                grade: 0,
                thresholds: Vec::new(),
            });
        }

        let diffs: Vec<f64> = targets
            .iter()
            .zip(actuals)
            .map(|(t, a)| (t - a).abs())
            .collect();

        let thresholds: Vec<ThresholdStat> = self
            .tolerances
            .iter()
            .map(|&tolerance| {
                let within = diffs.iter().filter(|d| **d <= f64::from(tolerance)).count();
                let pct = (within as f64 / total as f64 * 1000.0).round() / 10.0;
                ThresholdStat {
                    tolerance,
                    within,
                    total,
                    pct,
                }
            })
            .collect();

        let mut grade = 0u8;
        if let Some(loosest) = thresholds.first() {
            if loosest.pct >= self.base_pass_pct {
                grade = 1;
            }
            if loosest.pct >= self.full_pass_pct {
                grade = 2;
            }
        }
        for (i, stat) in thresholds.iter().enumerate().skip(1) {
            if stat.pct >= self.full_pass_pct {
                grade = (i + 2) as u8;
            }
        }

        Ok(GradeResult { grade, thresholds })
    }

    /// Human-readable grade ladder, one line per tier.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(&loosest) = self.tolerances.first() {
            lines.push(format!(
                "Grade 1: {:.0}% of shots within {} yards",
                self.base_pass_pct, loosest
            ));
            for (i, &tolerance) in self.tolerances.iter().enumerate() {
                lines.push(format!(
                    "Grade {}: {:.0}% of shots within {} yards",
                    i + 2,
                    self.full_pass_pct,
                    tolerance
                ));
            }
        }
        lines
    }
}
