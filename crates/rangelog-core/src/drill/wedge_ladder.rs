//! Wedge ladder: distance-control drill with graded results.
//!
//! A ladder runs from a start to an end distance in fixed steps, either
//! ascending or shuffled. Submitted carries are graded against the
//! tolerance scale and reported shot by shot.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::grading::{GradeResult, GradeScale};

/// Target presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderMode {
    InOrder,
    Random,
}

impl LadderMode {
    pub fn label(&self) -> &'static str {
        match self {
            LadderMode::InOrder => "in_order",
            LadderMode::Random => "random",
        }
    }
}

/// Ladder configuration: distance range, step and presentation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderConfig {
    pub start_yards: u32,
    pub end_yards: u32,
    pub step_yards: u32,
    pub mode: LadderMode,
}

impl LadderConfig {
    pub fn new(start_yards: u32, end_yards: u32, mode: LadderMode) -> Self {
        Self {
            start_yards,
            end_yards,
            step_yards: 5,
            mode,
        }
    }

    /// Generate the target sequence.
    ///
    /// The start distance must lie strictly below the end distance. In
    /// random mode the shuffle is seeded so a drill can be reproduced.
    pub fn targets(&self, seed: Option<u64>) -> Result<Vec<u32>, ValidationError> {
        if self.start_yards >= self.end_yards {
            return Err(ValidationError::InvalidValue {
                field: "start_yards".to_string(),
                message: format!(
                    "start distance ({}) must be less than end distance ({})",
                    self.start_yards, self.end_yards
                ),
            });
        }
        if self.step_yards == 0 {
            return Err(ValidationError::InvalidValue {
                field: "step_yards".to_string(),
                message: "step must be at least 1 yard".to_string(),
            });
        }

        let mut targets: Vec<u32> = (self.start_yards..=self.end_yards)
            .step_by(self.step_yards as usize)
            .collect();
        if self.mode == LadderMode::Random {
            let mut rng = Mcg128Xsl64::seed_from_u64(seed.unwrap_or_else(rand::random));
            targets.shuffle(&mut rng);
        }
        Ok(targets)
    }
}

/// Where a shot finished relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotDirection {
    Short,
    Long,
    Perfect,
}

/// One graded shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotResult {
    /// 1-based shot number in presentation order.
    pub shot: usize,
    pub target_yards: u32,
    pub actual_yards: f64,
    /// Signed carry error (actual - target).
    pub diff_yards: f64,
    pub direction: ShotDirection,
    /// Within the loosest tolerance band.
    pub hit: bool,
}

/// Full graded outcome of one ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderReport {
    pub grade: u8,
    pub thresholds: Vec<crate::grading::ThresholdStat>,
    pub shots: Vec<ShotResult>,
}

/// Stored session row for a completed ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderLog {
    pub mode: LadderMode,
    pub start_distance: u32,
    pub end_distance: u32,
    pub total_shots: usize,
    pub grade: u8,
    pub thresholds: Vec<crate::grading::ThresholdStat>,
}

impl LadderLog {
    pub fn from_report(config: &LadderConfig, report: &LadderReport) -> Self {
        Self {
            mode: config.mode,
            start_distance: config.start_yards,
            end_distance: config.end_yards,
            total_shots: report.shots.len(),
            grade: report.grade,
            thresholds: report.thresholds.clone(),
        }
    }
}

/// Grade submitted carries against the ladder targets.
pub fn evaluate(
    targets: &[u32],
    actuals: &[f64],
    scale: &GradeScale,
) -> Result<LadderReport, ValidationError> {
    let target_yards: Vec<f64> = targets.iter().map(|&t| f64::from(t)).collect();
    let GradeResult { grade, thresholds } = scale.grade(&target_yards, actuals)?;

    let hit_line = f64::from(scale.hit_tolerance());
    let shots = targets
        .iter()
        .zip(actuals)
        .enumerate()
        .map(|(i, (&target, &actual))| {
            let diff = actual - f64::from(target);
            let direction = if diff < 0.0 {
                ShotDirection::Short
            } else if diff > 0.0 {
                ShotDirection::Long
            } else {
                ShotDirection::Perfect
            };
            ShotResult {
                shot: i + 1,
                target_yards: target,
                actual_yards: actual,
                diff_yards: diff,
                direction,
                hit: diff.abs() <= hit_line,
            }
        })
        .collect();

    Ok(LadderReport {
        grade,
        thresholds,
        shots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_in_order() {
        let config = LadderConfig::new(40, 60, LadderMode::InOrder);
        assert_eq!(config.targets(None).unwrap(), vec![40, 45, 50, 55, 60]);
    }

    #[test]
    fn test_targets_random_is_permutation() {
        let config = LadderConfig::new(40, 120, LadderMode::Random);
        let mut shuffled = config.targets(Some(7)).unwrap();
        let ordered: Vec<u32> = (40..=120).step_by(5).collect();
        assert_ne!(shuffled, ordered);
        shuffled.sort_unstable();
        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn test_targets_random_seed_reproducible() {
        let config = LadderConfig::new(40, 120, LadderMode::Random);
        assert_eq!(
            config.targets(Some(42)).unwrap(),
            config.targets(Some(42)).unwrap()
        );
    }

    #[test]
    fn test_targets_rejects_inverted_range() {
        let config = LadderConfig::new(120, 40, LadderMode::InOrder);
        assert!(config.targets(None).is_err());
    }

    #[test]
    fn test_evaluate_shot_report() {
        let targets = [40, 45, 50];
        let actuals = [40.0, 43.0, 58.0];
        let report = evaluate(&targets, &actuals, &GradeScale::default()).unwrap();

        assert_eq!(report.shots.len(), 3);
        assert_eq!(report.shots[0].direction, ShotDirection::Perfect);
        assert!(report.shots[0].hit);
        assert_eq!(report.shots[1].direction, ShotDirection::Short);
        assert_eq!(report.shots[1].diff_yards, -2.0);
        assert!(report.shots[1].hit);
        assert_eq!(report.shots[2].direction, ShotDirection::Long);
        assert!(!report.shots[2].hit);
    }

    #[test]
    fn test_evaluate_mismatched_lengths() {
        let report = evaluate(&[40, 45], &[40.0], &GradeScale::default());
        assert!(report.is_err());
    }
}
