//! Interactive drills and the session state machine that runs them.
//!
//! A multi-step drill (wedge ladder, Swedish test) generates its targets
//! up front, waits for the player to report results, and then holds the
//! graded outcome for review. That lifecycle is an explicit state
//! machine rather than ambient flags:
//!
//! ```text
//! Idle -> AwaitingResults -> ReviewingResults -> Idle
//!      start              submit              cancel
//! ```
//!
//! `cancel` abandons a drill from either non-idle state. The session is
//! a plain serializable value, persisted in the key-value store between
//! invocations the same way the timer engine state is in comparable
//! trackers.

pub mod putting;
pub mod wedge_ladder;

pub use putting::{
    distance_make_pcts, evaluate_lag, evaluate_luke_donald, evaluate_swedish, lag_max_total,
    luke_donald_attempts, swedish_putt_order, swedish_putt_score, swedish_score_label, LagResult,
    LagStation, LukeDonaldAttempt, LukeDonaldResult, PuttResult, PuttingTestLog, Slope,
    SwedishReport, LUKE_DONALD_DISTANCES_FT, LUKE_DONALD_GOAL, LUKE_DONALD_HOLES, TEST_LAG,
    TEST_LUKE_DONALD, TEST_SWEDISH,
};
pub use wedge_ladder::{
    LadderConfig, LadderLog, LadderMode, LadderReport, ShotDirection, ShotResult,
};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::grading::GradeScale;

/// Lifecycle state of a drill session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillState {
    Idle,
    AwaitingResults,
    ReviewingResults,
}

impl DrillState {
    pub fn label(&self) -> &'static str {
        match self {
            DrillState::Idle => "idle",
            DrillState::AwaitingResults => "awaiting_results",
            DrillState::ReviewingResults => "reviewing_results",
        }
    }
}

/// A drill in progress, with its generated target sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActiveDrill {
    WedgeLadder {
        config: LadderConfig,
        targets: Vec<u32>,
    },
    Swedish {
        targets_m: Vec<u32>,
    },
}

impl ActiveDrill {
    pub fn kind_label(&self) -> &'static str {
        match self {
            ActiveDrill::WedgeLadder { .. } => "wedge_ladder",
            ActiveDrill::Swedish { .. } => "swedish",
        }
    }

    /// Number of results the player must report.
    pub fn expected_results(&self) -> usize {
        match self {
            ActiveDrill::WedgeLadder { targets, .. } => targets.len(),
            ActiveDrill::Swedish { targets_m } => targets_m.len(),
        }
    }
}

/// Graded outcome of a submitted drill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrillOutcome {
    WedgeLadder(LadderReport),
    Swedish(SwedishReport),
}

/// The drill session state machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrillSession {
    state: DrillState,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    drill: Option<ActiveDrill>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    outcome: Option<DrillOutcome>,
}

impl Default for DrillState {
    fn default() -> Self {
        DrillState::Idle
    }
}

impl DrillSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DrillState {
        self.state
    }

    /// The drill awaiting results or under review, if any.
    pub fn active(&self) -> Option<&ActiveDrill> {
        self.drill.as_ref()
    }

    /// The graded outcome while in `ReviewingResults`.
    pub fn outcome(&self) -> Option<&DrillOutcome> {
        self.outcome.as_ref()
    }

    /// Begin a drill. Only valid from `Idle`.
    pub fn start(&mut self, drill: ActiveDrill) -> Result<&ActiveDrill, ValidationError> {
        if self.state != DrillState::Idle {
            return Err(ValidationError::InvalidTransition {
                action: "start",
                state: self.state.label(),
            });
        }
        self.state = DrillState::AwaitingResults;
        self.outcome = None;
        Ok(self.drill.insert(drill))
    }

    /// Submit results for the active drill. Only valid from
    /// `AwaitingResults`; grades the attempt and moves to
    /// `ReviewingResults`.
    pub fn submit(
        &mut self,
        results: &[f64],
        scale: &GradeScale,
    ) -> Result<&DrillOutcome, ValidationError> {
        let Some(drill) = self.drill.as_ref().filter(|_| self.state == DrillState::AwaitingResults)
        else {
            return Err(ValidationError::InvalidTransition {
                action: "submit",
                state: self.state.label(),
            });
        };

        let outcome = match drill {
            ActiveDrill::WedgeLadder { targets, .. } => {
                DrillOutcome::WedgeLadder(wedge_ladder::evaluate(targets, results, scale)?)
            }
            ActiveDrill::Swedish { targets_m } => {
                DrillOutcome::Swedish(putting::evaluate_swedish(targets_m, results)?)
            }
        };

        self.state = DrillState::ReviewingResults;
        Ok(self.outcome.insert(outcome))
    }

    /// Abandon the active drill or leave the review, returning to `Idle`.
    pub fn cancel(&mut self) -> Result<(), ValidationError> {
        if self.state == DrillState::Idle {
            return Err(ValidationError::InvalidTransition {
                action: "cancel",
                state: self.state.label(),
            });
        }
        self.state = DrillState::Idle;
        self.drill = None;
        self.outcome = None;
        Ok(())
    }
}
