//! # Rangelog Core Library
//!
//! This library provides the core logic for Rangelog, a personal golf
//! practice tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary over this one
//! library.
//!
//! ## Architecture
//!
//! - **Stats**: Pure derivations shared by every view -- day streaks,
//!   trailing moving averages, dashboard aggregation
//! - **Handicap**: Score-to-handicap lookup tables (clamp at the edges,
//!   "not available" in interior gaps) and the separate aggregate-score
//!   interpolation used by the Swedish putting test
//! - **Grading**: Tolerance-threshold grading for distance-control drills
//! - **Drill**: Interactive drills behind an explicit session state
//!   machine (idle, awaiting results, reviewing results)
//! - **Storage**: SQLite session storage and TOML configuration
//!
//! ## Key Components
//!
//! - [`Database`]: Session persistence and dashboard queries
//! - [`Config`]: Application configuration management
//! - [`DrillSession`]: Drill lifecycle state machine
//! - [`HandicapTable`]: Per-shot-type score lookup

pub mod course;
pub mod drill;
pub mod error;
pub mod grading;
pub mod handicap;
pub mod reference;
pub mod session;
pub mod stats;
pub mod storage;

pub use drill::{ActiveDrill, DrillOutcome, DrillSession, DrillState};
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use grading::{GradeResult, GradeScale, ThresholdStat};
pub use handicap::{Anchor, Benchmark, HandicapTable, TableEntry, TestingLookup};
pub use session::{Category, SessionRecord};
pub use stats::{current_streak, longest_streak, rolling_average, PracticeSummary};
pub use storage::{Config, Database};
