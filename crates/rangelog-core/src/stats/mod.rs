//! Statistics module for Rangelog
//!
//! Pure derivations shared by every history view: consecutive-day streaks,
//! trailing moving averages, and the dashboard aggregation built on top of
//! them.

mod dashboard;
mod rolling;
mod streaks;

pub use dashboard::{recent_activity, summarize, CategoryCount, PracticeSummary, RecentEntry};
pub use rolling::{rolling_average, rolling_average_sparse};
pub use streaks::{current_streak, longest_streak};
