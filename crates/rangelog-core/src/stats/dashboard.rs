//! Dashboard aggregation over logged sessions.
//!
//! Produces the headline numbers for the overview: totals, streaks,
//! this-week/this-month activity, and the recent-activity feed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::session::{Category, SessionRecord};

use super::streaks::{current_streak, longest_streak};

/// Session count for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub sessions: u64,
}

/// Headline dashboard numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSummary {
    pub total_sessions: u64,
    /// Distinct practice days since Monday of the current week.
    pub days_this_week: u64,
    /// Distinct practice days since the first of the current month.
    pub days_this_month: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub category_counts: Vec<CategoryCount>,
}

/// Build the dashboard summary from distinct practice dates and
/// per-category session counts.
pub fn summarize(
    dates: &[NaiveDate],
    counts: Vec<CategoryCount>,
    today: NaiveDate,
) -> PracticeSummary {
    let week_start = today - chrono::Days::new(u64::from(today.weekday().num_days_from_monday()));
    let month_start = today.with_day(1).unwrap_or(today);

    PracticeSummary {
        total_sessions: counts.iter().map(|c| c.sessions).sum(),
        days_this_week: dates.iter().filter(|d| **d >= week_start).count() as u64,
        days_this_month: dates.iter().filter(|d| **d >= month_start).count() as u64,
        current_streak: current_streak(dates, today),
        longest_streak: longest_streak(dates),
        category_counts: counts,
    }
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct RecentEntry {
    pub date: NaiveDate,
    pub category: &'static str,
    pub details: String,
}

/// The latest `limit` sessions across all categories, newest first.
pub fn recent_activity(records: &[SessionRecord], limit: usize) -> Vec<RecentEntry> {
    let mut entries: Vec<RecentEntry> = records
        .iter()
        .map(|r| RecentEntry {
            date: r.date,
            category: r.category.label(),
            details: r.summary(),
        })
        .collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);
    entries
}
