//! Practice categories and session records.
//!
//! Every logged session belongs to one [`Category`] and carries a
//! category-specific payload (drill counts for the practice log, graded
//! results for the drills). Payloads are stored as JSON next to the date
//! so the schema can differ per category without one table per shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Practice categories tracked by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BallStriking,
    Putting,
    ShortGame,
    Testing,
    ThreeHoleLoop,
    WedgeLadder,
    PuttingTesting,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> [Category; 7] {
        [
            Category::BallStriking,
            Category::Putting,
            Category::ShortGame,
            Category::Testing,
            Category::ThreeHoleLoop,
            Category::WedgeLadder,
            Category::PuttingTesting,
        ]
    }

    /// Stable storage key.
    pub fn key(&self) -> &'static str {
        match self {
            Category::BallStriking => "ball_striking",
            Category::Putting => "putting",
            Category::ShortGame => "short_game",
            Category::Testing => "testing",
            Category::ThreeHoleLoop => "three_hole_loop",
            Category::WedgeLadder => "wedge_ladder",
            Category::PuttingTesting => "putting_testing",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::BallStriking => "Ball Striking",
            Category::Putting => "Putting",
            Category::ShortGame => "Short Game",
            Category::Testing => "Short Game Testing",
            Category::ThreeHoleLoop => "3-Hole Loop",
            Category::WedgeLadder => "Wedge Ladder",
            Category::PuttingTesting => "Putting Testing",
        }
    }

    /// Parse a storage key back into a category.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::all().into_iter().find(|c| c.key() == key)
    }
}

/// A ball-striking practice session. Each field is the amount of that
/// drill performed; absent drills stay `None` so the history view can
/// skip them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallStrikingLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanical_no_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub towel_drill_3x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyes_close_strike_3x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toe_heel_center_3x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jump_the_ball: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wedge_ladder_3x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crazy_shit_1x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_handed_pitch_3x: Option<u32>,
}

impl BallStrikingLog {
    /// Number of drills with a logged amount.
    pub fn drills_logged(&self) -> usize {
        [
            self.mechanical_no_results,
            self.towel_drill_3x,
            self.eyes_close_strike_3x,
            self.toe_heel_center_3x,
            self.jump_the_ball,
            self.wedge_ladder_3x,
            self.crazy_shit_1x,
            self.one_handed_pitch_3x,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }
}

/// A putting practice session (sets per drill).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PuttingLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_foot_drill: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess_the_slope: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lag_drill: Option<u32>,
}

impl PuttingLog {
    pub fn drills_logged(&self) -> usize {
        [self.three_foot_drill, self.guess_the_slope, self.lag_drill]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

/// A stored session row: date, category, and the category-specific payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    pub category: Category,
    pub date: NaiveDate,
    pub payload: serde_json::Value,
}

impl SessionRecord {
    /// Compact one-line summary of the payload for activity feeds.
    ///
    /// Skips nulls, zeros and `false` flags; remaining fields render as
    /// "Field Name: value" joined by commas.
    pub fn summary(&self) -> String {
        let Some(fields) = self.payload.as_object() else {
            return String::new();
        };
        let mut parts = Vec::new();
        for (key, value) in fields {
            if key == "date" {
                continue;
            }
            let rendered = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::Bool(false) => continue,
                serde_json::Value::Bool(true) => "yes".to_string(),
                serde_json::Value::Number(n) => {
                    if n.as_f64() == Some(0.0) {
                        continue;
                    }
                    match n.as_i64() {
                        Some(i) => i.to_string(),
                        None => format!("{:.1}", n.as_f64().unwrap_or(0.0)),
                    }
                }
                serde_json::Value::String(s) => s.clone(),
                _ => continue,
            };
            parts.push(format!("{}: {}", title_case(key), rendered));
        }
        parts.join(", ")
    }
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
