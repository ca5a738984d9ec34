use clap::Subcommand;
use rangelog_core::drill::{
    distance_make_pcts, evaluate_lag, evaluate_luke_donald, lag_max_total, LukeDonaldAttempt,
    PuttingTestLog, TEST_LAG, TEST_LUKE_DONALD, TEST_SWEDISH, LUKE_DONALD_DISTANCES_FT,
    LUKE_DONALD_GOAL, LUKE_DONALD_HOLES,
};
use rangelog_core::session::Category;
use rangelog_core::stats::rolling_average;
use rangelog_core::storage::{Config, Database};

#[derive(Subcommand)]
pub enum PuttingAction {
    /// Lag drill: putts in the box per station
    Lag {
        /// Six counts in station order (30ft up/down, 40ft up/down, 50ft
        /// up/down), e.g. --scores 4,3,5,2,4,3
        #[arg(long)]
        scores: String,
        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Luke Donald drill: made putts per hole
    LukeDonald {
        /// Makes per hole as HOLE=DIST,DIST e.g. --made 1=4,5,6 (repeatable)
        #[arg(long = "made", value_name = "HOLE=DISTANCES")]
        made: Vec<String>,
        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Putting test history for one test type
    History {
        /// Test type: lag, swedish or luke-donald
        #[arg(long)]
        test: String,
        /// Moving-average window (default from config)
        #[arg(long)]
        window: Option<usize>,
    },
}

fn parse_makes(raw: &[String]) -> Result<Vec<LukeDonaldAttempt>, Box<dyn std::error::Error>> {
    let mut made = std::collections::HashSet::new();
    for pair in raw {
        let (hole, distances) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected HOLE=DIST,DIST, got '{pair}'"))?;
        let hole: u32 = hole.trim().parse()?;
        if !LUKE_DONALD_HOLES.contains(&hole) {
            return Err(format!("unknown hole {hole} (expected 1-4)").into());
        }
        for distance in distances.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let distance: u32 = distance.parse()?;
            if !LUKE_DONALD_DISTANCES_FT.contains(&distance) {
                return Err(format!("unknown distance {distance}ft (expected 4-8)").into());
            }
            made.insert((hole, distance));
        }
    }
    Ok(rangelog_core::drill::luke_donald_attempts(|hole, dist| {
        made.contains(&(hole, dist))
    }))
}

fn test_type_label(test: &str) -> Result<&'static str, Box<dyn std::error::Error>> {
    match test {
        "lag" => Ok(TEST_LAG),
        "swedish" => Ok(TEST_SWEDISH),
        "luke-donald" => Ok(TEST_LUKE_DONALD),
        other => Err(format!("unknown test '{other}' (lag, swedish, luke-donald)").into()),
    }
}

pub fn run(action: PuttingAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        PuttingAction::Lag { scores, date } => {
            let counts: Vec<u32> = scores
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<u32>()
                        .map_err(|e| format!("invalid count '{s}': {e}"))
                })
                .collect::<Result<_, _>>()?;
            let result = evaluate_lag(&counts)?;
            let date = super::parse_date(date)?;

            let mut extra = std::collections::BTreeMap::new();
            for (station, in_box) in &result.stations {
                extra.insert(station.column(), serde_json::json!(in_box));
            }
            let log = PuttingTestLog {
                test_type: TEST_LAG.to_string(),
                score: result.total as i32,
                putting_hcp: None,
                extra,
            };
            let id = db.record_session(Category::PuttingTesting, date, &log)?;
            tracing::debug!(id, total = result.total, "lag drill saved");
            println!(
                "Lag Drill saved -- {}/{} putts in the box.",
                result.total,
                lag_max_total()
            );
        }
        PuttingAction::LukeDonald { made, date } => {
            let attempts = parse_makes(&made)?;
            let result = evaluate_luke_donald(&attempts);
            let date = super::parse_date(date)?;

            let mut extra = std::collections::BTreeMap::new();
            for attempt in &attempts {
                extra.insert(
                    format!("ld_h{}_{}ft", attempt.hole, attempt.distance_ft),
                    serde_json::json!(u8::from(attempt.made)),
                );
            }
            let log = PuttingTestLog {
                test_type: TEST_LUKE_DONALD.to_string(),
                score: result.makes as i32,
                putting_hcp: None,
                extra,
            };
            let id = db.record_session(Category::PuttingTesting, date, &log)?;
            tracing::debug!(id, makes = result.makes, "luke donald drill saved");

            if result.goal_met {
                println!("{}/{} -- goal reached!", result.makes, result.attempts);
            } else {
                println!(
                    "{}/{} -- goal is {}/{}. Keep grinding.",
                    result.makes, result.attempts, LUKE_DONALD_GOAL, result.attempts
                );
            }
        }
        PuttingAction::History { test, window } => {
            let config = Config::load()?;
            let window = window.unwrap_or(config.trend.moving_average_window);
            let wanted = test_type_label(&test)?;

            let sessions: Vec<(i64, chrono::NaiveDate, PuttingTestLog)> =
                db.sessions_as(Category::PuttingTesting)?;
            let filtered: Vec<&(i64, chrono::NaiveDate, PuttingTestLog)> = sessions
                .iter()
                .filter(|(_, _, log)| log.test_type == wanted)
                .collect();
            if filtered.is_empty() {
                println!("No {wanted} sessions yet.");
                return Ok(());
            }

            let scores: Vec<f64> = filtered.iter().map(|(_, _, l)| f64::from(l.score)).collect();
            println!("Sessions: {}", filtered.len());
            // Swedish scores count down; the counting tests count up.
            let best = if wanted == TEST_SWEDISH {
                filtered.iter().map(|(_, _, l)| l.score).min()
            } else {
                filtered.iter().map(|(_, _, l)| l.score).max()
            };
            if let Some(best) = best {
                println!("Best score: {best:+}");
            }
            let avg = scores.iter().sum::<f64>() / scores.len() as f64;
            println!("Avg score: {avg:+.1}");
            if wanted == TEST_SWEDISH {
                if let Some(hcp) = filtered.iter().filter_map(|(_, _, l)| l.putting_hcp).last() {
                    println!("Latest putting HCP: {hcp:+.1}");
                }
            }
            if wanted == TEST_LUKE_DONALD {
                let goal_hit = filtered
                    .iter()
                    .filter(|(_, _, l)| l.score >= LUKE_DONALD_GOAL as i32)
                    .count();
                println!("Goal hit: {goal_hit}/{}", filtered.len());

                let attempts: Vec<LukeDonaldAttempt> = filtered
                    .iter()
                    .flat_map(|(_, _, l)| {
                        l.extra.iter().filter_map(|(key, value)| {
                            parse_ld_column(key).map(|(hole, distance_ft)| LukeDonaldAttempt {
                                hole,
                                distance_ft,
                                made: value.as_u64() == Some(1),
                            })
                        })
                    })
                    .collect();
                for (distance, pct) in distance_make_pcts(&attempts) {
                    println!("  {distance}ft make rate: {pct:.0}%");
                }
            }

            let smoothed = rolling_average(&scores, window);
            println!("Score trend ({window}-session moving average):");
            for ((_, date, log), ma) in filtered.iter().zip(&smoothed) {
                println!("  {}  {:+}  (avg {:+.1})", date.format("%Y-%m-%d"), log.score, ma);
            }
        }
    }
    Ok(())
}

/// Parse a `ld_h<hole>_<dist>ft` column back into its hole and distance.
fn parse_ld_column(key: &str) -> Option<(u32, u32)> {
    let rest = key.strip_prefix("ld_h")?;
    let (hole, dist) = rest.split_once('_')?;
    Some((hole.parse().ok()?, dist.strip_suffix("ft")?.parse().ok()?))
}
