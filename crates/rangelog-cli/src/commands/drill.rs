use clap::Subcommand;
use rangelog_core::drill::{
    swedish_putt_order, ActiveDrill, DrillOutcome, DrillSession, LadderConfig, LadderLog,
    LadderMode, PuttingTestLog, TEST_SWEDISH,
};
use rangelog_core::session::Category;
use rangelog_core::stats::rolling_average;
use rangelog_core::storage::{Config, Database};

const DRILL_KEY: &str = "drill_session";

#[derive(Subcommand)]
pub enum DrillAction {
    /// Start a drill
    Start {
        #[command(subcommand)]
        kind: StartKind,
    },
    /// Show the active drill and its targets
    Status,
    /// Submit results for the active drill (comma-separated, in target order)
    Submit {
        /// Results, one per target (carry yards or meters from hole)
        #[arg(long)]
        results: String,
        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Abandon the active drill or leave the results review
    Cancel,
    /// Wedge ladder session history
    History {
        /// Moving-average window (default from config)
        #[arg(long)]
        window: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum StartKind {
    /// Wedge ladder: one shot per distance from start to end
    WedgeLadder {
        /// Start distance in yards (default from config)
        #[arg(long)]
        start: Option<u32>,
        /// End distance in yards (default from config)
        #[arg(long)]
        end: Option<u32>,
        /// Shuffle the target order
        #[arg(long)]
        random: bool,
        /// Shuffle seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Swedish putting test: 18 lag putts in random order
    Swedish {
        /// Shuffle seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn load_session(db: &Database) -> Result<DrillSession, Box<dyn std::error::Error>> {
    match db.kv_get(DRILL_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(DrillSession::new()),
    }
}

fn save_session(db: &Database, session: &DrillSession) -> Result<(), Box<dyn std::error::Error>> {
    db.kv_set(DRILL_KEY, &serde_json::to_string(session)?)?;
    Ok(())
}

pub fn run(action: DrillAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load()?;

    match action {
        DrillAction::Start { kind } => {
            let mut session = load_session(&db)?;
            let drill = match kind {
                StartKind::WedgeLadder { start, end, random, seed } => {
                    let ladder = LadderConfig::new(
                        start.unwrap_or(config.ladder.start_yards),
                        end.unwrap_or(config.ladder.end_yards),
                        if random { LadderMode::Random } else { LadderMode::InOrder },
                    );
                    let targets = ladder.targets(seed)?;
                    ActiveDrill::WedgeLadder { config: ladder, targets }
                }
                StartKind::Swedish { seed } => ActiveDrill::Swedish {
                    targets_m: swedish_putt_order(seed),
                },
            };
            let started = session.start(drill)?;
            tracing::debug!(kind = started.kind_label(), "drill started");
            println!("{}", serde_json::to_string_pretty(started)?);
            save_session(&db, &session)?;
        }
        DrillAction::Status => {
            let session = load_session(&db)?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        DrillAction::Submit { results, date } => {
            let mut session = load_session(&db)?;
            let results = super::parse_number_list(&results)?;
            let date = super::parse_date(date)?;

            let active = session.active().cloned();
            let outcome = session.submit(&results, &config.grade_scale())?.clone();
            match (&active, &outcome) {
                (Some(ActiveDrill::WedgeLadder { config: ladder, .. }), DrillOutcome::WedgeLadder(report)) => {
                    let log = LadderLog::from_report(ladder, report);
                    let id = db.record_session(Category::WedgeLadder, date, &log)?;
                    tracing::debug!(id, grade = report.grade, "wedge ladder session saved");
                }
                (Some(ActiveDrill::Swedish { .. }), DrillOutcome::Swedish(report)) => {
                    let log = PuttingTestLog {
                        test_type: TEST_SWEDISH.to_string(),
                        score: report.total_score,
                        putting_hcp: Some((report.putting_handicap * 10.0).round() / 10.0),
                        extra: Default::default(),
                    };
                    let id = db.record_session(Category::PuttingTesting, date, &log)?;
                    tracing::debug!(id, score = report.total_score, "swedish test saved");
                }
                _ => {}
            }

            println!("{}", serde_json::to_string_pretty(&outcome)?);
            println!("Session saved.");
            save_session(&db, &session)?;
        }
        DrillAction::Cancel => {
            let mut session = load_session(&db)?;
            session.cancel()?;
            save_session(&db, &session)?;
            println!("Drill cancelled.");
        }
        DrillAction::History { window } => {
            let window = window.unwrap_or(config.trend.moving_average_window);
            let sessions: Vec<(i64, chrono::NaiveDate, LadderLog)> =
                db.sessions_as(Category::WedgeLadder)?;
            if sessions.is_empty() {
                println!("No wedge ladder sessions yet.");
                return Ok(());
            }

            let grades: Vec<f64> = sessions.iter().map(|(_, _, l)| f64::from(l.grade)).collect();
            let best = sessions.iter().map(|(_, _, l)| l.grade).max().unwrap_or(0);
            let avg = grades.iter().sum::<f64>() / grades.len() as f64;
            println!("Sessions: {}", sessions.len());
            println!("Best grade: {best}");
            println!("Avg grade: {avg:.1}");

            let smoothed = rolling_average(&grades, window);
            println!("Grade trend ({window}-session moving average):");
            for ((_, date, log), ma) in sessions.iter().zip(&smoothed) {
                println!(
                    "  {}  grade {}  (avg {:.1})  {}-{} yds",
                    date.format("%Y-%m-%d"),
                    log.grade,
                    ma,
                    log.start_distance,
                    log.end_distance
                );
            }
        }
    }
    Ok(())
}
