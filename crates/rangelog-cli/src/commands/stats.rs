use clap::Subcommand;
use rangelog_core::stats::{current_streak, longest_streak, recent_activity, summarize};
use rangelog_core::storage::{Config, Database};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Dashboard summary: totals, streaks, per-category counts
    Summary,
    /// Latest sessions across all categories
    Recent {
        /// Number of rows (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Current and longest practice streaks
    Streaks,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = chrono::Local::now().date_naive();

    match action {
        StatsAction::Summary => {
            let dates = db.practice_dates()?;
            let summary = summarize(&dates, db.category_counts()?, today);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Recent { limit } => {
            let config = Config::load()?;
            let limit = limit.unwrap_or(config.display.recent_limit);
            let feed = recent_activity(&db.all_sessions()?, limit);
            if feed.is_empty() {
                println!("No activity recorded yet.");
                return Ok(());
            }
            for entry in feed {
                println!(
                    "  {}  {:<18} {}",
                    entry.date.format("%b %d, %Y"),
                    entry.category,
                    entry.details
                );
            }
        }
        StatsAction::Streaks => {
            let dates = db.practice_dates()?;
            println!("Current streak: {} days", current_streak(&dates, today));
            println!("Longest streak: {} days", longest_streak(&dates));
        }
    }
    Ok(())
}
