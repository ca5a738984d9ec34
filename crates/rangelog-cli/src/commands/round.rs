use clap::{Args, Subcommand};
use rangelog_core::course::{aggregate, holes, total_par, HoleScore, LoopRound};
use rangelog_core::session::Category;
use rangelog_core::stats::{rolling_average, rolling_average_sparse};
use rangelog_core::storage::{Config, Database};

#[derive(Subcommand)]
pub enum LoopAction {
    /// Log a round on the loop
    Log(LogRoundArgs),
    /// Aggregate scoring and short-game stats
    Stats,
    /// Rolling per-round rate trends
    Trend {
        /// Rolling window (default from config)
        #[arg(long)]
        window: Option<usize>,
    },
    /// List logged rounds
    List,
    /// Delete a round by session id
    Delete {
        /// Session id (shown by list)
        id: i64,
    },
}

#[derive(Args)]
pub struct LogRoundArgs {
    /// Round date (YYYY-MM-DD, default today)
    #[arg(long)]
    date: Option<String>,

    /// Hole 1 score (par 5)
    #[arg(long)]
    h1: u32,
    /// Hole 1 fairway hit
    #[arg(long)]
    h1_fairway: bool,
    /// Hole 1 green in regulation
    #[arg(long)]
    h1_gir: bool,
    /// Hole 1 up-and-down chance
    #[arg(long)]
    h1_ud_chance: bool,
    /// Hole 1 up-and-down converted
    #[arg(long)]
    h1_ud_converted: bool,
    /// Hole 1 penalty
    #[arg(long)]
    h1_penalty: bool,

    /// Hole 2 score (par 3)
    #[arg(long)]
    h2: u32,
    /// Hole 2 green in regulation
    #[arg(long)]
    h2_gir: bool,
    /// Hole 2 up-and-down chance
    #[arg(long)]
    h2_ud_chance: bool,
    /// Hole 2 up-and-down converted
    #[arg(long)]
    h2_ud_converted: bool,
    /// Hole 2 penalty
    #[arg(long)]
    h2_penalty: bool,

    /// Hole 3 score (par 4)
    #[arg(long)]
    h3: u32,
    /// Hole 3 fairway hit
    #[arg(long)]
    h3_fairway: bool,
    /// Hole 3 green in regulation
    #[arg(long)]
    h3_gir: bool,
    /// Hole 3 up-and-down chance
    #[arg(long)]
    h3_ud_chance: bool,
    /// Hole 3 up-and-down converted
    #[arg(long)]
    h3_ud_converted: bool,
    /// Hole 3 penalty
    #[arg(long)]
    h3_penalty: bool,
}

impl LogRoundArgs {
    fn into_round(self) -> LoopRound {
        LoopRound {
            holes: vec![
                HoleScore {
                    score: self.h1,
                    fairway: Some(self.h1_fairway),
                    gir: self.h1_gir,
                    up_down_chance: self.h1_ud_chance,
                    up_down_converted: self.h1_ud_converted,
                    penalty: self.h1_penalty,
                },
                HoleScore {
                    score: self.h2,
                    fairway: None,
                    gir: self.h2_gir,
                    up_down_chance: self.h2_ud_chance,
                    up_down_converted: self.h2_ud_converted,
                    penalty: self.h2_penalty,
                },
                HoleScore {
                    score: self.h3,
                    fairway: Some(self.h3_fairway),
                    gir: self.h3_gir,
                    up_down_chance: self.h3_ud_chance,
                    up_down_converted: self.h3_ud_converted,
                    penalty: self.h3_penalty,
                },
            ],
        }
    }
}

fn stored_rounds(db: &Database) -> Result<Vec<(i64, chrono::NaiveDate, LoopRound)>, Box<dyn std::error::Error>> {
    Ok(db.sessions_as(Category::ThreeHoleLoop)?)
}

pub fn run(action: LoopAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        LoopAction::Log(args) => {
            let date = super::parse_date(args.date.clone())?;
            let round = args.into_round();
            let id = db.record_session(Category::ThreeHoleLoop, date, &round)?;
            tracing::debug!(id, total = round.total_score(), "loop round saved");
            println!(
                "Round logged for {} -- total {} (par {}).",
                date.format("%b %d"),
                round.total_score(),
                total_par()
            );
        }
        LoopAction::Stats => {
            let rounds: Vec<LoopRound> = stored_rounds(&db)?
                .into_iter()
                .map(|(_, _, round)| round)
                .collect();
            if rounds.is_empty() {
                println!("No rounds logged yet.");
                return Ok(());
            }
            let agg = aggregate(&rounds);
            println!("{}", serde_json::to_string_pretty(&agg)?);
        }
        LoopAction::Trend { window } => {
            let config = Config::load()?;
            let window = window.unwrap_or(config.trend.moving_average_window);
            let rounds = stored_rounds(&db)?;
            if rounds.len() < 2 {
                println!("Play more rounds to see a trend.");
                return Ok(());
            }

            let scores: Vec<f64> = rounds.iter().map(|(_, _, r)| f64::from(r.total_score())).collect();
            let smoothed_scores = rolling_average(&scores, window);

            let rates: Vec<_> = rounds.iter().map(|(_, _, r)| r.rates()).collect();
            let fairway = rolling_average(
                &rates.iter().map(|r| r.fairway_pct).collect::<Vec<_>>(),
                window,
            );
            let gir = rolling_average(&rates.iter().map(|r| r.gir_pct).collect::<Vec<_>>(), window);
            let ud = rolling_average_sparse(
                &rates.iter().map(|r| r.up_down_pct).collect::<Vec<_>>(),
                window,
            );

            println!("Rolling trends ({window}-round window):");
            for (i, (_, date, _)) in rounds.iter().enumerate() {
                let ud_text = match ud[i] {
                    Some(pct) => format!("{pct:.0}%"),
                    None => "--".to_string(),
                };
                println!(
                    "  {}  score {:.1}  FW {:.0}%  GIR {:.0}%  UD {}",
                    date.format("%Y-%m-%d"),
                    smoothed_scores[i],
                    fairway[i],
                    gir[i],
                    ud_text
                );
            }
        }
        LoopAction::List => {
            let rounds = stored_rounds(&db)?;
            if rounds.is_empty() {
                println!("No rounds logged yet.");
                return Ok(());
            }
            for (id, date, round) in rounds.iter().rev() {
                let hole_scores: Vec<String> = round
                    .holes
                    .iter()
                    .zip(holes())
                    .map(|(h, info)| format!("H{} {}", info.number, h.score))
                    .collect();
                println!(
                    "  [{id}] {}  {}  total {} ({:+})  {}",
                    date.format("%b %d, %Y"),
                    hole_scores.join(" "),
                    round.total_score(),
                    round.vs_par(),
                    round.stat_line()
                );
            }
        }
        LoopAction::Delete { id } => {
            db.delete_session(id)?;
            println!("Round {id} deleted.");
        }
    }
    Ok(())
}
