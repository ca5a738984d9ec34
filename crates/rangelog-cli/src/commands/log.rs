use clap::Subcommand;
use rangelog_core::session::{BallStrikingLog, Category, PuttingLog};
use rangelog_core::storage::Database;

#[derive(Subcommand)]
pub enum LogAction {
    /// Log a ball-striking session
    BallStriking {
        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Mechanical work, no results (balls)
        #[arg(long)]
        mechanical: Option<u32>,
        /// Towel drill (sets of 3)
        #[arg(long)]
        towel: Option<u32>,
        /// Eyes close strike (sets of 3)
        #[arg(long)]
        eyes_close: Option<u32>,
        /// Toe, heel, center (sets of 3)
        #[arg(long)]
        toe_heel: Option<u32>,
        /// Jump the ball
        #[arg(long)]
        jump: Option<u32>,
        /// Wedge ladder (sets of 3)
        #[arg(long)]
        wedge_ladder: Option<u32>,
        /// Crazy shit (sets of 1)
        #[arg(long)]
        crazy: Option<u32>,
        /// One-handed pitch (sets of 3)
        #[arg(long)]
        one_hand: Option<u32>,
    },
    /// Log a putting session
    Putting {
        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// 3-foot drill (sets)
        #[arg(long)]
        three_foot: Option<u32>,
        /// Guess the slope (sets)
        #[arg(long)]
        slope: Option<u32>,
        /// Lag drill (sets)
        #[arg(long)]
        lag: Option<u32>,
    },
    /// List sessions for a category
    List {
        /// Category key (ball_striking, putting, ...)
        category: String,
    },
    /// Delete a session by id
    Delete {
        /// Session id (shown by list)
        id: i64,
    },
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        LogAction::BallStriking {
            date,
            mechanical,
            towel,
            eyes_close,
            toe_heel,
            jump,
            wedge_ladder,
            crazy,
            one_hand,
        } => {
            let log = BallStrikingLog {
                mechanical_no_results: mechanical,
                towel_drill_3x: towel,
                eyes_close_strike_3x: eyes_close,
                toe_heel_center_3x: toe_heel,
                jump_the_ball: jump,
                wedge_ladder_3x: wedge_ladder,
                crazy_shit_1x: crazy,
                one_handed_pitch_3x: one_hand,
            };
            if log.drills_logged() == 0 {
                return Err("enter at least one drill before submitting".into());
            }
            let date = super::parse_date(date)?;
            let id = db.record_session(Category::BallStriking, date, &log)?;
            tracing::debug!(id, %date, "recorded ball striking session");
            println!(
                "Logged ball striking session on {} -- {} drill(s) recorded.",
                date.format("%b %d"),
                log.drills_logged()
            );
        }
        LogAction::Putting {
            date,
            three_foot,
            slope,
            lag,
        } => {
            let log = PuttingLog {
                three_foot_drill: three_foot,
                guess_the_slope: slope,
                lag_drill: lag,
            };
            if log.drills_logged() == 0 {
                return Err("enter at least one drill before submitting".into());
            }
            let date = super::parse_date(date)?;
            let id = db.record_session(Category::Putting, date, &log)?;
            tracing::debug!(id, %date, "recorded putting session");
            println!(
                "Logged putting session on {} -- {} drill(s) recorded.",
                date.format("%b %d"),
                log.drills_logged()
            );
        }
        LogAction::List { category } => {
            let category = Category::from_key(&category)
                .ok_or_else(|| format!("unknown category '{category}'"))?;
            let sessions = db.sessions(category)?;
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
        LogAction::Delete { id } => {
            db.delete_session(id)?;
            println!("Session {id} deleted.");
        }
    }
    Ok(())
}
