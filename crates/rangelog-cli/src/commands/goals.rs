use std::path::PathBuf;

use clap::Subcommand;
use rangelog_core::reference::Goals;

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Show the imported goals document
    Show,
    /// Import a goals JSON file
    Import {
        /// Path to the goals document
        path: PathBuf,
    },
}

pub fn run(action: GoalsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GoalsAction::Show => match Goals::load()? {
            Some(goals) => {
                println!("Big goals:");
                for (i, goal) in goals.big_goals.iter().enumerate() {
                    println!("  {}. {goal}", i + 1);
                }
                println!("Component goals:");
                for (i, goal) in goals.component_goals.iter().enumerate() {
                    println!("  {}. {goal}", i + 1);
                }
                for (group, items) in &goals.sub_goals {
                    println!("{group}:");
                    for item in items {
                        println!("  - {item}");
                    }
                }
            }
            None => println!("No goals data found. Import a goals file first."),
        },
        GoalsAction::Import { path } => {
            let goals = Goals::import(&path)?;
            println!(
                "Imported {} big, {} component, {} sub-goal(s).",
                goals.big_goals.len(),
                goals.component_goals.len(),
                goals.total_sub_goals()
            );
        }
    }
    Ok(())
}
