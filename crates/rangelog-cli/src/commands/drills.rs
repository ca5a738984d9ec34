use std::path::PathBuf;

use clap::Subcommand;
use rangelog_core::reference::{import_drills, load_drills};

#[derive(Subcommand)]
pub enum DrillsAction {
    /// List drill names
    List,
    /// Show one drill's levels and description
    Show {
        /// Drill name (as shown by list)
        name: String,
    },
    /// Import a drill description JSON file
    Import {
        /// Path to the drill document
        path: PathBuf,
    },
}

pub fn run(action: DrillsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DrillsAction::List => {
            for drill in load_drills()? {
                println!("  {}", drill.name);
            }
        }
        DrillsAction::Show { name } => {
            let drills = load_drills()?;
            let drill = drills
                .iter()
                .find(|d| d.name.eq_ignore_ascii_case(&name))
                .ok_or_else(|| format!("no drill named '{name}'"))?;
            println!("{}", drill.name);
            for (level, text) in &drill.levels {
                println!("  {level}: {text}");
            }
            if let Some(description) = &drill.description {
                println!("{description}");
            }
        }
        DrillsAction::Import { path } => {
            let drills = import_drills(&path)?;
            println!("Imported {} drill description(s).", drills.len());
        }
    }
    Ok(())
}
