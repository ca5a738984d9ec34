//! Reference data: goals and drill descriptions.
//!
//! Both are JSON documents in the data directory. Goals are imported
//! from an external file; drill descriptions ship with built-in defaults
//! that an imported file replaces.

use std::collections::BTreeMap;
use std::path::Path;

use indoc::indoc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::data_dir;

/// The season goals document: big goals, component goals, and named
/// sub-goal groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Goals {
    #[serde(default)]
    pub big_goals: Vec<String>,
    #[serde(default)]
    pub component_goals: Vec<String>,
    #[serde(default)]
    pub sub_goals: BTreeMap<String, Vec<String>>,
}

impl Goals {
    fn path() -> Result<std::path::PathBuf> {
        Ok(data_dir()?.join("goals.json"))
    }

    /// Load the stored goals document; `None` if nothing was imported yet.
    pub fn load() -> Result<Option<Goals>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Read a goals document from an arbitrary JSON file.
    pub fn load_from(path: &Path) -> Result<Goals> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Persist to the data directory.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::path()?, json)?;
        Ok(())
    }

    /// Import an external goals file into the data directory.
    pub fn import(path: &Path) -> Result<Goals> {
        let goals = Self::load_from(path)?;
        goals.save()?;
        Ok(goals)
    }

    pub fn total_sub_goals(&self) -> usize {
        self.sub_goals.values().map(Vec::len).sum()
    }
}

/// A drill description: name, per-level progressions, free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillDescription {
    pub name: String,
    #[serde(default)]
    pub levels: BTreeMap<String, String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn drill(
    name: &str,
    levels: &[(&str, &str)],
    description: Option<&str>,
) -> DrillDescription {
    DrillDescription {
        name: name.to_string(),
        levels: levels
            .iter()
            .map(|(level, text)| (level.to_string(), text.to_string()))
            .collect(),
        description: description.map(str::to_string),
    }
}

/// Built-in drill descriptions, used until a custom file is imported.
pub fn builtin_drills() -> Vec<DrillDescription> {
    vec![
        drill(
            "Towel Drill",
            &[
                ("Level 1", "Towel one grip-length behind the ball, half swings"),
                ("Level 2", "Full swings, ball first contact"),
                ("Level 3", "Alternate clubs every three balls"),
                ("Level 4", "Trajectory calls before each shot"),
            ],
            Some(indoc! {"
                Lay a towel a grip-length behind the ball and strike without
                touching it. Sets of three; a set only counts when all three
                miss the towel.
            "}),
        ),
        drill(
            "Eyes Close Strike",
            &[
                ("Level 1", "Eyes closed at address, half swings"),
                ("Level 2", "Eyes closed through impact, full swings"),
                ("Level 3", "Call the strike location before looking"),
            ],
            Some(indoc! {"
                Close the eyes just before takeaway and call the strike
                (toe, heel, center) before looking up. Trains strike
                awareness without ball flight bias.
            "}),
        ),
        drill(
            "Toe, Heel, Center",
            &[
                ("Level 1", "Three balls: one toe, one heel, one center on purpose"),
                ("Level 2", "Random order called by a partner"),
                ("Level 3", "Center strikes only, face tape check"),
            ],
            Some("Deliberate strike-location control in sets of three."),
        ),
        drill(
            "Jump the Ball",
            &[],
            Some(indoc! {"
                Rebound drill: land the lead foot as the club reaches the
                ball. Builds ground-force sequencing for driver speed.
            "}),
        ),
        drill(
            "1 Handed Pitch",
            &[
                ("Level 1", "Trail hand only, 20 yard carries"),
                ("Level 2", "Lead hand only, 20 yard carries"),
                ("Level 3", "Alternate hands, vary carry 15-35 yards"),
            ],
            Some("Sets of three one-handed pitches to a single target."),
        ),
        drill(
            "3-Foot Drill",
            &[
                ("Level 1", "10 in a row from straight putts"),
                ("Level 2", "10 in a row around the clock"),
                ("Level 3", "20 in a row around the clock"),
                ("Level 4", "20 in a row, restart on any miss"),
            ],
            Some("Short putt pressure circuit from three feet."),
        ),
        drill(
            "Guess the Slope",
            &[
                ("Level 1", "Call break direction before reading"),
                ("Level 2", "Call break in cups from behind the ball"),
            ],
            Some(indoc! {"
                Green-reading calibration: commit to a read out loud, roll
                the putt, compare against what the ball actually did.
            "}),
        ),
        drill(
            "Lag Drill",
            &[
                ("Level 1", "30/40/50 ft to a 6-foot box"),
                ("Level 2", "Same box, uphill and downhill versions"),
                ("Level 3", "3-foot box, restart on a three-putt"),
            ],
            Some("Long-putt distance control into a box around the hole."),
        ),
    ]
}

fn drills_path() -> Result<std::path::PathBuf> {
    Ok(data_dir()?.join("drills.json"))
}

/// Load drill descriptions: the imported file if present, otherwise the
/// built-in set.
pub fn load_drills() -> Result<Vec<DrillDescription>> {
    let path = drills_path()?;
    if !path.exists() {
        return Ok(builtin_drills());
    }
    let json = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Import an external drill description file into the data directory.
pub fn import_drills(path: &Path) -> Result<Vec<DrillDescription>> {
    let json = std::fs::read_to_string(path)?;
    let drills: Vec<DrillDescription> = serde_json::from_str(&json)?;
    std::fs::write(drills_path()?, serde_json::to_string_pretty(&drills)?)?;
    Ok(drills)
}
