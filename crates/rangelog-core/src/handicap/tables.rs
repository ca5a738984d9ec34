//! Built-in reference tables for short-game testing and the Swedish
//! putting test.
//!
//! The shot-type tables ship as defaults so the app works before any
//! custom tables are imported; `TestingLookup::from_json` accepts the
//! same shape (`{ "shot type": [{"score": .., "handicap": ..}, ..] }`)
//! for overrides.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

use super::{Anchor, Benchmark, HandicapTable, TableEntry};

/// The eight tested shot types, in scorecard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    FiftyYardsF,
    ThirtyYardsF,
    TenFChip,
    TwentyYardsR,
    Flop,
    FifteenFPitch,
    EightYardSand,
    FifteenYardSand,
}

impl ShotType {
    /// All shot types in display order.
    pub fn all() -> [ShotType; 8] {
        [
            ShotType::FiftyYardsF,
            ShotType::ThirtyYardsF,
            ShotType::TenFChip,
            ShotType::TwentyYardsR,
            ShotType::Flop,
            ShotType::FifteenFPitch,
            ShotType::EightYardSand,
            ShotType::FifteenYardSand,
        ]
    }

    /// Display label, matching the reference table names.
    pub fn label(&self) -> &'static str {
        match self {
            ShotType::FiftyYardsF => "50 Yards F",
            ShotType::ThirtyYardsF => "30 Yards F",
            ShotType::TenFChip => "10 F Chip",
            ShotType::TwentyYardsR => "20 Yards R",
            ShotType::Flop => "Flop",
            ShotType::FifteenFPitch => "15 F Pitch",
            ShotType::EightYardSand => "8 Yard Sand",
            ShotType::FifteenYardSand => "15 Yard Sand",
        }
    }

    /// Stable storage column key.
    pub fn column(&self) -> &'static str {
        match self {
            ShotType::FiftyYardsF => "50_yards_f",
            ShotType::ThirtyYardsF => "30_yards_f",
            ShotType::TenFChip => "10_f_chip",
            ShotType::TwentyYardsR => "20_yards_r",
            ShotType::Flop => "flop",
            ShotType::FifteenFPitch => "15_f_pitch",
            ShotType::EightYardSand => "8_yard_sand",
            ShotType::FifteenYardSand => "15_yard_sand",
        }
    }

    /// Resolve a display label back to a shot type.
    pub fn from_label(label: &str) -> Option<ShotType> {
        ShotType::all().into_iter().find(|s| s.label() == label)
    }

    /// Resolve a storage column key back to a shot type.
    pub fn from_column(column: &str) -> Option<ShotType> {
        ShotType::all().into_iter().find(|s| s.column() == column)
    }
}

/// The full set of shot-type lookup tables used by the scorecard.
#[derive(Debug, Clone)]
pub struct TestingLookup {
    tables: BTreeMap<String, HandicapTable>,
}

impl TestingLookup {
    pub fn table(&self, shot: ShotType) -> Option<&HandicapTable> {
        self.tables.get(shot.label())
    }

    /// Tables in shot-type display order (unknown names last).
    pub fn tables(&self) -> Vec<&HandicapTable> {
        let mut ordered: Vec<&HandicapTable> = ShotType::all()
            .iter()
            .filter_map(|s| self.tables.get(s.label()))
            .collect();
        for (name, table) in &self.tables {
            if ShotType::from_label(name).is_none() {
                ordered.push(table);
            }
        }
        ordered
    }

    /// Parse a lookup document: a map from shot-type label to entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<TableEntry>> = serde_json::from_str(json)?;
        let mut tables = BTreeMap::new();
        for (name, entries) in raw {
            let table = HandicapTable::new(name.clone(), entries)
                .map_err(CoreError::Validation)?;
            tables.insert(name, table);
        }
        Ok(Self { tables })
    }

    /// Load a lookup document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize back to the JSON document shape.
    pub fn to_json(&self) -> Result<String> {
        let raw: BTreeMap<&str, &[TableEntry]> = self
            .tables
            .iter()
            .map(|(name, table)| (name.as_str(), table.entries()))
            .collect();
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    fn stored_path() -> Result<std::path::PathBuf> {
        Ok(crate::storage::data_dir()?.join("testing_lookup.json"))
    }

    /// The imported lookup document if one exists, otherwise the
    /// built-in defaults.
    pub fn stored_or_default() -> Result<Self> {
        let path = Self::stored_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(default_testing_lookup())
        }
    }

    /// Validate an external lookup file and install it as the stored
    /// document.
    pub fn import(path: &Path) -> Result<Self> {
        let lookup = Self::load(path)?;
        std::fs::write(Self::stored_path()?, lookup.to_json()?)?;
        Ok(lookup)
    }
}

fn table(name: &str, pairs: &[(i32, f64)]) -> (String, HandicapTable) {
    let entries = pairs
        .iter()
        .map(|&(score, handicap)| TableEntry { score, handicap })
        .collect();
    let table = HandicapTable::new(name, entries).expect("built-in table is well-formed");
    (name.to_string(), table)
}

/// Built-in shot-type tables.
///
/// Scores are successful shots out of twenty balls; handicaps fall as the
/// score rises, going negative at tour-level conversion rates. A few
/// tables are sparse at the top end, which is where the interior-gap
/// "not available" behavior of the lookup shows up in practice.
pub fn default_testing_lookup() -> TestingLookup {
    let tables = BTreeMap::from([
        table(
            "50 Yards F",
            &[
                (4, 27.0),
                (5, 24.0),
                (6, 21.0),
                (7, 18.0),
                (8, 15.0),
                (9, 12.0),
                (10, 10.0),
                (11, 8.0),
                (12, 6.0),
                (13, 4.0),
                (14, 2.0),
                (15, 0.0),
                (16, -2.0),
                (17, -4.0),
            ],
        ),
        table(
            "30 Yards F",
            &[
                (5, 26.0),
                (6, 22.0),
                (7, 19.0),
                (8, 16.0),
                (9, 13.0),
                (10, 11.0),
                (11, 9.0),
                (12, 7.0),
                (13, 5.0),
                (14, 3.0),
                (15, 1.0),
                (16, -1.0),
                (17, -3.0),
                (18, -5.0),
            ],
        ),
        table(
            "10 F Chip",
            &[
                (6, 25.0),
                (7, 21.0),
                (8, 17.0),
                (9, 14.0),
                (10, 11.0),
                (11, 9.0),
                (12, 7.0),
                (13, 5.0),
                (14, 3.0),
                (15, 1.0),
                (16, 0.0),
                (17, -2.0),
                (18, -4.0),
                (19, -6.0),
            ],
        ),
        table(
            "20 Yards R",
            &[
                (3, 27.0),
                (4, 23.0),
                (5, 19.0),
                (6, 16.0),
                (7, 13.0),
                (8, 10.0),
                (9, 8.0),
                (10, 6.0),
                (11, 4.0),
                (12, 2.0),
                (13, 0.0),
                (15, -3.0),
                (17, -6.0),
            ],
        ),
        table(
            "Flop",
            &[
                (2, 28.0),
                (3, 24.0),
                (4, 20.0),
                (5, 16.0),
                (6, 13.0),
                (7, 10.0),
                (8, 8.0),
                (9, 6.0),
                (10, 4.0),
                (11, 2.0),
                (12, 0.0),
                (14, -3.0),
                (16, -6.0),
            ],
        ),
        table(
            "15 F Pitch",
            &[
                (5, 26.0),
                (6, 22.0),
                (7, 18.0),
                (8, 15.0),
                (9, 12.0),
                (10, 10.0),
                (11, 8.0),
                (12, 6.0),
                (13, 4.0),
                (14, 2.0),
                (15, 0.0),
                (16, -2.0),
                (17, -4.0),
            ],
        ),
        table(
            "8 Yard Sand",
            &[
                (2, 28.0),
                (3, 24.0),
                (4, 20.0),
                (5, 17.0),
                (6, 14.0),
                (7, 11.0),
                (8, 9.0),
                (9, 7.0),
                (10, 5.0),
                (11, 3.0),
                (12, 1.0),
                (13, -1.0),
                (14, -3.0),
                (15, -5.0),
            ],
        ),
        table(
            "15 Yard Sand",
            &[
                (1, 29.0),
                (2, 25.0),
                (3, 21.0),
                (4, 18.0),
                (5, 15.0),
                (6, 12.0),
                (7, 10.0),
                (8, 8.0),
                (9, 6.0),
                (10, 4.0),
                (11, 2.0),
                (12, 0.0),
                (13, -2.0),
                (14, -4.0),
            ],
        ),
    ]);
    TestingLookup { tables }
}

/// Interpolation anchors for the Swedish test: total score to putting
/// handicap.
pub fn swedish_anchors() -> Vec<Anchor> {
    vec![
        Anchor { score: 0.2, handicap: -2.0 },
        Anchor { score: 2.0, handicap: 0.0 },
        Anchor { score: 6.3, handicap: 5.0 },
        Anchor { score: 10.7, handicap: 10.0 },
    ]
}

/// Benchmark levels for the Swedish test total score.
pub fn swedish_benchmarks() -> Vec<Benchmark> {
    [
        (-5.5, "Tour Player"),
        (-2.9, "European Tour"),
        (-1.5, "Challenge Tour"),
        (0.2, "+2 HCP"),
        (2.0, "Scratch"),
        (6.3, "5 HCP"),
        (10.7, "10 HCP"),
    ]
    .into_iter()
    .map(|(score, label)| Benchmark { score, label: label.to_string() })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup_covers_all_shot_types() {
        let lookup = default_testing_lookup();
        for shot in ShotType::all() {
            let table = lookup.table(shot).expect("table exists");
            assert!(!table.entries().is_empty());
        }
        assert_eq!(lookup.tables().len(), 8);
    }

    #[test]
    fn test_default_tables_have_interior_gaps() {
        let lookup = default_testing_lookup();
        let flop = lookup.table(ShotType::Flop).unwrap();
        // 13 sits between defined scores 12 and 14.
        assert_eq!(flop.lookup(13), None);
        assert_eq!(flop.lookup(12), Some(0.0));
    }

    #[test]
    fn test_json_roundtrip() {
        let lookup = default_testing_lookup();
        let json = lookup.to_json().unwrap();
        let parsed = TestingLookup::from_json(&json).unwrap();
        assert_eq!(parsed.tables().len(), lookup.tables().len());
        assert_eq!(
            parsed.table(ShotType::Flop).unwrap().lookup(7),
            Some(10.0)
        );
    }

    #[test]
    fn test_from_json_rejects_unsorted_table() {
        let json = r#"{"Flop": [{"score": 5, "handicap": 1.0}, {"score": 4, "handicap": 2.0}]}"#;
        assert!(TestingLookup::from_json(json).is_err());
    }

    #[test]
    fn test_shot_type_mappings() {
        assert_eq!(ShotType::from_label("8 Yard Sand"), Some(ShotType::EightYardSand));
        assert_eq!(ShotType::from_column("10_f_chip"), Some(ShotType::TenFChip));
        assert_eq!(ShotType::from_label("9 Yard Sand"), None);
    }
}
