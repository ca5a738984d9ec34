//! Integration tests for reference data files (goals, lookup tables).

use std::fs;

use rangelog_core::handicap::ShotType;
use rangelog_core::reference::Goals;
use rangelog_core::TestingLookup;
use tempfile::TempDir;

#[test]
fn test_goals_file_import_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("goals.json");
    fs::write(
        &path,
        r#"{
            "big_goals": ["Break 80 every round", "Handicap to 5"],
            "component_goals": ["GIR 50%"],
            "sub_goals": {
                "Goal 1 (Driver)": ["Fairway 55%"],
                "Goal 2 (Wedges)": ["Grade 3 wedge ladder", "Up and down 60%"]
            }
        }"#,
    )
    .unwrap();

    let goals = Goals::load_from(&path).unwrap();
    assert_eq!(goals.big_goals.len(), 2);
    assert_eq!(goals.component_goals.len(), 1);
    assert_eq!(goals.total_sub_goals(), 3);
}

#[test]
fn test_goals_malformed_file_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("goals.json");
    fs::write(&path, "not json").unwrap();
    assert!(Goals::load_from(&path).is_err());
    assert!(Goals::load_from(&dir.path().join("missing.json")).is_err());
}

#[test]
fn test_lookup_table_file_import() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("testing_lookup.json");
    fs::write(
        &path,
        r#"{
            "Flop": [
                {"score": 3, "handicap": 18.0},
                {"score": 6, "handicap": 9.0},
                {"score": 9, "handicap": 0.0}
            ]
        }"#,
    )
    .unwrap();

    let lookup = TestingLookup::load(&path).unwrap();
    let flop = lookup.table(ShotType::Flop).unwrap();
    assert_eq!(flop.lookup(6), Some(9.0));
    assert_eq!(flop.lookup(4), None);
    assert_eq!(flop.lookup(2), Some(18.0));
    assert_eq!(flop.max_score(), Some(9));
}
