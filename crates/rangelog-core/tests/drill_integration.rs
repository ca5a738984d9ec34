//! Integration tests for the drill session lifecycle, including
//! persistence through the key-value store between invocations.

use rangelog_core::drill::{
    swedish_putt_order, ActiveDrill, DrillOutcome, DrillSession, DrillState, LadderConfig,
    LadderMode,
};
use rangelog_core::grading::GradeScale;
use rangelog_core::storage::Database;

const DRILL_KEY: &str = "drill_session";

fn save(db: &Database, session: &DrillSession) {
    db.kv_set(DRILL_KEY, &serde_json::to_string(session).unwrap())
        .unwrap();
}

fn load(db: &Database) -> DrillSession {
    match db.kv_get(DRILL_KEY).unwrap() {
        Some(json) => serde_json::from_str(&json).unwrap(),
        None => DrillSession::new(),
    }
}

#[test]
fn test_wedge_ladder_across_invocations() {
    let db = Database::open_memory().unwrap();

    // Invocation 1: start a ladder.
    let mut session = load(&db);
    let config = LadderConfig::new(40, 60, LadderMode::InOrder);
    let targets = config.targets(None).unwrap();
    session
        .start(ActiveDrill::WedgeLadder { config, targets })
        .unwrap();
    save(&db, &session);

    // Invocation 2: reload, submit results.
    let mut session = load(&db);
    assert_eq!(session.state(), DrillState::AwaitingResults);
    assert_eq!(session.active().unwrap().expected_results(), 5);

    let outcome = session
        .submit(&[40.0, 44.0, 51.0, 56.0, 59.0], &GradeScale::default())
        .unwrap();
    let DrillOutcome::WedgeLadder(report) = outcome else {
        panic!("expected wedge ladder outcome");
    };
    // Diffs 0, 1, 1, 1, 1: everything within 2 yards.
    assert_eq!(report.grade, 5);
    save(&db, &session);

    // Invocation 3: review survives the reload, then clear.
    let mut session = load(&db);
    assert_eq!(session.state(), DrillState::ReviewingResults);
    assert!(session.outcome().is_some());
    session.cancel().unwrap();
    save(&db, &session);

    let session = load(&db);
    assert_eq!(session.state(), DrillState::Idle);
}

#[test]
fn test_random_ladder_reproducible_by_seed() {
    let config = LadderConfig::new(40, 120, LadderMode::Random);
    let first = config.targets(Some(99)).unwrap();
    let second = config.targets(Some(99)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 17);
}

#[test]
fn test_swedish_drill_through_state_machine() {
    let mut session = DrillSession::new();
    let targets_m = swedish_putt_order(Some(5));
    session
        .start(ActiveDrill::Swedish { targets_m: targets_m.clone() })
        .unwrap();

    // Par on every putt.
    let results = vec![0.8; targets_m.len()];
    let outcome = session.submit(&results, &GradeScale::default()).unwrap();
    let DrillOutcome::Swedish(report) = outcome else {
        panic!("expected swedish outcome");
    };
    assert_eq!(report.total_score, 0);
    // Total 0 is below the lowest anchor (0.2) and clamps to -2.
    assert_eq!(report.putting_handicap, -2.0);
    assert_eq!(report.putts.len(), 18);
}

#[test]
fn test_cancelled_drill_leaves_no_trace() {
    let db = Database::open_memory().unwrap();
    let mut session = DrillSession::new();
    let config = LadderConfig::new(50, 70, LadderMode::InOrder);
    let targets = config.targets(None).unwrap();
    session
        .start(ActiveDrill::WedgeLadder { config, targets })
        .unwrap();
    save(&db, &session);

    let mut session = load(&db);
    session.cancel().unwrap();
    save(&db, &session);

    let mut session = load(&db);
    assert_eq!(session.state(), DrillState::Idle);
    assert!(session.active().is_none());
    // A fresh start is legal again.
    let config = LadderConfig::new(50, 70, LadderMode::InOrder);
    let targets = config.targets(None).unwrap();
    assert!(session.start(ActiveDrill::WedgeLadder { config, targets }).is_ok());
}
