// Integration tests for the pick tracker.
//
// These tests exercise the full system end-to-end using the library crate's
// public API: pick log persistence over both stores, eligibility derivation,
// forgotten-date detection against a realistic snapshot fixture, and the
// TSV import pipeline.

use chrono::NaiveDate;

use ttfl_tracker::eligibility::{self, REUSE_WINDOW_DAYS};
use ttfl_tracker::forgotten::forgotten_dates;
use ttfl_tracker::import::{run_import, tsv};
use ttfl_tracker::picks::{Pick, PickStore, PICKS_KEY, SKIP_PLAYER_ID};
use ttfl_tracker::schedule::Snapshot;
use ttfl_tracker::store::{KeyValueStore, MemoryStore, SqliteStore};

// ===========================================================================
// Test helpers
// ===========================================================================

/// Fixture directory path (relative to project root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

const JOKIC: i64 = 203999;
const DONCIC: i64 = 1629029;
const WEMBANYAMA: i64 = 1641705;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn load_snapshot() -> Snapshot {
    let raw = std::fs::read_to_string(format!("{FIXTURES}/snapshot.json"))
        .expect("snapshot fixture should exist");
    serde_json::from_str(&raw).expect("snapshot fixture should parse")
}

// ===========================================================================
// Pick log over real storage
// ===========================================================================

#[test]
fn pick_log_round_trips_through_sqlite() {
    let picks = PickStore::new(SqliteStore::open(":memory:").unwrap());

    picks.save(JOKIC, date("2025-01-05")).unwrap();
    picks.skip(date("2025-01-06")).unwrap();
    picks.save(DONCIC, date("2025-01-07")).unwrap();
    picks.remove(date("2025-01-07")).unwrap();

    let mut log = picks.get_all();
    log.sort_by_key(|p| p.date);
    assert_eq!(
        log,
        vec![Pick::player(JOKIC, date("2025-01-05")), Pick::skipped(date("2025-01-06"))]
    );
}

#[test]
fn stored_json_matches_documented_layout() {
    // A log written by another client under the fixed key reads back as-is.
    let store = MemoryStore::new();
    store
        .set(
            PICKS_KEY,
            r#"[{"playerId":203999,"date":"2025-01-05"},
                {"playerId":-1,"date":"2025-01-06","isSkipped":true}]"#,
        )
        .unwrap();

    let picks = PickStore::new(store);
    let mut log = picks.get_all();
    log.sort_by_key(|p| p.date);
    assert_eq!(
        log,
        vec![Pick::player(JOKIC, date("2025-01-05")), Pick::skipped(date("2025-01-06"))]
    );
}

#[test]
fn corrupt_sqlite_record_degrades_to_empty_log() {
    let store = SqliteStore::open(":memory:").unwrap();
    store.set(PICKS_KEY, "{ definitely not an array").unwrap();

    let picks = PickStore::new(store);
    assert!(picks.get_all().is_empty());

    // And the store recovers on the next write.
    picks.save(JOKIC, date("2025-01-05")).unwrap();
    assert_eq!(picks.get_all().len(), 1);
}

// ===========================================================================
// Eligibility over a realistic season flow
// ===========================================================================

#[test]
fn picks_lock_and_unlock_across_the_month() {
    let picks = PickStore::new(MemoryStore::new());
    picks.save(JOKIC, date("2025-01-01")).unwrap();
    let log = picks.get_all();

    // Locked throughout the window, counting down.
    assert!(!eligibility::is_eligible(&log, JOKIC, date("2025-01-02")));
    assert_eq!(
        eligibility::days_until_eligible(&log, JOKIC, date("2025-01-02")),
        Some(29)
    );
    assert_eq!(
        eligibility::days_until_eligible(&log, JOKIC, date("2025-01-30")),
        Some(1)
    );

    // Free again exactly 30 days later.
    assert!(eligibility::is_eligible(&log, JOKIC, date("2025-01-31")));
}

#[test]
fn todays_recorded_pick_leaves_today_eligible() {
    let picks = PickStore::new(MemoryStore::new());
    picks.save(JOKIC, date("2025-01-10")).unwrap();

    let log = picks.get_all();
    assert!(eligibility::is_eligible(&log, JOKIC, date("2025-01-10")));
}

#[test]
fn batch_flags_cover_a_full_roster() {
    let picks = PickStore::new(MemoryStore::new());
    picks.save(JOKIC, date("2025-01-05")).unwrap();
    picks.skip(date("2025-01-06")).unwrap();
    picks.save(DONCIC, date("2024-12-01")).unwrap(); // long outside the window

    let log = picks.get_all();
    let map = eligibility::eligibility_map(&log, date("2025-01-15"));

    let jokic = eligibility::flags_for(&map, JOKIC);
    assert!(!jokic.is_eligible);
    assert_eq!(jokic.last_picked_date, Some(date("2025-01-05")));
    assert_eq!(jokic.days_until_eligible, Some(REUSE_WINDOW_DAYS - 10));

    let doncic = eligibility::flags_for(&map, DONCIC);
    assert!(doncic.is_eligible);

    let wemby = eligibility::flags_for(&map, WEMBANYAMA);
    assert!(wemby.is_eligible);
    assert!(wemby.last_picked_date.is_none());
}

// ===========================================================================
// Forgotten dates against the snapshot fixture
// ===========================================================================

#[test]
fn forgotten_dates_surface_unresolved_game_days() {
    let snapshot = load_snapshot();
    let picks = PickStore::new(MemoryStore::new());
    picks.save(JOKIC, date("2025-01-05")).unwrap();
    picks.skip(date("2025-01-08")).unwrap();

    let log = picks.get_all();
    let forgotten = forgotten_dates(&log, Some(&snapshot), date("2025-01-15"));

    // 2025-01-05 is picked, 2025-01-08 is skipped, 2025-01-15 is today;
    // that leaves the two game days in between, oldest first.
    assert_eq!(forgotten, vec![date("2025-01-10"), date("2025-01-14")]);
}

#[test]
fn forgotten_dates_without_snapshot_is_empty() {
    let picks = PickStore::new(MemoryStore::new());
    let log = picks.get_all();
    assert!(forgotten_dates(&log, None, date("2025-01-15")).is_empty());
}

// ===========================================================================
// Import pipeline: TSV -> matcher -> reconciler -> store
// ===========================================================================

#[test]
fn tsv_import_end_to_end() {
    let snapshot = load_snapshot();
    let picks = PickStore::new(SqliteStore::open(":memory:").unwrap());

    // A local pick that conflicts with an import row inside the window.
    picks.save(DONCIC, date("2025-01-05")).unwrap();

    let file = std::fs::File::open(format!("{FIXTURES}/history.tsv"))
        .expect("history fixture should exist");
    let rows = tsv::read_import_rows(file).unwrap();
    assert_eq!(rows.len(), 4);

    let directory = snapshot.player_directory();
    let report = run_import(&picks, &directory, &rows, date("2025-01-15")).unwrap();

    // Jokic (diacritic-free spelling) and Wembanyama land; the December row
    // is outside the 30-day window; the unknown name is reported as data.
    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.unmatched, vec!["Somebody Unknown".to_string()]);

    // The import overwrote the conflicting local pick for 2025-01-05.
    assert_eq!(
        picks.get_for_date(date("2025-01-05")).unwrap().player_id,
        JOKIC
    );
    assert_eq!(
        picks.get_for_date(date("2025-01-08")).unwrap().player_id,
        WEMBANYAMA
    );
    // The stale row created nothing.
    assert!(picks.get_for_date(date("2024-12-01")).is_none());

    // Natural-key invariant holds after the merge.
    let log = picks.get_all();
    for pick in &log {
        assert_eq!(log.iter().filter(|p| p.date == pick.date).count(), 1);
    }
}

#[test]
fn import_feeds_straight_into_eligibility() {
    let snapshot = load_snapshot();
    let picks = PickStore::new(MemoryStore::new());

    let rows = vec![ttfl_tracker::import::ImportRow {
        date: date("2025-01-10"),
        player: "nikola jokić".to_string(),
    }];
    run_import(&picks, &snapshot.player_directory(), &rows, date("2025-01-15")).unwrap();

    let log = picks.get_all();
    assert!(!eligibility::is_eligible(&log, JOKIC, date("2025-01-15")));
    assert_eq!(
        eligibility::days_until_eligible(&log, JOKIC, date("2025-01-15")),
        Some(25)
    );
}

// ===========================================================================
// Skips stay inert everywhere
// ===========================================================================

#[test]
fn skips_never_affect_eligibility_or_sentinels() {
    let picks = PickStore::new(MemoryStore::new());
    picks.skip(date("2025-02-01")).unwrap();

    let log = picks.get_all();
    for player_id in [JOKIC, DONCIC, SKIP_PLAYER_ID] {
        for day in ["2025-02-01", "2025-02-02", "2025-02-28"] {
            assert!(eligibility::is_eligible(&log, player_id, date(day)));
        }
    }
}
