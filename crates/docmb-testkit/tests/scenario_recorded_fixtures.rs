//! Scenario: every recorded fan-out under `fixtures/` merges as expected.

use docmb_testkit::{fixtures_dir, init_test_tracing, load_scenario, run_scenario};
use std::fs;

#[test]
fn every_fixture_merges_as_recorded() {
    init_test_tracing();

    let mut paths: Vec<_> = fs::read_dir(fixtures_dir())
        .expect("fixtures dir")
        .map(|e| e.expect("dir entry").path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    assert!(paths.len() >= 8, "expected recorded fixtures, got {paths:?}");

    for path in paths {
        let scenario = load_scenario(&path).unwrap();
        let merged = run_scenario(&scenario).unwrap();
        assert!(
            scenario.matches(&merged),
            "{}: expected {:?}, got index={:?} outcome={:?} errors={:?}",
            scenario.name,
            scenario.expect,
            merged.index,
            merged.outcome,
            merged.reply.errors
        );
    }
}

#[test]
fn found_fixture_returns_the_found_reply_verbatim() {
    let scenario = load_scenario(fixtures_dir().join("remove_found_wins.json")).unwrap();
    let merged = run_scenario(&scenario).unwrap();

    assert_eq!(merged.reply, scenario.replies[1].reply);
}

#[test]
fn malformed_fixture_reports_path() {
    let dir = std::env::temp_dir().join(format!("docmb-testkit-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.json");
    fs::write(&path, "{ \"name\": ").unwrap();

    let err = load_scenario(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));

    let _ = fs::remove_dir_all(&dir);
}
