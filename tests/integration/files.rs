//! File runner tests

use exprsolve::{run_file, run_files, Mode, SolverConfig};
use std::fs;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("example.txt")
}

#[test]
fn test_run_file_both() {
    let report = run_file(&fixture(), &SolverConfig::default(), Mode::Both).unwrap();
    assert_eq!(report.definitions, 15);
    assert_eq!(report.value, Some(152));
    let solution = report.solution.unwrap();
    assert_eq!(solution.value, 301);
    assert_eq!(
        report.equation.as_deref(),
        Some("((4 + (2 * (humn - 3))) / 4) = 150")
    );
}

#[test]
fn test_run_file_single_mode() {
    let report = run_file(&fixture(), &SolverConfig::default(), Mode::Evaluate).unwrap();
    assert_eq!(report.value, Some(152));
    assert!(report.solution.is_none());

    let report = run_file(&fixture(), &SolverConfig::default(), Mode::Solve).unwrap();
    assert!(report.value.is_none());
    assert_eq!(report.solution.map(|s| s.value), Some(301));
}

#[test]
fn test_run_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_file(&dir.path().join("nope.txt"), &SolverConfig::default(), Mode::Both).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read file"));
}

#[test]
fn test_run_files_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.txt");
    fs::write(&bad, "root: a ^ b\n").unwrap();
    let small = dir.path().join("small.txt");
    fs::write(&small, "root: a + humn\na: 1\nhumn: 4\n").unwrap();

    let results = run_files(&[fixture(), bad, small], &SolverConfig::default(), Mode::Both);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().value, Some(152));
    assert!(format!("{:#}", results[1].as_ref().unwrap_err()).contains("unknown operator"));
    let small = results[2].as_ref().unwrap();
    assert_eq!(small.value, Some(5));
    assert_eq!(small.solution.as_ref().map(|s| s.value), Some(1));
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_file(&fixture(), &SolverConfig::default(), Mode::Solve).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["solution"]["value"], 301);
    assert_eq!(json["solution"]["steps"][0]["op"], "floor_div");
    assert_eq!(json["solution"]["steps"][0]["side"], "right_known");
    assert!(json.get("value").is_none());
}
