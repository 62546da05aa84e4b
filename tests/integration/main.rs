//! Integration tests for the quell CLI
//!
//! These drive the real binary against temp directories, testing the full
//! cycle of: report -> accept -> report -> prune.

// Include lifecycle tests from the same directory
mod lifecycle_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a quell command
fn quell() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("quell"))
}

/// Write an analysis results file with 3 no-console findings in a.js
fn write_three_findings(dir: &Path) -> String {
    let results = r#"{
      "files": [
        {
          "path": "a.js",
          "messages": [
            { "rule_id": "no-console", "severity": "error", "line": 3, "column": 1, "text": "Unexpected console statement." },
            { "rule_id": "no-console", "severity": "error", "line": 10, "column": 5, "text": "Unexpected console statement." },
            { "rule_id": "no-console", "severity": "error", "line": 17, "column": 1, "text": "Unexpected console statement." }
          ]
        }
      ]
    }"#;
    let path = dir.join("results.json");
    fs::write(&path, results).unwrap();
    path.to_string_lossy().to_string()
}

// =============================================================================
// ERROR HANDLING TESTS
// =============================================================================

/// A missing default ledger is just an empty ledger
#[test]
fn test_report_without_ledger_shows_everything() {
    let temp = TempDir::new().unwrap();
    let results = write_three_findings(temp.path());

    quell()
        .args(["report", "-r", &results])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("no-console"))
        .stdout(predicate::str::contains("3 visible finding(s)"));
}

/// An explicitly requested ledger that does not exist is a hard error
#[test]
fn test_explicit_missing_ledger_fails() {
    let temp = TempDir::new().unwrap();
    let results = write_three_findings(temp.path());

    quell()
        .args(["report", "-r", &results, "--ledger", "nope.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

/// A present-but-unparsable ledger aborts instead of being discarded
#[test]
fn test_corrupt_ledger_fails() {
    let temp = TempDir::new().unwrap();
    let results = write_three_findings(temp.path());
    fs::write(temp.path().join(".quell-suppressions.json"), "not json at all").unwrap();

    quell()
        .args(["report", "-r", &results])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}

/// Pruning against a batch that misses ledger-referenced files aborts
#[test]
fn test_prune_partial_batch_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".quell-suppressions.json"),
        r#"{ "a.js": { "no-console": { "count": 1 } }, "gone.js": { "eqeqeq": { "count": 2 } } }"#,
    )
    .unwrap();

    let results = write_three_findings(temp.path());
    quell()
        .args(["prune", "-r", &results])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not cover"))
        .stderr(predicate::str::contains("gone.js"));

    // ledger unchanged
    let ledger = fs::read_to_string(temp.path().join(".quell-suppressions.json")).unwrap();
    assert!(ledger.contains("gone.js"));
}

/// Missing results file fails with a useful message
#[test]
fn test_missing_results_file_fails() {
    let temp = TempDir::new().unwrap();

    quell()
        .args(["report", "-r", "no-such-results.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-results.json"));
}

// =============================================================================
// OUTPUT MODE TESTS
// =============================================================================

/// --json emits machine-readable output
#[test]
fn test_json_output_mode() {
    let temp = TempDir::new().unwrap();
    let results = write_three_findings(temp.path());

    let output = quell()
        .args(["--json", "accept-all", "-r", &results])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("groups_accepted"))
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["groups_accepted"], 1);
    assert_eq!(parsed["ledger_entries"], 1);
}

/// Version subcommand
#[test]
fn test_version() {
    quell()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quell v"));
}
