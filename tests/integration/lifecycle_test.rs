//! Integration tests for the full suppression lifecycle
//!
//! Tests the complete flow:
//! 1. Analyzer reports findings, report shows them
//! 2. Team accepts them (all, or per rule)
//! 3. Later runs stay silent until a regression appears
//! 4. Fixed findings leave stale entries that prune removes

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a quell command in a directory
fn quell_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("quell"));
    cmd.current_dir(dir);
    cmd
}

/// Write a results file and return its path as a string
fn write_results(dir: &Path, name: &str, json: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path.to_string_lossy().to_string()
}

const THREE_CONSOLE: &str = r#"{
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

const FOUR_CONSOLE: &str = r#"{
  "files": [
    {
      "path": "a.js",
      "messages": [
        { "rule_id": "no-console", "severity": "error", "line": 3, "column": 1, "text": "Unexpected console statement." },
        { "rule_id": "no-console", "severity": "error", "line": 10, "column": 5, "text": "Unexpected console statement." },
        { "rule_id": "no-console", "severity": "error", "line": 17, "column": 1, "text": "Unexpected console statement." },
        { "rule_id": "no-console", "severity": "error", "line": 25, "column": 9, "text": "Unexpected console statement." }
      ]
    }
  ]
}"#;

/// Full cycle: report fails, accept-all silences, a 4th occurrence
/// resurfaces the whole group.
#[test]
fn test_full_lifecycle_accept_then_regress() {
    let temp = TempDir::new().unwrap();
    let repo = temp.path();
    let results = write_results(repo, "results.json", THREE_CONSOLE);

    // Step 1: three findings visible
    quell_in(repo)
        .args(["report", "-r", &results])
        .assert()
        .failure()
        .stdout(predicate::str::contains("3 visible finding(s)"));

    // Step 2: accept them all
    quell_in(repo)
        .args(["accept-all", "-r", &results])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accepted 1 occurrence group(s)"));

    // Ledger landed at the default location with the right count
    let ledger = fs::read_to_string(repo.join(".quell-suppressions.json")).unwrap();
    assert!(ledger.contains("no-console"));
    assert!(ledger.contains("\"count\": 3"));

    // Step 3: identical re-run is silent
    quell_in(repo)
        .args(["report", "-r", &results])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 finding(s) suppressed"))
        .stdout(predicate::str::contains("No visible findings"));

    // Step 4: a fourth occurrence appears; the whole group resurfaces
    let regressed = write_results(repo, "regressed.json", FOUR_CONSOLE);
    quell_in(repo)
        .args(["report", "-r", &regressed])
        .assert()
        .failure()
        .stdout(predicate::str::contains("4 visible finding(s)"));
}

/// accept-rule only silences the named rule
#[test]
fn test_accept_rule_leaves_other_rules_visible() {
    let temp = TempDir::new().unwrap();
    let repo = temp.path();
    let results = write_results(
        repo,
        "results.json",
        r#"{
          "files": [
            {
              "path": "a.js",
              "messages": [
                { "rule_id": "no-console", "severity": "error", "line": 3, "column": 1, "text": "console call" },
                { "rule_id": "eqeqeq", "severity": "warn", "line": 8, "column": 1, "text": "expected ===" }
              ]
            }
          ]
        }"#,
    );

    quell_in(repo).args(["accept-rule", "no-console", "-r", &results]).assert().success();

    quell_in(repo)
        .args(["report", "-r", &results])
        .assert()
        .failure()
        .stdout(predicate::str::contains("eqeqeq"))
        .stdout(predicate::str::contains("1 visible finding(s)"))
        .stdout(predicate::str::contains("1 finding(s) suppressed"));
}

/// Fix findings, then prune: dry-run previews, real prune persists
#[test]
fn test_prune_after_fixes() {
    let temp = TempDir::new().unwrap();
    let repo = temp.path();
    let results = write_results(repo, "results.json", THREE_CONSOLE);

    quell_in(repo).args(["accept-all", "-r", &results]).assert().success();

    // all findings fixed; a.js still analyzed (present, clean)
    let fixed = write_results(
        repo,
        "fixed.json",
        r#"{ "files": [ { "path": "a.js", "messages": [] } ] }"#,
    );

    // dry-run previews without touching the ledger
    quell_in(repo)
        .args(["prune", "--dry-run", "-r", &fixed])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would remove 1 stale entr(ies)"));
    let ledger = fs::read_to_string(repo.join(".quell-suppressions.json")).unwrap();
    assert!(ledger.contains("no-console"));

    // real prune removes the entry
    quell_in(repo)
        .args(["prune", "-r", &fixed])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 stale entr(ies)"));
    let ledger = fs::read_to_string(repo.join(".quell-suppressions.json")).unwrap();
    assert!(!ledger.contains("no-console"));

    // pruning again is a no-op
    quell_in(repo)
        .args(["prune", "-r", &fixed])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stale entries"));
}

/// .quell.toml can point at a custom ledger location
#[test]
fn test_config_ledger_location() {
    let temp = TempDir::new().unwrap();
    let repo = temp.path();
    fs::write(
        repo.join(".quell.toml"),
        "[suppressions]\nledger_location = \"ci/ledger.json\"\n",
    )
    .unwrap();
    // the configured path is explicit, so it must exist
    fs::create_dir_all(repo.join("ci")).unwrap();
    fs::write(repo.join("ci/ledger.json"), "{}").unwrap();

    let results = write_results(repo, "results.json", THREE_CONSOLE);
    quell_in(repo).args(["accept-all", "-r", &results]).assert().success();

    let ledger = fs::read_to_string(repo.join("ci/ledger.json")).unwrap();
    assert!(ledger.contains("no-console"));
    assert!(!repo.join(".quell-suppressions.json").exists());
}

/// Saving an unchanged ledger twice produces byte-identical output
#[test]
fn test_repeated_accept_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let repo = temp.path();
    let results = write_results(repo, "results.json", THREE_CONSOLE);

    quell_in(repo).args(["accept-all", "-r", &results]).assert().success();
    let first = fs::read(repo.join(".quell-suppressions.json")).unwrap();

    quell_in(repo).args(["accept-all", "-r", &results]).assert().success();
    let second = fs::read(repo.join(".quell-suppressions.json")).unwrap();

    assert_eq!(first, second);
}
