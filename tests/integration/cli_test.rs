//! End-to-end runs of the csvpart binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with state and config isolated under a per-test directory.
fn csvpart(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("csvpart").unwrap();
    cmd.env("CSVPART_STATE_DIR", home.path().join("state"));
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd.env("HOME", home.path());
    cmd
}

/// Writes the documented sample document and returns its path.
fn write_sample(home: &TempDir) -> PathBuf {
    let path = home.path().join("input.csv");
    fs::write(&path, "a,b\n1,2\n3,4\n5,6\n").unwrap();
    path
}

#[test]
fn split_writes_expected_parts() {
    let home = TempDir::new().unwrap();
    let input = write_sample(&home);
    let out = home.path().join("out");

    csvpart(&home)
        .args(["split"])
        .arg(&input)
        .args(["--rows-per-file", "2", "--yes"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("part_1_of_2.csv"));

    assert_eq!(
        fs::read_to_string(out.join("part_1_of_2.csv")).unwrap(),
        "a,b\n1,2\n3,4"
    );
    assert_eq!(
        fs::read_to_string(out.join("part_2_of_2.csv")).unwrap(),
        "a,b\n5,6"
    );
}

#[test]
fn split_json_summary_lists_parts() {
    let home = TempDir::new().unwrap();
    let input = write_sample(&home);
    let out = home.path().join("out");

    let assert = csvpart(&home)
        .args(["split"])
        .arg(&input)
        .args(["--rows-per-file", "2", "--yes", "--json"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(summary["total_rows"], 4);
    assert_eq!(summary["header_row"], "a,b");
    assert_eq!(summary["files"].as_array().unwrap().len(), 2);
    assert_eq!(summary["files"][0]["name"], "part_1_of_2.csv");
}

#[test]
fn second_split_is_rate_limited() {
    let home = TempDir::new().unwrap();
    let input = write_sample(&home);
    let out = home.path().join("out");

    csvpart(&home)
        .args(["split"])
        .arg(&input)
        .args(["--rows-per-file", "2", "--yes"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    csvpart(&home)
        .args(["split"])
        .arg(&input)
        .args(["--rows-per-file", "2", "--yes"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rate limit active"));
}

#[test]
fn cooldown_reset_unblocks_a_new_split() {
    let home = TempDir::new().unwrap();
    let input = write_sample(&home);
    let out = home.path().join("out");

    csvpart(&home)
        .args(["split"])
        .arg(&input)
        .args(["--rows-per-file", "2", "--yes"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    csvpart(&home).args(["cooldown", "reset"]).assert().success();

    csvpart(&home)
        .args(["split"])
        .arg(&input)
        .args(["--rows-per-file", "2", "--yes"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();
}

#[test]
fn cooldown_status_is_ready_on_a_fresh_profile() {
    let home = TempDir::new().unwrap();

    csvpart(&home)
        .args(["cooldown", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready"));
}

#[test]
fn cooldown_status_reports_remaining_time_after_a_split() {
    let home = TempDir::new().unwrap();
    let input = write_sample(&home);
    let out = home.path().join("out");

    csvpart(&home)
        .args(["split"])
        .arg(&input)
        .args(["--rows-per-file", "2", "--yes"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    csvpart(&home)
        .args(["cooldown", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cooling down"));
}

#[test]
fn analyze_reports_rows_and_part_estimate() {
    let home = TempDir::new().unwrap();
    let input = write_sample(&home);

    let assert = csvpart(&home)
        .args(["analyze"])
        .arg(&input)
        .args(["--rows-per-file", "2", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(summary["total_rows"], 4);
    assert_eq!(summary["has_header"], true);
    assert_eq!(summary["estimated_files"], 2);
    assert_eq!(summary["preview"].as_array().unwrap().len(), 4);
}

#[test]
fn analyze_does_not_consume_the_cooldown() {
    let home = TempDir::new().unwrap();
    let input = write_sample(&home);

    csvpart(&home).args(["analyze"]).arg(&input).assert().success();

    csvpart(&home)
        .args(["cooldown", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready"));
}

#[test]
fn rejects_non_csv_extension() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("data.txt");
    fs::write(&path, "a,b\n1,2\n").unwrap();

    csvpart(&home)
        .args(["split"])
        .arg(&path)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only .csv files"));
}

#[test]
fn header_only_file_reports_no_data_rows() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("header.csv");
    fs::write(&path, "a,b\n").unwrap();

    csvpart(&home)
        .args(["split"])
        .arg(&path)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data rows"));
}

#[test]
fn blank_file_reports_empty_document() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("blank.csv");
    fs::write(&path, "\n  \n\n").unwrap();

    csvpart(&home)
        .args(["split"])
        .arg(&path)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn existing_parts_abort_without_yes_in_non_interactive_mode() {
    let home = TempDir::new().unwrap();
    let input = write_sample(&home);
    let out = home.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("part_1_of_2.csv"), "old").unwrap();

    csvpart(&home)
        .args(["split"])
        .arg(&input)
        .args(["--rows-per-file", "2"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    // Nothing overwritten, and the aborted attempt did not consume the cooldown
    assert_eq!(fs::read_to_string(out.join("part_1_of_2.csv")).unwrap(), "old");
    csvpart(&home)
        .args(["cooldown", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready"));
}
