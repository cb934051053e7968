use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures").join(name)
}

/// Copy a fixture into a fresh directory so the report lands next to it
fn staged_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("temp dir should be created");
    let document = temp.path().join(name);
    fs::copy(fixture(name), &document).expect("fixture should be copied");
    (temp, document)
}

fn read_report(path: &Path) -> String {
    fs::read_to_string(path).expect("report should be readable")
}

#[test]
fn export_writes_csv_next_to_document() {
    let (temp, document) = staged_fixture("two-spaces.pdf");

    cargo_bin_cmd!("pdf-spaces")
        .arg(&document)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let csv = read_report(&temp.path().join("two-spaces.csv"));
    insta::assert_snapshot!("cli_two_spaces_csv", csv);
}

#[test]
fn header_appears_once_and_rows_follow_document_order() {
    let (temp, document) = staged_fixture("two-spaces.pdf");

    cargo_bin_cmd!("pdf-spaces").arg(&document).assert().success();

    let csv = read_report(&temp.path().join("two-spaces.csv"));
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.iter().filter(|line| line.starts_with("Title,")).count(), 1);
    assert!(lines[1].starts_with("Office,"));
    assert!(lines[2].starts_with("Corridor,"));
}

#[test]
fn document_without_spaces_yields_header_only() {
    let (temp, document) = staged_fixture("no-spaces.pdf");

    cargo_bin_cmd!("pdf-spaces").arg(&document).assert().success();

    let csv = read_report(&temp.path().join("no-spaces.csv"));
    assert_eq!(csv, "Title,Area (m2),Perimeter (m)\n");
}

#[test]
fn verbose_prints_each_space_and_report_location() {
    let (temp, document) = staged_fixture("two-spaces.pdf");
    let report = temp.path().join("two-spaces.csv");

    cargo_bin_cmd!("pdf-spaces")
        .arg(&document)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Office"))
        .stdout(predicate::str::contains("Area: 6.45 square meters"))
        .stdout(predicate::str::contains("Perimeter: 10.16 meters"))
        .stdout(predicate::str::contains("Title: Corridor"))
        .stdout(predicate::str::contains("Path: [(0, 0) "))
        .stdout(predicate::str::contains(format!("Data exported to {}", report.display())));
}

#[test]
fn malformed_group_is_reported_and_skipped() {
    let (temp, document) = staged_fixture("malformed-group.pdf");

    cargo_bin_cmd!("pdf-spaces")
        .arg(&document)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("abc 10"));

    let csv = read_report(&temp.path().join("malformed-group.csv"));
    assert_eq!(csv, "Title,Area (m2),Perimeter (m)\nStore,25.81,20.32\n");
}

#[test]
fn output_flag_overrides_report_location() {
    let (temp, document) = staged_fixture("two-spaces.pdf");
    let report = temp.path().join("reports").join("level1.csv");
    fs::create_dir_all(report.parent().unwrap()).unwrap();

    cargo_bin_cmd!("pdf-spaces")
        .arg(&document)
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    assert!(read_report(&report).starts_with("Title,Area (m2),Perimeter (m)\nOffice,"));
    assert!(!temp.path().join("two-spaces.csv").exists());
}

#[test]
fn dpi_flag_rescales_coordinates() {
    let (temp, document) = staged_fixture("two-spaces.pdf");

    cargo_bin_cmd!("pdf-spaces").arg(&document).arg("--dpi").arg("144").assert().success();

    let csv = read_report(&temp.path().join("two-spaces.csv"));
    assert!(csv.contains("Office,1.61,5.08"));
}

#[test]
fn fails_for_missing_file() {
    cargo_bin_cmd!("pdf-spaces")
        .arg(fixture("missing.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("file does not exist"));
}

#[test]
fn fails_without_document_argument() {
    cargo_bin_cmd!("pdf-spaces").assert().failure().stderr(predicate::str::contains("FILE"));
}

#[test]
fn fails_when_report_cannot_be_created() {
    let (temp, document) = staged_fixture("two-spaces.pdf");

    cargo_bin_cmd!("pdf-spaces")
        .arg(&document)
        .arg("--output")
        .arg(temp.path().join("missing-dir").join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write report"));
}
