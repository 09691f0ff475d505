mod common;
use common::{mindless, setup_store};
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_calendar_csv() {
    let dir = TempDir::new().unwrap();
    let db = setup_store(
        &dir,
        &["Exercise", "Sleep", "Misc"],
        &[
            (1, "2020-08-21T01:30:22.000000", "2020-08-22T14:02:02.000000"),
            (2, "2020-08-22 07:30:22", "2020-08-22 08:02:02"),
            (1, "2020-08-22T12:30:22", "2020-08-22T14:02:02"),
        ],
    );
    let out = dir.path().join("calendar.csv");

    mindless(dir.path())
        .args(["--db", db.to_str().unwrap(), "export", "--file"])
        .arg(&out)
        .arg("--force")
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(
        content,
        "Subject,Start Date,Start Time,End Date,End Time\n\
         Exercise,2020-08-21,01:30:22,2020-08-22,14:02:02\n\
         Sleep,2020-08-22,07:30:22,2020-08-22,08:02:02\n\
         Exercise,2020-08-22,12:30:22,2020-08-22,14:02:02\n"
    );
}

#[test]
fn test_export_without_instances_writes_header() {
    let dir = TempDir::new().unwrap();
    let db = setup_store(&dir, &["Misc"], &[]);
    let out = dir.path().join("empty.csv");

    mindless(dir.path())
        .args(["--db", db.to_str().unwrap(), "export", "--force", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content, "Subject,Start Date,Start Time,End Date,End Time\n");
}

#[test]
fn test_export_malformed_timestamp_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let db = setup_store(
        &dir,
        &["Work"],
        &[
            (1, "2020-08-20T10:30:22", "2020-08-21T14:02:02"),
            (1, "not a date", "2020-08-21T14:02:02"),
        ],
    );
    let out = dir.path().join("calendar.csv");

    mindless(dir.path())
        .args(["--db", db.to_str().unwrap(), "export", "--force", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("not a date"));

    assert!(!out.exists());
}

#[test]
fn test_export_missing_database_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.db");
    let out = dir.path().join("calendar.csv");

    mindless(dir.path())
        .args(["--db", missing.to_str().unwrap(), "export", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("database not found"));

    assert!(!missing.exists());
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    let db = setup_store(
        &dir,
        &["Project"],
        &[(1, "2020-08-16T12:30:22", "2020-08-17T14:02:02")],
    );
    let out = dir.path().join("calendar.csv");
    fs::write(&out, "keep me").unwrap();

    mindless(dir.path())
        .args(["--db", db.to_str().unwrap(), "export", "--file"])
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    mindless(dir.path())
        .args(["--db", db.to_str().unwrap(), "export", "--file"])
        .arg(&out)
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Project,2020-08-16"));
}
