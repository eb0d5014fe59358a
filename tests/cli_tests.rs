#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = "\
CSC 116,Intro to Programming - Java,001,3,jdyoung2,MW,910,1100
CSC 216,Software Development Fundamentals,001,3,sesmith5,TH,1330,1445
CSC 492,Senior Design Project,001,3,chgurney,A
";

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create catalog file");
    file.write_all(CATALOG.as_bytes()).expect("write catalog");
    file.flush().expect("flush catalog");
    file
}

#[allow(deprecated)]
fn run_cli(catalog: &NamedTempFile, script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.arg(catalog.path())
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn cli_lists_catalog() {
    let catalog = catalog_file();
    run_cli(&catalog, "catalog\nquit\n")
        .success()
        .stdout(str_contains("Loaded 3 courses."))
        .stdout(str_contains("MW 9:10AM-11:00AM"))
        .stdout(str_contains("Arranged"));
}

#[test]
fn cli_reports_duplicate_enrollment() {
    let catalog = catalog_file();
    run_cli(&catalog, "add CSC 216 001\nadd CSC 216 001\nquit\n")
        .success()
        .stdout(str_contains("Added CSC 216-001."))
        .stdout(str_contains("Error: You are already enrolled in CSC 216"));
}

#[test]
fn cli_reports_missing_course_and_bad_remove() {
    let catalog = catalog_file();
    run_cli(&catalog, "add CSC 999 001\nremove 3\nquit\n")
        .success()
        .stdout(str_contains("CSC 999-001 is not in the catalog."))
        .stdout(str_contains("No activity at index 3."));
}

#[test]
fn cli_adds_events_and_rejects_duplicates() {
    let catalog = catalog_file();
    run_cli(
        &catalog,
        "event M 1800 1900 Club Meeting | Weekly sync\nevent W 1200 1300 Club Meeting\nevent MM 1800 1900 Other\nfull\nquit\n",
    )
    .success()
    .stdout(str_contains("Added event Club Meeting."))
    .stdout(str_contains(
        "Error: You have already created an event called Club Meeting",
    ))
    .stdout(str_contains("Error: Invalid meeting days and times."))
    .stdout(str_contains("Weekly sync"));
}

#[test]
fn cli_exports_schedule() {
    let catalog = catalog_file();
    let out = NamedTempFile::new().expect("create export file");
    let path = out.path().to_string_lossy().to_string();
    let script = format!("add CSC 492 001\ntitle Fall Plan\nexport {path}\nquit\n");
    run_cli(&catalog, &script)
        .success()
        .stdout(str_contains("Schedule title set to 'Fall Plan'."))
        .stdout(str_contains("Schedule exported to"));

    let written = std::fs::read_to_string(out.path()).expect("read export");
    assert_eq!(written, "CSC 492,Senior Design Project,001,3,chgurney,A\n");
}

#[test]
#[allow(deprecated)]
fn cli_fails_without_catalog() {
    Command::cargo_bin("cli")
        .expect("cli binary")
        .arg("does/not/exist.txt")
        .assert()
        .failure()
        .stderr(str_contains("Cannot find file."));
}
