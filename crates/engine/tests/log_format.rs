use std::fs;
use std::io::Cursor;

use tempfile::TempDir;
use wordcount_engine::{Config, ConfigBuilder, EngineError, run};

fn config_with_log(dir: &TempDir) -> Config {
    ConfigBuilder::default()
        .lines(true)
        .log_file(Some(dir.path().join("out.log")))
        .build()
        .unwrap()
}

#[test]
fn log_contains_wanted_processing_and_found_sections_in_order() {
    let dir = TempDir::new().unwrap();
    let config = config_with_log(&dir);

    let report = run(&config, Cursor::new("alpha beta\ngamma\n")).unwrap();
    assert_eq!(report, "2");

    let log = fs::read_to_string(dir.path().join("out.log")).unwrap();
    let expected = "\
wanted lines:     true
wanted bytes:     false
wanted chars:     false
wanted words :    false
wanted spaces:    false
wanted lowercase: false
wanted uppercase: false
processing line   1: alpha beta
processing line   2: gamma
lines found: 2
words found: 3
bytes found: 15
chars found: 15
spaces found: 1
lowercase found: 14
uppercase found: 0
";
    assert_eq!(log, expected);
}

#[test]
fn line_numbers_wider_than_three_digits_are_not_truncated() {
    let dir = TempDir::new().unwrap();
    let config = config_with_log(&dir);

    let input = "x\n".repeat(1000);
    run(&config, Cursor::new(input)).unwrap();

    let log = fs::read_to_string(dir.path().join("out.log")).unwrap();
    assert!(log.contains("processing line   9: x\n"));
    assert!(log.contains("processing line  10: x\n"));
    assert!(log.contains("processing line 1000: x\n"));
}

#[test]
fn totals_are_logged_even_when_an_exclusive_flag_wins_the_report() {
    let dir = TempDir::new().unwrap();
    let config = ConfigBuilder::default()
        .spaces(true)
        .log_file(Some(dir.path().join("out.log")))
        .build()
        .unwrap();

    let report = run(&config, Cursor::new("a b\n")).unwrap();
    assert_eq!(report, "1");

    let log = fs::read_to_string(dir.path().join("out.log")).unwrap();
    assert!(log.contains("lines found: 1\n"));
    assert!(log.contains("uppercase found: 0\n"));
    assert!(log.ends_with("uppercase found: 0\n"));
}

#[test]
fn unwritable_log_path_fails_before_any_scanning() {
    let dir = TempDir::new().unwrap();
    let config = ConfigBuilder::default()
        .log_file(Some(dir.path().join("missing").join("out.log")))
        .build()
        .unwrap();

    let err = run(&config, Cursor::new("never read\n")).unwrap_err();
    match err {
        EngineError::LogCreate { path, .. } => {
            assert!(path.ends_with("missing/out.log"));
        }
        other => panic!("expected LogCreate, got {other:?}"),
    }
}

#[test]
fn no_log_path_means_no_log_file_and_no_failure() {
    let dir = TempDir::new().unwrap();
    let report = run(&Config::default(), Cursor::new("hello world\n")).unwrap();
    assert_eq!(report, "1 2 11");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
