//! Integration tests for the file-level API.

use std::fs;

use secnum::{renumber_file, renumber_file_with_options, Error, RenumberOptions, ReportFormat};

#[test]
fn test_renumber_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    fs::write(&path, "# Intro\n## 3 Motivation\nSee Section 3.\n").unwrap();

    let result = renumber_file(&path).unwrap();

    assert_eq!(
        result.content,
        "# 1. Intro\n## 1.1. Motivation\nSee Section 1.1.\n"
    );
    assert_eq!(result.mapping.get("3"), Some("1.1"));
    assert_eq!(result.stats.reference_count, 1);
}

#[test]
fn test_renumber_file_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    fs::write(&path, "# Title\n## Part One\n## Part Two\n").unwrap();

    let options = RenumberOptions::new().with_ignore_top_level(true);
    let result = renumber_file_with_options(&path, &options).unwrap();

    assert_eq!(result.content, "# Title\n## 1. Part One\n## 2. Part Two\n");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = renumber_file(dir.path().join("absent.md")).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_invalid_utf8_is_an_encoding_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.md");
    fs::write(&path, [0x23, 0x20, 0xFF, 0xFE]).unwrap();

    let err = renumber_file(&path).unwrap_err();

    assert!(matches!(err, Error::Encoding(_)));
    // The message names the offending file.
    assert!(err.to_string().contains("bad.md"));
}

#[test]
fn test_report_for_a_file_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    fs::write(&path, "# 7 Only\n").unwrap();

    let result = renumber_file(&path).unwrap();
    let report = result.report_json(ReportFormat::Pretty).unwrap();

    assert!(report.contains("\"7\": \"1\""));
    assert!(report.contains("\"header_count\": 1"));
}
