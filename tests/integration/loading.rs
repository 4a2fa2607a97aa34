//! Loading documents from disk, then scoring them.

use crate::common::PLACES_FIXTURE;
use docmatch::{filter_all, load_documents, InputError, Query};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_fixture_array() {
    let docs = load_documents(PLACES_FIXTURE).unwrap();
    assert_eq!(docs.len(), 4);
}

#[test]
fn test_load_json_lines_and_filter() {
    let file = write_temp(
        "{\"title\": \"Amsterdam\", \"province\": \"NH\"}\n\n{\"title\": \"Utrecht\", \"province\": \"UT\"}\n",
    );
    let docs = load_documents(file.path()).unwrap();
    assert_eq!(docs.len(), 2);

    let query: Query = r#"{"province": {"_eq": "UT"}}"#.parse().unwrap();
    let kept = filter_all(&docs, &query).unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].document["title"], "Utrecht");
}

#[test]
fn test_bad_line_reports_line_number() {
    let file = write_temp("{\"title\": \"Amsterdam\"}\n{oops\n");
    let err = load_documents(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Json { line: 2, .. }));
}

#[test]
fn test_single_object_is_not_an_array() {
    let file = write_temp("{\n  \"title\": \"Amsterdam\"\n}\n");
    assert!(matches!(
        load_documents(file.path()),
        Err(InputError::NotAnArray("object"))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(load_documents(&missing), Err(InputError::Io { .. })));
}
