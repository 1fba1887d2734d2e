//! Tests for std backends.

use std::fs;
use std::io::ErrorKind;

use crate::{FileBackend, LINE_ENDING, StdFileBackend};

#[test]
fn truncate_create_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.log");
    let path = path.to_str().unwrap();

    StdFileBackend::new().truncate_create(path).unwrap();

    assert_eq!(fs::read(path).unwrap(), Vec::<u8>::new());
}

#[test]
fn truncate_create_discards_existing_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.log");
    fs::write(&path, b"previous run").unwrap();
    let path = path.to_str().unwrap();

    StdFileBackend::new().truncate_create(path).unwrap();

    assert!(fs::read_to_string(path).unwrap().is_empty());
}

#[test]
fn append_line_adds_terminated_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");
    let path = path.to_str().unwrap();
    let backend = StdFileBackend::new();

    backend.truncate_create(path).unwrap();
    backend.append_line(path, "abc").unwrap();
    backend.append_line(path, "def").unwrap();

    assert_eq!(
        fs::read_to_string(path).unwrap(),
        format!("abc{LINE_ENDING}def{LINE_ENDING}")
    );
}

#[test]
fn append_line_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.log");

    let err = StdFileBackend::new()
        .append_line(path.to_str().unwrap(), "x")
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn truncate_create_fails_in_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("x.log");

    assert!(StdFileBackend::new().truncate_create(path.to_str().unwrap()).is_err());
}
