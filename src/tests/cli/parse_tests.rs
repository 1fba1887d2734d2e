//! Tests for CLI sink token handling.

use crate::cli::{SinkArgs, normalize};

#[test]
fn console_aliases_normalize_to_dash() {
    assert_eq!(normalize("-"), "-");
    assert_eq!(normalize("stdout"), "-");
    assert_eq!(normalize("Console"), "-");
    assert_eq!(normalize("app.log"), "app.log");
    assert_eq!(normalize("@stdout"), "@stdout");
}

#[test]
fn file_paths_strip_forcing_prefix() {
    let args = SinkArgs::new()
        .with_token("stdout")
        .with_token("a.log")
        .with_token("@console");

    assert!(args.is_console());
    assert_eq!(args.as_slice(), &["-", "a.log", "@console"]);
    assert_eq!(args.file_paths(), vec!["a.log", "console"]);
}

#[test]
fn empty_args() {
    let args = SinkArgs::default();
    assert!(args.is_empty());
    assert!(!args.is_console());
    assert!(args.file_paths().is_empty());
}
