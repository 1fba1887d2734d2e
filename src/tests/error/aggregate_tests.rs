//! Tests for SinkWriteError and AggregateError.

use std::error::Error;
use std::io;

use crate::Severity;
use crate::error::{AggregateError, ConfigError, SinkWriteError};

fn write_error(sink: &str, severity: Severity) -> SinkWriteError {
    SinkWriteError {
        severity,
        sink: sink.to_string(),
        error: io::Error::new(io::ErrorKind::Other, "disk full"),
    }
}

#[test]
fn sink_write_error_display_and_source() {
    let err = write_error("app.log", Severity::Warning);

    assert_eq!(err.to_string(), "[warning] app.log: disk full");
    assert!(err.source().is_some());
}

#[test]
fn aggregate_error_display_includes_count() {
    let agg = AggregateError {
        errors: vec![
            write_error("a", Severity::Message),
            write_error("b", Severity::Error),
        ],
    };

    let s = format!("{}", agg);
    assert!(s.contains("2 error(s)"));
    assert!(s.contains("#1: [message] a"));
    assert!(s.contains("#2: [error] b"));
}

#[test]
fn aggregate_error_single_and_len() {
    let agg = AggregateError::single(write_error("test", Severity::Message));
    assert_eq!(agg.len(), 1);
    assert!(!agg.is_empty());
}

#[test]
fn aggregate_error_from_single() {
    let agg: AggregateError = write_error("input", Severity::Error).into();
    assert_eq!(agg.len(), 1);
}

#[test]
fn config_error_sink_keeps_source() {
    let err = ConfigError::Sink {
        id: "main".into(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };

    assert_eq!(err.to_string(), "failed to open sink 'main': denied");
    assert!(err.source().is_some());
}

#[test]
fn config_error_sinks_lists_each_failure() {
    let err = ConfigError::Sinks(vec![
        ConfigError::MissingPath("a".into()),
        ConfigError::UnknownKind {
            id: "b".into(),
            kind: "pipe".into(),
        },
    ]);

    assert_eq!(
        err.to_string(),
        "2 sink(s) failed to build: file sink 'a' has no path and no default path is configured; \
         sink 'b' has unknown kind 'pipe'"
    );
}

#[cfg(feature = "miette")]
#[test]
fn sinks_diagnostic_keeps_every_failure_in_source() {
    use crate::error::SinkDiagnostic;

    let diag = SinkDiagnostic::from(ConfigError::Sinks(vec![
        ConfigError::MissingPath("a".into()),
        ConfigError::MissingPath("b".into()),
    ]));

    assert!(diag.help.is_some());
    let source = diag.source.as_ref().map(ToString::to_string).unwrap_or_default();
    assert!(source.starts_with("2 sink(s) failed to build"));
}
