//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, ConfigError, SinkWriteError};

/// A diagnostic wrapper for sink errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SinkDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<SinkWriteError> for SinkDiagnostic {
    fn from(e: SinkWriteError) -> Self {
        SinkDiagnostic {
            message: format!("failed to write {} to '{}'", e.severity, e.sink),
            source: Some(Box::new(e.error)),
            help: Some("Check that the log file is writable and still exists".into()),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for SinkDiagnostic {
    fn from(agg: AggregateError) -> Self {
        let count = agg.len();
        match agg.errors.into_iter().next() {
            Some(first) => {
                let mut diag = SinkDiagnostic::from(first);
                if count > 1 {
                    diag.message = format!("{} (and {} more)", diag.message, count - 1);
                }
                diag
            }
            None => SinkDiagnostic {
                message: "Unknown sink error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            },
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(SinkDiagnostic::from(agg))
    }
}

impl From<ConfigError> for SinkDiagnostic {
    fn from(e: ConfigError) -> Self {
        let help = match &e {
            ConfigError::UnsupportedFormat(_) => {
                Some("Use a .json, .yaml/.yml or .toml file with the matching feature enabled")
            }
            ConfigError::MissingPath(_) => {
                Some("Set 'path' on the sink or 'default_path' globally")
            }
            ConfigError::UnknownKind { .. } => Some("Valid sink kinds are 'console' and 'file'"),
            ConfigError::UnknownPolicy(_) => {
                Some("Valid policies are 'fast_fail' and 'accumulate'")
            }
            ConfigError::Sinks(_) => Some("Fix each listed sink; the build fails while any does"),
            _ => None,
        };
        SinkDiagnostic {
            message: "invalid sink configuration".into(),
            source: Some(Box::new(e)),
            help: help.map(Into::into),
            severity: Severity::Error,
        }
    }
}
