//! Error types and policies for the layers above the core writers.
//!
//! The writers themselves return plain `std::io::Error`s. This module
//! provides:
//! - `ErrorPolicy`: Controls whether a fan-out fails fast or accumulates errors
//! - `SinkWriteError`: A single failed write with the sink it happened on
//! - `AggregateError`: A collection of write errors
//! - `ConfigError`: Failures while loading a configuration or building sinks

use std::fmt;
use std::io;

use thiserror::Error;

use crate::writer::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error encountered
    FastFail,
    /// Collect all errors and return them together
    #[default]
    Accumulate,
}

impl ErrorPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fast_fail" | "fastfail" | "fast-fail" => Some(ErrorPolicy::FastFail),
            "accumulate" => Some(ErrorPolicy::Accumulate),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct SinkWriteError {
    /// Severity of the line that failed
    pub severity: Severity,
    /// Identifier of the sink (configured id, file path, ...)
    pub sink: String,
    /// The underlying error
    pub error: io::Error,
}

impl fmt::Display for SinkWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.sink, self.error)
    }
}

impl std::error::Error for SinkWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// An aggregate of failed sink writes.
#[derive(Debug, Error)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<SinkWriteError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sink write encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: SinkWriteError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<SinkWriteError> for AggregateError {
    fn from(error: SinkWriteError) -> Self {
        Self::single(error)
    }
}

/// Errors raised while loading a sink configuration or building sinks from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),

    #[error("invalid {format} configuration: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("file sink '{0}' has no path and no default path is configured")]
    MissingPath(String),

    #[error("sink '{id}' has unknown kind '{kind}'")]
    UnknownKind { id: String, kind: String },

    #[error("unknown error policy: {0}")]
    UnknownPolicy(String),

    #[error("failed to open sink '{id}': {source}")]
    Sink {
        id: String,
        #[source]
        source: io::Error,
    },

    #[error("{} sink(s) failed to build: {}", .0.len(), join_errors(.0))]
    Sinks(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
