//! Writer that repeats each line to several sinks.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::error::{AggregateError, ErrorPolicy, SinkWriteError};
use crate::writer::{LogWriter, Severity};

/// A [`LogWriter`] forwarding every line to a list of named sinks, in order.
///
/// With [`ErrorPolicy::FastFail`] the first failing sink stops the broadcast;
/// with [`ErrorPolicy::Accumulate`] every sink is tried and all failures are
/// reported together.
#[derive(Clone)]
pub struct FanoutWriter {
    sinks: Vec<(String, Arc<dyn LogWriter>)>,
    error_policy: ErrorPolicy,
}

impl FanoutWriter {
    /// Create a fan-out over `sinks`.
    pub fn new(sinks: Vec<(String, Arc<dyn LogWriter>)>, error_policy: ErrorPolicy) -> Self {
        Self {
            sinks,
            error_policy,
        }
    }

    /// Get the error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Identifiers of the sinks, in write order.
    pub fn sink_ids(&self) -> Vec<&str> {
        self.sinks.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Number of sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether there are no sinks.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Write `text` with `severity` to every sink.
    pub fn broadcast(&self, severity: Severity, text: &str) -> Result<(), AggregateError> {
        let mut errors = Vec::new();

        for (id, sink) in &self.sinks {
            if let Err(error) = sink.write(severity, text) {
                errors.push(SinkWriteError {
                    severity,
                    sink: id.clone(),
                    error,
                });
                if matches!(self.error_policy, ErrorPolicy::FastFail) {
                    return Err(AggregateError { errors });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AggregateError { errors })
        }
    }
}

impl fmt::Debug for FanoutWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanoutWriter")
            .field("sinks", &self.sink_ids())
            .field("error_policy", &self.error_policy)
            .finish()
    }
}

impl LogWriter for FanoutWriter {
    fn write_message(&self, text: &str) -> io::Result<()> {
        self.broadcast(Severity::Message, text).map_err(io::Error::other)
    }

    fn write_warning(&self, text: &str) -> io::Result<()> {
        self.broadcast(Severity::Warning, text).map_err(io::Error::other)
    }

    fn write_error(&self, text: &str) -> io::Result<()> {
        self.broadcast(Severity::Error, text).map_err(io::Error::other)
    }
}
