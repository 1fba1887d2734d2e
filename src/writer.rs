//! The write contract shared by every sink.

use std::fmt;
use std::io;

/// Severity of a single line handed to a [`LogWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Message,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Message => write!(f, "message"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A destination for log lines.
///
/// Each call hands over exactly one line of text. Implementations decide how
/// (or whether) to distinguish severities; backend failures are returned
/// unchanged.
pub trait LogWriter: Send + Sync {
    /// Write an informational line.
    fn write_message(&self, text: &str) -> io::Result<()>;

    /// Write a warning line.
    fn write_warning(&self, text: &str) -> io::Result<()>;

    /// Write an error line.
    fn write_error(&self, text: &str) -> io::Result<()>;

    /// Dispatch to the method matching `severity`.
    fn write(&self, severity: Severity, text: &str) -> io::Result<()> {
        match severity {
            Severity::Message => self.write_message(text),
            Severity::Warning => self.write_warning(text),
            Severity::Error => self.write_error(text),
        }
    }
}
