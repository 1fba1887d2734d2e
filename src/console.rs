//! Console writer forwarding to host print/warning/error primitives.

use std::io;
use std::sync::Arc;

use crate::io::{ConsoleBackend, StdConsole};
use crate::writer::LogWriter;

/// A [`LogWriter`] that forwards lines to a [`ConsoleBackend`].
///
/// Warnings and errors raise the matching host signal and are then printed
/// as well, since host warning/error surfaces are not always visible.
#[derive(Debug, Clone)]
pub struct ConsoleWriter {
    backend: Arc<dyn ConsoleBackend>,
}

impl ConsoleWriter {
    /// Create a console writer over `backend`.
    pub fn new(backend: Arc<dyn ConsoleBackend>) -> Self {
        Self { backend }
    }

    /// Create a console writer over stdout/stderr.
    pub fn stdio() -> Self {
        Self::new(Arc::new(StdConsole::new()))
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::stdio()
    }
}

impl LogWriter for ConsoleWriter {
    fn write_message(&self, text: &str) -> io::Result<()> {
        self.backend.print(text);
        Ok(())
    }

    fn write_warning(&self, text: &str) -> io::Result<()> {
        self.backend.push_warning(text);
        self.write_message(text)
    }

    fn write_error(&self, text: &str) -> io::Result<()> {
        self.backend.push_error(text);
        self.write_message(text)
    }
}
