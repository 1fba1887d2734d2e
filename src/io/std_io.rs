//! Standard library backends for files and stdout/stderr.

use std::fs::OpenOptions;
use std::io::{self, Seek, SeekFrom, Write};

use super::{ConsoleBackend, FileBackend, LINE_ENDING};

/// File backend built on [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileBackend;

impl StdFileBackend {
    /// Create a new std file backend.
    pub fn new() -> Self {
        Self
    }
}

impl FileBackend for StdFileBackend {
    fn truncate_create(&self, path: &str) -> io::Result<()> {
        OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)?;
        Ok(())
    }

    fn append_line(&self, path: &str, text: &str) -> io::Result<()> {
        // Not opened with create: the file is expected to exist after
        // truncate_create, a vanished file is reported to the caller.
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;
        file.seek(SeekFrom::End(0))?;

        let mut line = String::with_capacity(text.len() + LINE_ENDING.len());
        line.push_str(text);
        line.push_str(LINE_ENDING);
        file.write_all(line.as_bytes())?;
        file.flush()
    }
}

/// Console backend writing messages to stdout and warning/error signals to
/// stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Create a new std console backend.
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleBackend for StdConsole {
    fn print(&self, text: &str) {
        let _ = writeln!(io::stdout().lock(), "{text}");
    }

    fn push_warning(&self, text: &str) {
        let _ = writeln!(io::stderr().lock(), "WARNING: {text}");
    }

    fn push_error(&self, text: &str) {
        let _ = writeln!(io::stderr().lock(), "ERROR: {text}");
    }
}
