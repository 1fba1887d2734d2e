//! File-backed writer handed out by the registry.

use std::fmt;
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::io::FileBackend;
use crate::writer::LogWriter;

/// A [`LogWriter`] appending lines to a single file.
///
/// Instances are only created by [`FileWriterRegistry`](crate::FileWriterRegistry),
/// which guarantees at most one live writer per path. Creating a writer
/// truncates the file; every write afterwards appends one line.
///
/// Writes through the same instance are serialized by a per-writer lock.
/// Writers for different paths never contend with each other.
pub struct FileWriter {
    path: String,
    backend: Arc<dyn FileBackend>,
    write_lock: Mutex<()>,
}

impl FileWriter {
    /// Truncate (or create) `path` and return a writer for it.
    ///
    /// If truncation fails no writer is produced.
    pub(crate) fn create(path: String, backend: Arc<dyn FileBackend>) -> io::Result<Self> {
        let writer = Self {
            path,
            backend,
            write_lock: Mutex::new(()),
        };
        {
            let _guard = writer.write_lock.lock();
            writer.backend.truncate_create(&writer.path)?;
        }
        Ok(writer)
    }

    /// The path this writer appends to.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn write_line(&self, text: &str) -> io::Result<()> {
        let _guard = self.write_lock.lock();
        self.backend.append_line(&self.path, text)
    }
}

impl fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileWriter")
            .field("path", &self.path)
            .field("backend", &self.backend)
            .finish()
    }
}

impl LogWriter for FileWriter {
    fn write_message(&self, text: &str) -> io::Result<()> {
        self.write_line(text)
    }

    fn write_warning(&self, text: &str) -> io::Result<()> {
        self.write_line(text)
    }

    fn write_error(&self, text: &str) -> io::Result<()> {
        self.write_line(text)
    }
}
