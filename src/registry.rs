//! Registry of file writers, one per path.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::file_writer::FileWriter;
use crate::io::{FileBackend, StdFileBackend};

/// The default path used by [`FileWriterRegistry::acquire_default`] until it
/// is changed.
pub const DEFAULT_FILE_NAME: &str = "output.log";

/// Keyed store of [`FileWriter`]s guaranteeing one writer per path.
///
/// The first [`acquire`](Self::acquire) for a path truncates the file; later
/// acquisitions return the same writer and only append. Paths are compared as
/// plain strings, so `"a.log"` and `"./a.log"` are different writers.
///
/// One registry is meant to be created at startup and shared by reference
/// (usually behind an [`Arc`]) with everything that writes logs.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use linesink::{FileWriterRegistry, InMemoryFileBackend, LogWriter};
///
/// let backend = InMemoryFileBackend::new();
/// let registry = FileWriterRegistry::new(Arc::new(backend.clone()));
///
/// let a = registry.acquire("app.log")?;
/// let b = registry.acquire("app.log")?;
/// assert!(Arc::ptr_eq(&a, &b));
///
/// a.write_message("hello")?;
/// assert_eq!(backend.truncate_count("app.log"), 1);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FileWriterRegistry {
    backend: Arc<dyn FileBackend>,
    instances: Mutex<HashMap<String, Arc<FileWriter>>>,
    default_path: RwLock<String>,
}

impl FileWriterRegistry {
    /// Create an empty registry using `backend` for all file access.
    pub fn new(backend: Arc<dyn FileBackend>) -> Self {
        Self {
            backend,
            instances: Mutex::new(HashMap::new()),
            default_path: RwLock::new(DEFAULT_FILE_NAME.to_string()),
        }
    }

    /// Create an empty registry backed by [`StdFileBackend`].
    pub fn with_std_backend() -> Self {
        Self::new(Arc::new(StdFileBackend::new()))
    }

    /// Get the writer for `path`, creating it (and truncating the file) if
    /// this is the first acquisition since the registry was created or the
    /// path was removed.
    ///
    /// Concurrent callers racing on the same new path observe a single
    /// construction and all receive the same writer. If truncation fails the
    /// error is returned and nothing is registered.
    pub fn acquire(&self, path: &str) -> io::Result<Arc<FileWriter>> {
        let mut instances = self.instances.lock();
        if let Some(writer) = instances.get(path) {
            trace!(path, "reusing file writer");
            return Ok(Arc::clone(writer));
        }

        let writer = Arc::new(FileWriter::create(
            path.to_string(),
            Arc::clone(&self.backend),
        )?);
        instances.insert(path.to_string(), Arc::clone(&writer));
        debug!(path, "created file writer");
        Ok(writer)
    }

    /// Get the writer for the current [`default_path`](Self::default_path).
    ///
    /// The default is read once at call time; changing it afterwards does
    /// not affect the writer returned here.
    pub fn acquire_default(&self) -> io::Result<Arc<FileWriter>> {
        let path = self.default_path();
        self.acquire(&path)
    }

    /// Remove the writer for `path` from the registry and return it.
    ///
    /// The returned writer keeps working for anyone holding it. The next
    /// [`acquire`](Self::acquire) for `path` builds a new writer, truncating
    /// the file again. Returns `None` if no writer was registered.
    pub fn remove(&self, path: &str) -> Option<Arc<FileWriter>> {
        let removed = self.instances.lock().remove(path);
        if removed.is_some() {
            debug!(path, "removed file writer");
        }
        removed
    }

    /// The path used by [`acquire_default`](Self::acquire_default).
    pub fn default_path(&self) -> String {
        self.default_path.read().clone()
    }

    /// Change the path used by future [`acquire_default`](Self::acquire_default)
    /// calls. Existing writers are unaffected.
    pub fn set_default_path(&self, path: impl Into<String>) {
        let path = path.into();
        debug!(path = %path, "default log path changed");
        *self.default_path.write() = path;
    }

    /// Whether a writer is currently registered for `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.instances.lock().contains_key(path)
    }

    /// Number of registered writers.
    pub fn len(&self) -> usize {
        self.instances.lock().len()
    }

    /// Whether no writer is registered.
    pub fn is_empty(&self) -> bool {
        self.instances.lock().is_empty()
    }

    /// Registered paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.instances.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// The backend shared by every writer of this registry.
    pub fn backend(&self) -> &Arc<dyn FileBackend> {
        &self.backend
    }
}

impl Default for FileWriterRegistry {
    fn default() -> Self {
        Self::with_std_backend()
    }
}

impl std::fmt::Debug for FileWriterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriterRegistry")
            .field("backend", &self.backend)
            .field("paths", &self.paths())
            .field("default_path", &self.default_path())
            .finish()
    }
}
