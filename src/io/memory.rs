//! In-memory backends for testing.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{ConsoleBackend, FileBackend, LINE_ENDING};

/// A single call observed by an [`InMemoryFileBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    TruncateCreate(String),
    AppendLine { path: String, text: String },
}

#[derive(Debug, Default)]
struct FileState {
    files: HashMap<String, String>,
    calls: Vec<BackendCall>,
    fail_truncate: HashSet<String>,
    fail_append: HashSet<String>,
}

/// In-memory file backend for testing.
///
/// Clones share the same state, so a test can hand one clone to a registry
/// and inspect the recorded calls through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileBackend {
    state: Arc<Mutex<FileState>>,
}

impl InMemoryFileBackend {
    /// Create a new empty in-memory file backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the contents of `path`, if it has been created.
    pub fn contents(&self, path: &str) -> Option<String> {
        self.state.lock().files.get(path).cloned()
    }

    /// Whether `path` currently exists.
    pub fn exists(&self, path: &str) -> bool {
        self.state.lock().files.contains_key(path)
    }

    /// All calls observed so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().calls.clone()
    }

    /// Number of `truncate_create` calls observed for `path`.
    pub fn truncate_count(&self, path: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, BackendCall::TruncateCreate(p) if p == path))
            .count()
    }

    /// Number of `append_line` calls observed for `path`.
    pub fn append_count(&self, path: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, BackendCall::AppendLine { path: p, .. } if p == path))
            .count()
    }

    /// Make every future `truncate_create` on `path` fail.
    pub fn fail_truncate_on(&self, path: impl Into<String>) {
        self.state.lock().fail_truncate.insert(path.into());
    }

    /// Make every future `append_line` on `path` fail.
    pub fn fail_append_on(&self, path: impl Into<String>) {
        self.state.lock().fail_append.insert(path.into());
    }

    /// Remove all injected failures.
    pub fn clear_failures(&self) {
        let mut state = self.state.lock();
        state.fail_truncate.clear();
        state.fail_append.clear();
    }

    /// Write `contents` to `path` directly, bypassing call recording.
    pub fn seed(&self, path: impl Into<String>, contents: impl Into<String>) {
        self.state.lock().files.insert(path.into(), contents.into());
    }
}

impl FileBackend for InMemoryFileBackend {
    fn truncate_create(&self, path: &str) -> io::Result<()> {
        let mut state = self.state.lock();
        state.calls.push(BackendCall::TruncateCreate(path.to_string()));
        if state.fail_truncate.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("injected truncate failure: {path}"),
            ));
        }
        state.files.insert(path.to_string(), String::new());
        Ok(())
    }

    fn append_line(&self, path: &str, text: &str) -> io::Result<()> {
        let mut state = self.state.lock();
        state.calls.push(BackendCall::AppendLine {
            path: path.to_string(),
            text: text.to_string(),
        });
        if state.fail_append.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::StorageFull,
                format!("injected append failure: {path}"),
            ));
        }
        let file = state
            .files
            .get_mut(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))?;
        file.push_str(text);
        file.push_str(LINE_ENDING);
        Ok(())
    }
}

/// Which console primitive received a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleChannel {
    Print,
    Warning,
    Error,
}

/// In-memory console backend for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConsole {
    lines: Arc<Mutex<Vec<(ConsoleChannel, String)>>>,
}

impl InMemoryConsole {
    /// Create a new empty in-memory console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line received, tagged with the primitive that received it.
    pub fn lines(&self) -> Vec<(ConsoleChannel, String)> {
        self.lines.lock().clone()
    }

    /// Lines received on a single channel.
    pub fn channel(&self, channel: ConsoleChannel) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Clear the recorded lines.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    fn push(&self, channel: ConsoleChannel, text: &str) {
        self.lines.lock().push((channel, text.to_string()));
    }
}

impl ConsoleBackend for InMemoryConsole {
    fn print(&self, text: &str) {
        self.push(ConsoleChannel::Print, text);
    }

    fn push_warning(&self, text: &str) {
        self.push(ConsoleChannel::Warning, text);
    }

    fn push_error(&self, text: &str) {
        self.push(ConsoleChannel::Error, text);
    }
}
