//! Backend trait definitions.

use std::fmt::Debug;
use std::io;

/// Line terminator appended after every line written by a [`FileBackend`].
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator appended after every line written by a [`FileBackend`].
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Storage operations consumed by [`FileWriter`](crate::FileWriter).
///
/// Implementations are stateless per call: every operation opens the target,
/// performs its work and releases it again. Paths are opaque strings and are
/// never normalized.
pub trait FileBackend: Send + Sync + Debug {
    /// Open `path` for writing, creating it if absent and discarding any
    /// existing contents.
    fn truncate_create(&self, path: &str) -> io::Result<()>;

    /// Append `text` followed by [`LINE_ENDING`] to the end of `path`.
    fn append_line(&self, path: &str, text: &str) -> io::Result<()>;
}

/// Host console primitives consumed by [`ConsoleWriter`](crate::ConsoleWriter).
///
/// These are fire-and-forget and assumed to always succeed.
pub trait ConsoleBackend: Send + Sync + Debug {
    /// Print a line to the primary output.
    fn print(&self, text: &str);

    /// Raise a host warning signal.
    fn push_warning(&self, text: &str);

    /// Raise a host error signal.
    fn push_error(&self, text: &str);
}
