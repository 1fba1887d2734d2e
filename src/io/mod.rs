//! Backend abstractions for file storage and the host console.
//!
//! This module provides:
//! - `FileBackend`: Trait for the truncate-create / append-line storage seam
//! - `ConsoleBackend`: Trait for host print/warning/error primitives
//! - Standard implementations over `std::fs` and stdout/stderr
//! - In-memory implementations for testing

mod backend;
mod memory;
mod std_io;

pub use backend::{ConsoleBackend, FileBackend, LINE_ENDING};
pub use memory::{BackendCall, ConsoleChannel, InMemoryConsole, InMemoryFileBackend};
pub use std_io::{StdConsole, StdFileBackend};
