//! # linesink
//!
//! Line-oriented log sinks sharing one small write contract.
//!
//! ## Overview
//!
//! linesink provides:
//! - **Write contract**: the `LogWriter` trait with message, warning and error lines
//! - **File sink**: `FileWriter`, handed out by a `FileWriterRegistry` that keeps at
//!   most one writer per path, truncates each file once on first acquisition and
//!   appends afterwards
//! - **Console sink**: `ConsoleWriter`, forwarding to host print/warning/error primitives
//! - **Injectable backends**: `FileBackend` and `ConsoleBackend`, with std and in-memory
//!   implementations
//! - **Fan-out**: `FanoutWriter` repeating each line to several sinks, with a
//!   configurable error policy
//! - **Configuration**: declare sinks in JSON, YAML or TOML and build them with `SinkBuilder`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use linesink::{FileWriterRegistry, LogWriter};
//!
//! fn main() -> std::io::Result<()> {
//!     let registry = Arc::new(FileWriterRegistry::with_std_backend());
//!     registry.set_default_path("app.log");
//!
//!     // Truncates app.log, then appends.
//!     let log = registry.acquire_default()?;
//!     log.write_message("started")?;
//!
//!     // Same writer, no second truncation.
//!     let again = registry.acquire("app.log")?;
//!     again.write_warning("still running")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - JSON configuration files
//! - `yaml` - YAML configuration files (enabled by default)
//! - `toml` - TOML configuration files
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - CLI argument parsing and the `linesink_tee` binary
//!
//! ## Concurrency
//!
//! All calls are synchronous and run on the caller's thread.
//!
//! - Registry lookups, creations and removals are serialized by one lock, so
//!   concurrent first acquisitions of a path construct (and truncate) once.
//! - Writes through the same `FileWriter` are serialized by that writer's own
//!   lock; writers for different paths write in parallel.
//! - Nothing coordinates separate processes writing the same file.

// Core modules
pub mod console;
pub mod error;
pub mod file_writer;
pub mod io;
pub mod registry;
pub mod writer;

// Composition modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod fanout;

// Re-exports for convenience
pub use builder::SinkBuilder;
pub use config::{ConfigFormat, SinkConfig, SinkEntry};
pub use console::ConsoleWriter;
pub use error::{AggregateError, ConfigError, ErrorPolicy, SinkWriteError};
pub use fanout::FanoutWriter;
pub use file_writer::FileWriter;
pub use io::{
    ConsoleBackend, FileBackend, InMemoryConsole, InMemoryFileBackend, LINE_ENDING, StdConsole,
    StdFileBackend,
};
pub use registry::{DEFAULT_FILE_NAME, FileWriterRegistry};
pub use writer::{LogWriter, Severity};

/// Build a FanoutWriter from a SinkConfig against a shared registry, using
/// the std console.
pub fn build_from_config(
    config: SinkConfig,
    registry: std::sync::Arc<FileWriterRegistry>,
) -> Result<FanoutWriter, ConfigError> {
    SinkBuilder::from_config(config, registry)?.build()
}

/// Build a FanoutWriter from a SinkConfig, allowing the caller to further
/// customize the SinkBuilder (console backend, extra sinks) before it is
/// built.
pub fn build_from_config_with<F>(
    config: SinkConfig,
    registry: std::sync::Arc<FileWriterRegistry>,
    customize: F,
) -> Result<FanoutWriter, ConfigError>
where
    F: FnOnce(SinkBuilder) -> SinkBuilder,
{
    let builder = SinkBuilder::from_config(config, registry)?;
    customize(builder).build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::SinkDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
