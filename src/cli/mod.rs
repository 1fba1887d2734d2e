//! CLI integration helpers for linesink.
//!
//! This module turns sink tokens given on a command line into builder
//! entries.
//!
//! Tokens:
//! - `-`, `stdout` or `console`: the console sink
//! - `@<path>`: force treating the value as a file path (so `@-` is a file
//!   literally named `-`)
//! - anything else: a file path
//!
//! # Example with sarge
//!
//! ```rust,ignore
//! use linesink::cli::SinkArgs;
//! use sarge::prelude::*;
//!
//! let mut reader = ArgumentReader::new();
//! let sinks = reader.add::<SinkArgs>(tag::both('s', "sink"));
//! let args = reader.parse()?;
//! ```

#[cfg(feature = "sarge")]
mod sarge;

/// Sink tokens collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkArgs(pub Vec<String>);

impl SinkArgs {
    /// Create new empty sink arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token, normalizing console aliases to `-`.
    pub fn with_token(mut self, token: impl AsRef<str>) -> Self {
        self.0.push(normalize(token.as_ref()));
        self
    }

    /// The normalized tokens.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Check if no sink was requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if writing to the console.
    pub fn is_console(&self) -> bool {
        self.0.iter().any(|s| s == "-")
    }

    /// File paths requested, with any `@` prefix stripped, in order.
    pub fn file_paths(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|s| s.as_str() != "-")
            .map(|s| s.strip_prefix('@').unwrap_or(s).to_string())
            .collect()
    }
}

/// Normalize a single sink token.
pub fn normalize(token: &str) -> String {
    // Preserve explicit prefixes so callers can disambiguate.
    if token.starts_with('@') {
        return token.to_string();
    }

    if token == "-"
        || token.eq_ignore_ascii_case("stdout")
        || token.eq_ignore_ascii_case("console")
    {
        return "-".to_string();
    }

    token.to_string()
}
