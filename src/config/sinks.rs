//! Sink configuration for declaring log destinations.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ErrorPolicy};

/// Configuration for a set of sinks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SinkConfig {
    /// Registry default path, used by file sinks without an explicit path
    #[serde(default)]
    pub default_path: Option<String>,
    /// Error policy: "fast_fail" or "accumulate"
    #[serde(default)]
    pub error_policy: Option<String>,
    /// Sink entries, in write order
    #[serde(default)]
    pub sinks: Vec<SinkEntry>,
}

/// Configuration for a single sink.
#[derive(Debug, Clone, Deserialize)]
pub struct SinkEntry {
    /// Unique identifier for this sink
    pub id: String,
    /// Kind of sink: "console" (or "stdout") or "file"
    pub kind: String,
    /// File path (for file sinks)
    #[serde(default)]
    pub path: Option<String>,
}

impl SinkEntry {
    /// A console sink entry.
    pub fn console(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "console".into(),
            path: None,
        }
    }

    /// A file sink entry. `None` falls back to the default path.
    pub fn file(id: impl Into<String>, path: Option<String>) -> Self {
        Self {
            id: id.into(),
            kind: "file".into(),
            path,
        }
    }
}

/// Serialized form of a [`SinkConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }
}

impl SinkConfig {
    /// Create a new empty sink configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink entry.
    pub fn add_sink(mut self, sink: SinkEntry) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Set the default path.
    pub fn with_default_path(mut self, path: impl Into<String>) -> Self {
        self.default_path = Some(path.into());
        self
    }

    /// Set the error policy.
    pub fn with_error_policy(mut self, policy: impl Into<String>) -> Self {
        self.error_policy = Some(policy.into());
        self
    }

    /// Parse the configured error policy, if any.
    pub fn policy(&self) -> Result<Option<ErrorPolicy>, ConfigError> {
        self.error_policy
            .as_deref()
            .map(|s| ErrorPolicy::from_str(s).ok_or_else(|| ConfigError::UnknownPolicy(s.into())))
            .transpose()
    }

    /// Load a configuration file, choosing the parser from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let format = ConfigFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::UnsupportedFormat(ext.to_string()))?;
        let text = std::fs::read_to_string(path)?;
        Self::from_str_with(format, &text)
    }

    /// Parse a configuration from `text` in the given format.
    ///
    /// A format whose feature is disabled gives
    /// [`ConfigError::UnsupportedFormat`] carrying the format name.
    pub fn from_str_with(format: ConfigFormat, text: &str) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Json => parse_json(text),
            ConfigFormat::Yaml => parse_yaml(text),
            ConfigFormat::Toml => parse_toml(text),
        }
    }
}

#[cfg_attr(
    not(any(feature = "json", feature = "yaml", feature = "toml")),
    allow(dead_code)
)]
fn parse_error(format: ConfigFormat, e: impl std::fmt::Display) -> ConfigError {
    ConfigError::Parse {
        format: format.name(),
        message: e.to_string(),
    }
}

#[cfg(feature = "json")]
fn parse_json(text: &str) -> Result<SinkConfig, ConfigError> {
    serde_json::from_str(text).map_err(|e| parse_error(ConfigFormat::Json, e))
}

#[cfg(not(feature = "json"))]
fn parse_json(_text: &str) -> Result<SinkConfig, ConfigError> {
    Err(ConfigError::UnsupportedFormat(ConfigFormat::Json.name().into()))
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> Result<SinkConfig, ConfigError> {
    serde_yaml::from_str(text).map_err(|e| parse_error(ConfigFormat::Yaml, e))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str) -> Result<SinkConfig, ConfigError> {
    Err(ConfigError::UnsupportedFormat(ConfigFormat::Yaml.name().into()))
}

#[cfg(feature = "toml")]
fn parse_toml(text: &str) -> Result<SinkConfig, ConfigError> {
    toml::from_str(text).map_err(|e| parse_error(ConfigFormat::Toml, e))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(_text: &str) -> Result<SinkConfig, ConfigError> {
    Err(ConfigError::UnsupportedFormat(ConfigFormat::Toml.name().into()))
}
