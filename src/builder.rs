//! Builder for creating FanoutWriter instances.

use std::sync::Arc;

use crate::cli::SinkArgs;
use crate::config::{SinkConfig, SinkEntry};
use crate::console::ConsoleWriter;
use crate::error::{ConfigError, ErrorPolicy};
use crate::fanout::FanoutWriter;
use crate::io::{ConsoleBackend, StdConsole};
use crate::registry::FileWriterRegistry;
use crate::writer::LogWriter;

pub struct SinkBuilder {
    registry: Arc<FileWriterRegistry>,
    console: Arc<dyn ConsoleBackend>,
    entries: Vec<SinkEntry>,
    error_policy: ErrorPolicy,
}

impl SinkBuilder {
    pub fn new(registry: Arc<FileWriterRegistry>) -> Self {
        Self {
            registry,
            console: Arc::new(StdConsole::new()),
            entries: Vec::new(),
            error_policy: ErrorPolicy::Accumulate,
        }
    }

    pub fn with_console(mut self, backend: Arc<dyn ConsoleBackend>) -> Self {
        self.console = backend;
        self
    }

    pub fn add_console(mut self, id: impl Into<String>) -> Self {
        self.entries.push(SinkEntry::console(id));
        self
    }

    pub fn add_file(mut self, id: impl Into<String>, path: impl Into<String>) -> Self {
        self.entries.push(SinkEntry::file(id, Some(path.into())));
        self
    }

    /// Add a file sink resolved against the registry default path at build time.
    pub fn add_default_file(mut self, id: impl Into<String>) -> Self {
        self.entries.push(SinkEntry::file(id, None));
        self
    }

    pub fn add_entry(mut self, entry: SinkEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add one sink per CLI token: `-` is the console, anything else a file
    /// whose id is its path.
    pub fn with_sink_args(mut self, args: &SinkArgs) -> Self {
        if args.is_console() {
            self.entries.push(SinkEntry::console("-"));
        }
        for path in args.file_paths() {
            self.entries.push(SinkEntry::file(path.clone(), Some(path)));
        }
        self
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn registry(&self) -> &Arc<FileWriterRegistry> {
        &self.registry
    }

    pub fn from_config(
        config: SinkConfig,
        registry: Arc<FileWriterRegistry>,
    ) -> Result<Self, ConfigError> {
        let mut builder = SinkBuilder::new(registry);

        if let Some(policy) = config.policy()? {
            builder = builder.with_policy(policy);
        }

        if let Some(path) = config.default_path {
            builder.registry.set_default_path(path);
        }

        builder.entries.extend(config.sinks);
        Ok(builder)
    }

    /// Resolve every entry into a writer and assemble the fan-out.
    ///
    /// File sinks are acquired from the registry, so the first acquisition of
    /// a path truncates it. Any failure aborts the build: under
    /// [`ErrorPolicy::FastFail`] the failing entry's error is returned and
    /// nothing after it is touched, under [`ErrorPolicy::Accumulate`] every
    /// entry is resolved and all failures come back as [`ConfigError::Sinks`].
    pub fn build(self) -> Result<FanoutWriter, ConfigError> {
        let mut sinks = Vec::with_capacity(self.entries.len());
        let mut errors = Vec::new();

        for entry in &self.entries {
            match self.resolve_entry(entry) {
                Ok(writer) => sinks.push((entry.id.clone(), writer)),
                Err(e) => {
                    if matches!(self.error_policy, ErrorPolicy::FastFail) {
                        return Err(e);
                    }
                    errors.push(e);
                }
            }
        }

        if errors.is_empty() {
            Ok(FanoutWriter::new(sinks, self.error_policy))
        } else {
            Err(ConfigError::Sinks(errors))
        }
    }

    fn resolve_entry(&self, entry: &SinkEntry) -> Result<Arc<dyn LogWriter>, ConfigError> {
        match entry.kind.to_ascii_lowercase().as_str() {
            "console" | "stdout" | "-" => {
                Ok(Arc::new(ConsoleWriter::new(Arc::clone(&self.console))))
            }
            "file" => {
                let path = match entry.path.as_deref() {
                    Some(path) if !path.is_empty() => path.to_string(),
                    _ => self.registry.default_path(),
                };
                if path.is_empty() {
                    return Err(ConfigError::MissingPath(entry.id.clone()));
                }
                let writer = self
                    .registry
                    .acquire(&path)
                    .map_err(|source| ConfigError::Sink {
                        id: entry.id.clone(),
                        source,
                    })?;
                Ok(writer)
            }
            other => Err(ConfigError::UnknownKind {
                id: entry.id.clone(),
                kind: other.to_string(),
            }),
        }
    }
}

impl Default for SinkBuilder {
    fn default() -> Self {
        SinkBuilder::new(Arc::new(FileWriterRegistry::default()))
    }
}
