//! Configuration types for declaring sinks.
//!
//! This module provides:
//! - `SinkConfig`: Default path, error policy and sink list
//! - `SinkEntry`: A single console or file sink
//! - `ConfigFormat`: The serialized forms a configuration can be loaded from

mod sinks;

pub use sinks::{ConfigFormat, SinkConfig, SinkEntry};
