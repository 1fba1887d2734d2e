//! Tests for SinkConfig parsing and loading.

use crate::config::{ConfigFormat, SinkConfig, SinkEntry};
use crate::{ConfigError, ErrorPolicy};

#[test]
fn parse_yaml_config() {
    let yaml = r#"
default_path: app.log
error_policy: fast_fail
sinks:
  - id: console
    kind: console
  - id: main
    kind: file
"#;

    let cfg: SinkConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.default_path.as_deref(), Some("app.log"));
    assert_eq!(cfg.policy().unwrap(), Some(ErrorPolicy::FastFail));
    assert_eq!(cfg.sinks.len(), 2);
    assert_eq!(cfg.sinks[1].kind, "file");
    assert!(cfg.sinks[1].path.is_none());
}

#[test]
fn parse_json_config_with_defaults() {
    let json = r#"{ "sinks": [ { "id": "f", "kind": "file", "path": "x.log" } ] }"#;

    let cfg: SinkConfig = serde_json::from_str(json).unwrap();
    assert!(cfg.default_path.is_none());
    assert_eq!(cfg.policy().unwrap(), None);
    assert_eq!(cfg.sinks[0].path.as_deref(), Some("x.log"));
}

#[test]
fn entry_helpers_set_kind() {
    assert_eq!(SinkEntry::console("c").kind, "console");
    let file = SinkEntry::file("f", Some("f.log".into()));
    assert_eq!(file.kind, "file");
    assert_eq!(file.path.as_deref(), Some("f.log"));
}

#[test]
fn format_from_extension() {
    assert_eq!(ConfigFormat::from_extension("JSON"), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_extension("yml"), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::from_extension("ini"), None);
}

#[test]
fn from_path_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sinks.ini");
    std::fs::write(&path, "x").unwrap();

    let err = SinkConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(ref f) if f == "ini"));
}

#[test]
fn from_path_without_extension_reports_empty_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sinks");
    std::fs::write(&path, "x").unwrap();

    let err = SinkConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(ref f) if f.is_empty()));
}

#[cfg(not(feature = "toml"))]
#[test]
fn toml_without_feature_names_the_format() {
    let err = SinkConfig::from_str_with(ConfigFormat::Toml, "").unwrap_err();
    assert_eq!(err.to_string(), "unsupported configuration format: toml");
}

#[test]
fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SinkConfig::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[cfg(feature = "yaml")]
#[test]
fn from_path_loads_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sinks.yaml");
    std::fs::write(&path, "sinks:\n  - id: out\n    kind: stdout\n").unwrap();

    let cfg = SinkConfig::from_path(&path).unwrap();
    assert_eq!(cfg.sinks[0].id, "out");
}

#[cfg(feature = "yaml")]
#[test]
fn invalid_yaml_is_a_parse_error() {
    let err = SinkConfig::from_str_with(ConfigFormat::Yaml, "sinks: [ {").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { format: "yaml", .. }));
}

#[cfg(feature = "toml")]
#[test]
fn from_str_parses_toml() {
    let text = r#"
default_path = "t.log"

[[sinks]]
id = "main"
kind = "file"
"#;
    let cfg = SinkConfig::from_str_with(ConfigFormat::Toml, text).unwrap();
    assert_eq!(cfg.default_path.as_deref(), Some("t.log"));
    assert_eq!(cfg.sinks[0].id, "main");
}

#[cfg(not(feature = "json"))]
#[test]
fn json_without_feature_is_unsupported() {
    let err = SinkConfig::from_str_with(ConfigFormat::Json, "{}").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(ref f) if f == "json"));
}
