use std::io::Write;

use glean_core::config::{DEFAULT_ALLOWED_ORIGINS, DEFAULT_MAX_SOURCE_BYTES, DEFAULT_PORT};
use glean_core::{Config, ConfigError};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.analysis.max_source_bytes, DEFAULT_MAX_SOURCE_BYTES);
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.server.allowed_origins, DEFAULT_ALLOWED_ORIGINS);
    assert!(config.server.allow_credentials);
}

#[test]
fn test_config_from_file() {
    let file = write_config(
        r#"
[analysis]
max_source_bytes = 4096

[extraction]
language_profiles = false

[extraction.extra]
control_structures = ["do_statement"]
keywords = ["do", "goto"]

[server]
port = 9090
allowed_origins = ["http://localhost:5173"]
"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.analysis.max_source_bytes, 4096);
    assert!(!config.extraction.language_profiles);
    assert_eq!(config.extraction.extra.control_structures, vec!["do_statement"]);
    assert_eq!(config.extraction.extra.keywords, vec!["do", "goto"]);
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.allowed_origins, vec!["http://localhost:5173"]);
    // Unset keys keep their defaults.
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
fn test_load_from_explicit_path() {
    let file = write_config("[server]\nhost = \"0.0.0.0\"\n");
    let config = Config::load_from(Some(file.path())).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError(_)));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_config("[server\nport = ");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_invalid_values_rejected() {
    let file = write_config("[analysis]\nmax_source_bytes = 0\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_default_config_string_round_trips() {
    let file = write_config(&Config::default_config_string());
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert!(config.extraction.language_profiles);
}

fn overrides<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

#[test]
fn test_overrides_on_defaults_are_validated() {
    let err = Config::default()
        .with_overrides(overrides(&[("GLEAN_MAX_SOURCE_BYTES", "0")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_overrides_replace_file_values() {
    let config = Config::default()
        .with_overrides(overrides(&[
            ("GLEAN_HOST", "0.0.0.0"),
            ("GLEAN_PORT", "9000"),
            ("GLEAN_MAX_SOURCE_BYTES", "2048"),
            ("GLEAN_LANGUAGE_PROFILES", "FALSE"),
        ]))
        .unwrap();

    assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
    assert_eq!(config.analysis.max_source_bytes, 2048);
    assert!(!config.extraction.language_profiles);
}

#[test]
fn test_malformed_overrides_are_rejected() {
    for vars in [
        [("GLEAN_PORT", "eighty")],
        [("GLEAN_MAX_SOURCE_BYTES", "1MB")],
        [("GLEAN_LANGUAGE_PROFILES", "sometimes")],
    ] {
        let err = Config::default().with_overrides(overrides(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{:?} accepted", vars);
    }
}
