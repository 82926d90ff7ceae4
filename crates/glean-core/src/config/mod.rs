//! Configuration management for Glean.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. An explicit file passed by the caller
//! 3. Project-local `glean.toml` file
//! 4. User config `~/.config/glean/config.toml`
//! 5. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::concepts::TableExtension;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analysis limits.
    pub analysis: AnalysisConfig,

    /// Classification table configuration.
    pub extraction: ExtractionConfig,

    /// HTTP server configuration.
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./glean.toml` (project local)
    /// 2. `~/.config/glean/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, preferring `path` when given.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if Path::new(PROJECT_CONFIG_FILE).exists() {
            return Self::from_file(PROJECT_CONFIG_FILE);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Self::default().with_overrides(env_var)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");

        config.with_overrides(env_var)
    }

    /// Path of the per-user configuration file, if the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }

    /// Apply `GLEAN_*` overrides read through `lookup`, then validate.
    ///
    /// Every loading path ends here, so a config is never handed out
    /// unvalidated. Malformed override values are errors, not ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GLEAN_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GLEAN_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("GLEAN_PORT is not a port: {}", port)))?;
        }
        if let Some(size) = lookup("GLEAN_MAX_SOURCE_BYTES") {
            self.analysis.max_source_bytes = size.parse().map_err(|_| {
                ConfigError::Invalid(format!("GLEAN_MAX_SOURCE_BYTES is not a byte count: {}", size))
            })?;
        }
        if let Some(flag) = lookup("GLEAN_LANGUAGE_PROFILES") {
            self.extraction.language_profiles = parse_flag(&flag).ok_or_else(|| {
                ConfigError::Invalid(format!("GLEAN_LANGUAGE_PROFILES is not a boolean: {}", flag))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.max_source_bytes == 0 {
            return Err(ConfigError::Invalid(
                "analysis.max_source_bytes must be greater than zero".to_string(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.server.allow_credentials && self.server.allowed_origins.iter().any(|o| o == "*") {
            return Err(ConfigError::Invalid(
                "server.allowed_origins cannot contain \"*\" when credentials are allowed".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Analysis limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest source text accepted for one analysis (in bytes).
    pub max_source_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

/// Classification table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Layer each grammar's language profile over the reference table.
    pub language_profiles: bool,

    /// Extra tags added for every language.
    pub extra: TableExtension,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            language_profiles: DEFAULT_LANGUAGE_PROFILES,
            extra: TableExtension::default(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Browser origins allowed by CORS.
    pub allowed_origins: Vec<String>,

    /// Whether CORS responses allow credentials.
    pub allow_credentials: bool,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            allow_credentials: DEFAULT_ALLOW_CREDENTIALS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
