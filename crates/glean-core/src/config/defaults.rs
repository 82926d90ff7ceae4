//! Default values for Glean configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// File Locations
// ============================================================================

/// Project-local configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "glean.toml";

/// Directory under the user config dir holding `config.toml`.
pub const USER_CONFIG_DIR: &str = "glean";

/// User configuration file name.
pub const USER_CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Analysis Defaults
// ============================================================================

/// Maximum accepted source size for a single analysis (1 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 1024 * 1024;

// ============================================================================
// Extraction Defaults
// ============================================================================

/// Whether grammar-specific language profiles extend the reference table.
pub const DEFAULT_LANGUAGE_PROFILES: bool = true;

// ============================================================================
// Server Defaults
// ============================================================================

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port.
pub const DEFAULT_PORT: u16 = 8000;

/// Origins allowed to call the API from a browser.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost", "http://127.0.0.1"];

/// Whether cross-origin requests may carry credentials.
pub const DEFAULT_ALLOW_CREDENTIALS: bool = true;

/// Per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP request body size (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
