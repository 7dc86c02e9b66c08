//! Infrastructure layer constants
//!
//! Scope names and other registry-level names live in
//! `ioc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ioc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ioc";

/// Environment variable prefix for configuration (`IOC__DEFAULT_SCOPE`)
pub const CONFIG_ENV_PREFIX: &str = "IOC";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "IOC_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;

/// File name prefix used when the configured log path has no stem
pub const LOG_DEFAULT_FILE_PREFIX: &str = "ioc";
