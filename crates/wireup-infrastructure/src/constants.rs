//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Engine constants are defined in `wireup_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wireup.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wireup";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIREUP";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "WIREUP_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// File name prefix used when the configured log path has no stem
pub const LOG_FILE_PREFIX: &str = "wireup";

/// Log levels accepted by the configuration
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
