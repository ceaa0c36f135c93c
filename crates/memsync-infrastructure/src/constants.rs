//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "memsync.toml";

/// Directory name used for configuration lookups
pub const DEFAULT_CONFIG_DIR: &str = "memsync";

/// Prefix of configuration environment variables (`MEMSYNC__SYNC__SYNC_MAX`)
pub const CONFIG_ENV_PREFIX: &str = "MEMSYNC";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV_VAR: &str = "MEMSYNC_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "memsync";
