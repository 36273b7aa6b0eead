//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dsi.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dsi";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DSI";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration key of the plugin directory; read raw from `DSI_PLUGIN_DIR`
pub const PLUGIN_DIR_KEY: &str = "plugin_dir";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "DSI_LOG";

/// Fallback file name stem for the log file
pub const DEFAULT_LOG_FILE_STEM: &str = "dsi";

// ============================================================================
// PLUGIN CONSTANTS
// ============================================================================

/// File suffixes recognized as plugin archives (compared lowercase)
pub const PLUGIN_ARCHIVE_SUFFIXES: &[&str] = &[".jar", ".zip"];

/// Prefix of plugin directory values resolved against the home directory
pub const HOME_DIR_PREFIX: &str = "~/";
