//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `dx_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "datax.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "datax";

/// Environment variable prefix for configuration (`DATAX__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "DATAX";

/// Separator between nested keys in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// RESOURCE CONSTANTS
// ============================================================================

/// Search root used when none is configured
pub const DEFAULT_SEARCH_ROOT: &str = ".";

/// Maximum directory depth scanned below each search root for descriptors
pub const DESCRIPTOR_SEARCH_DEPTH: usize = 8;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "DATAX_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// Log file name prefix when the configured path has no file stem
pub const LOG_FILE_PREFIX: &str = "datax";
