//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::resources::ResourceConfig;

/// Application configuration
///
/// Every section falls back to its defaults, so a settings file only needs
/// the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Resource discovery
    pub resources: ResourceConfig,

    /// Logging
    pub logging: LoggingConfig,
}
