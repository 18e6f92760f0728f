//! Main application configuration

use serde::{Deserialize, Serialize};

use super::container::ContainerConfig;
use super::logging::LoggingConfig;

/// Root of the configuration tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Container bootstrap configuration
    pub container: ContainerConfig,
}
