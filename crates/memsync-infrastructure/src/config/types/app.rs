//! Main application configuration

use super::{GrouperConfig, LoggingConfig, SyncConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Batch synchronization settings
    pub sync: SyncConfig,

    /// Grouper service defaults
    pub grouper: GrouperConfig,
}
