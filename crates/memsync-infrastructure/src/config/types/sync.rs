//! Batch synchronization configuration types

use memsync_domain::constants::{
    DEFAULT_BATCH_DELAY_SECS, DEFAULT_BATCH_SIZE, DEFAULT_BATCH_TIMEOUT_SECS, DEFAULT_SYNC_MAX,
};
use memsync_domain::error::Result;
use memsync_domain::value_objects::BatchConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Batch synchronization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Maximum members per request
    pub batch_size: usize,

    /// Per-request timeout in seconds
    pub batch_timeout_secs: u64,

    /// Pause after each batch in seconds (0 disables pausing)
    pub batch_delay_secs: u64,

    /// Largest total delta that may be synchronized
    pub sync_max: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_timeout_secs: DEFAULT_BATCH_TIMEOUT_SECS,
            batch_delay_secs: DEFAULT_BATCH_DELAY_SECS,
            sync_max: DEFAULT_SYNC_MAX,
        }
    }
}

impl SyncConfig {
    /// Convert into the domain batch configuration, enforcing its rules
    pub fn to_batch_config(&self) -> Result<BatchConfig> {
        BatchConfig::new(
            self.batch_size,
            Duration::from_secs(self.batch_timeout_secs),
            Duration::from_secs(self.batch_delay_secs),
            self.sync_max,
        )
    }
}
