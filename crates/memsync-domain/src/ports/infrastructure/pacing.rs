//! Pacing Port
//!
//! Abstracts the pause between batches so runs can be driven without real
//! wall-clock delay.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Throttles the rate of remote requests
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Wait for `delay` before the caller proceeds
    ///
    /// The pause is not cancellable once started.
    async fn pause(&self, delay: Duration);
}

/// Shared pacer for dependency injection
pub type SharedPacer = Arc<dyn Pacer>;
