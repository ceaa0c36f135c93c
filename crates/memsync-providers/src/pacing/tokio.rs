//! Tokio Pacer
//!
//! Sleeps on the tokio timer between batches.

use async_trait::async_trait;
use memsync_domain::ports::Pacer;
use std::time::Duration;

/// Pacer backed by `tokio::time::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

impl TokioPacer {
    /// Create a new tokio pacer
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            ::tokio::time::sleep(delay).await;
        }
    }
}
