//! Null Pacer
//!
//! Testing stub that never waits.

use async_trait::async_trait;
use memsync_domain::ports::Pacer;
use std::sync::Arc;
use std::time::Duration;

/// Pacer that returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPacer;

impl NullPacer {
    /// Create a new null pacer
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl Pacer for NullPacer {
    async fn pause(&self, _delay: Duration) {}
}
