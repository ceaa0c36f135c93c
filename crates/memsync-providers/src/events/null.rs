//! Null Event Sink
//!
//! Testing stub implementation that discards all events.
//!
//! ## Usage
//!
//! ```rust
//! use memsync_providers::events::NullEventSink;
//!
//! let sink = NullEventSink::new();
//! // All events are silently discarded
//! ```

use memsync_domain::events::SyncEvent;
use memsync_domain::ports::SyncEventSink;
use std::sync::Arc;

/// Null event sink for testing
///
/// Discards all emitted events without any side effects.
#[derive(Debug, Default)]
pub struct NullEventSink;

impl NullEventSink {
    /// Create a new null event sink
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl SyncEventSink for NullEventSink {
    fn emit(&self, _event: &SyncEvent) {}
}
